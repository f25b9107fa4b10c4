use serde::Serialize;

use self::contact::ApiFieldViolation;

pub mod contact;

/// Response envelope shared by every contact endpoint outcome.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ApiFieldViolation>>,
}

impl ApiResponse {
    pub fn success(message: &'static str) -> Self {
        Self {
            success: true,
            message,
            errors: None,
        }
    }

    pub fn failure(message: &'static str) -> Self {
        Self {
            success: false,
            message,
            errors: None,
        }
    }

    pub fn validation_failure(message: &'static str, errors: Vec<ApiFieldViolation>) -> Self {
        Self {
            success: false,
            message,
            errors: Some(errors),
        }
    }
}
