use serde::Serialize;
use stormshift_models::contact::{FieldViolation, SubmissionField};

/// One failed validation rule as exposed on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiFieldViolation {
    pub field: SubmissionField,
    pub message: &'static str,
}

impl From<FieldViolation> for ApiFieldViolation {
    fn from(value: FieldViolation) -> Self {
        Self {
            field: value.field,
            message: value.message,
        }
    }
}
