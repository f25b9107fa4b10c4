use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{contact::ApiFieldViolation, ApiResponse};

pub mod contact;
pub mod health;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

fn success(message: &'static str) -> Response {
    Json(ApiResponse::success(message)).into_response()
}

fn error(code: StatusCode, message: &'static str) -> Response {
    (code, Json(ApiResponse::failure(message))).into_response()
}

fn validation_error(message: &'static str, errors: Vec<ApiFieldViolation>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::validation_failure(message, errors)),
    )
        .into_response()
}
