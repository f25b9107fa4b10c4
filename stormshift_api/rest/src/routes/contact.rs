use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Response,
    routing, Json, Router,
};
use stormshift_core_contact_contracts::{ContactFeatureService, ContactSubmitFormError};
use stormshift_models::contact::ContactForm;

use super::{error, success, validation_error};

const MESSAGE_SENT: &str = "Message sent successfully";
const VALIDATION_ERROR: &str = "Validation error";
const INVALID_JSON: &str = "Invalid JSON data";
const FAILED_TO_SEND: &str = "Failed to send message. Please try again later.";

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    form: Result<Json<ContactForm>, JsonRejection>,
) -> Response {
    // The body is untrusted; anything that deserializes lands in the
    // validation step, everything else is rejected here.
    let Ok(Json(form)) = form else {
        return validation_error(INVALID_JSON, Vec::new());
    };

    match service.submit_form(form).await {
        Ok(()) => success(MESSAGE_SENT),
        Err(ContactSubmitFormError::Validation(violations)) => validation_error(
            VALIDATION_ERROR,
            violations.into_iter().map(Into::into).collect(),
        ),
        Err(ContactSubmitFormError::Send) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, FAILED_TO_SEND)
        }
        Err(ContactSubmitFormError::Other(err)) => {
            tracing::error!("Failed to handle contact form submission: {err}");
            error(StatusCode::INTERNAL_SERVER_ERROR, FAILED_TO_SEND)
        }
    }
}
