use std::future::Future;

use stormshift_models::contact::{ContactForm, FieldViolation};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validates a raw contact form and, if it passes, dispatches the owner
    /// notification and the auto-reply. Either both emails go out or the whole
    /// submission fails.
    fn submit_form(
        &self,
        form: ContactForm,
    ) -> impl Future<Output = Result<(), ContactSubmitFormError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitFormError {
    #[error("Submission failed validation")]
    Validation(Vec<FieldViolation>),
    #[error("Failed to send message.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit_form(
        mut self,
        form: ContactForm,
        result: Result<(), ContactSubmitFormError>,
    ) -> Self {
        self.expect_submit_form()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
