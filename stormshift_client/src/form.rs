use stormshift_models::contact::{ContactForm, SubmissionField};
use tracing::warn;

use crate::api::ContactApiService;

/// Client-side state of the contact form.
///
/// Holds the four editable fields and the submitting flag; the embedding view
/// constructs one instance when the page is built and drives it through
/// [`Self::update_field`] and [`Self::submit`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    data: ContactForm,
    submitting: bool,
}

/// Transient notification shown once a submit settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl Notification {
    pub const MESSAGE_SENT: Self = Self {
        kind: NotificationKind::Success,
        title: "Message Sent!",
        description: "Thank you for reaching out. I'll get back to you soon.",
    };

    pub const SUBMIT_FAILED: Self = Self {
        kind: NotificationKind::Error,
        title: "Error",
        description: "Failed to send message. Please try again or email directly.",
    };
}

impl ContactFormState {
    pub fn data(&self) -> &ContactForm {
        &self.data
    }

    /// Whether a request is in flight; the submit control is disabled exactly
    /// while this is `true`.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Replaces the value of one field, leaving the others untouched.
    pub fn update_field(&mut self, field: SubmissionField, value: String) {
        match field {
            SubmissionField::Name => self.data.name = value,
            SubmissionField::Email => self.data.email = value,
            SubmissionField::Subject => self.data.subject = value,
            SubmissionField::Message => self.data.message = value,
        }
    }

    /// Marks the form as submitting and returns the payload for the request.
    pub fn begin_submit(&mut self) -> ContactForm {
        self.submitting = true;
        self.data.clone()
    }

    /// Settles a submit. The submitting flag is cleared unconditionally; the
    /// fields are reset only on success, so a failed submission is not lost.
    pub fn finish_submit(&mut self, result: anyhow::Result<()>) -> Notification {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.data = ContactForm::default();
                Notification::MESSAGE_SENT
            }
            Err(err) => {
                warn!("Failed to submit contact form: {err}");
                Notification::SUBMIT_FAILED
            }
        }
    }

    /// Issues exactly one request for the current field values.
    pub async fn submit<Api: ContactApiService>(&mut self, api: &Api) -> Notification {
        let form = self.begin_submit();
        let result = api.submit(form).await;
        self.finish_submit(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::MockContactApiService;

    use super::*;

    fn filled_form() -> ContactFormState {
        let mut state = ContactFormState::default();
        state.update_field(SubmissionField::Name, "Ada".into());
        state.update_field(SubmissionField::Email, "ada@example.com".into());
        state.update_field(SubmissionField::Subject, "Hello".into());
        state.update_field(SubmissionField::Message, "This is a long enough message.".into());
        state
    }

    #[test]
    fn update_field_leaves_the_other_fields_untouched() {
        // Arrange
        let mut state = filled_form();

        // Act
        state.update_field(SubmissionField::Subject, "Changed".into());

        // Assert
        assert_eq!(
            state.data(),
            &ContactForm {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                subject: "Changed".into(),
                message: "This is a long enough message.".into(),
            }
        );
    }

    #[test]
    fn submitting_flag_spans_begin_to_finish() {
        // Arrange
        let mut state = filled_form();
        assert!(!state.is_submitting());

        // Act + Assert
        state.begin_submit();
        assert!(state.is_submitting());

        state.finish_submit(Ok(()));
        assert!(!state.is_submitting());

        state.begin_submit();
        state.finish_submit(Err(anyhow::anyhow!("connection reset")));
        assert!(!state.is_submitting());
    }

    #[tokio::test]
    async fn successful_submit_resets_the_fields() {
        // Arrange
        let mut state = filled_form();
        let api = MockContactApiService::new().with_submit(state.data().clone(), Ok(()));

        // Act
        let notification = state.submit(&api).await;

        // Assert
        assert_eq!(notification, Notification::MESSAGE_SENT);
        assert_eq!(state.data(), &ContactForm::default());
        assert!(!state.is_submitting());
    }

    #[tokio::test]
    async fn failed_submit_keeps_the_fields() {
        // Arrange
        let mut state = filled_form();
        let api = MockContactApiService::new()
            .with_submit(state.data().clone(), Err(anyhow::anyhow!("500")));

        // Act
        let notification = state.submit(&api).await;

        // Assert
        assert_eq!(notification, Notification::SUBMIT_FAILED);
        assert_eq!(state.data(), &filled_form().data().clone());
        assert!(!state.is_submitting());
    }

    #[tokio::test]
    async fn each_submit_issues_exactly_one_request() {
        // Arrange
        let mut state = filled_form();
        let api = MockContactApiService::new()
            .with_submit(state.data().clone(), Err(anyhow::anyhow!("timeout")))
            .with_submit(state.data().clone(), Ok(()));

        // Act
        let first = state.submit(&api).await;
        let second = state.submit(&api).await;

        // Assert
        assert_eq!(first, Notification::SUBMIT_FAILED);
        assert_eq!(second, Notification::MESSAGE_SENT);
    }
}
