use std::sync::Arc;

use stormshift_core_contact_contracts::{ContactFeatureService, ContactSubmitFormError};
use stormshift_di::Build;
use stormshift_email_contracts::template::TemplateEmailService;
use stormshift_models::{
    contact::{ContactForm, ContactSubmission},
    email_address::EmailAddressWithName,
};
use stormshift_templates_contracts::{ContactAutoReplyTemplate, ContactNotificationTemplate};
use tracing::error;

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<TemplateEmail> {
    template_email: TemplateEmail,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Mailbox receiving the owner notification for each submission.
    pub email: Arc<EmailAddressWithName>,
}

impl<TemplateEmail> ContactFeatureService for ContactFeatureServiceImpl<TemplateEmail>
where
    TemplateEmail: TemplateEmailService,
{
    async fn submit_form(&self, form: ContactForm) -> Result<(), ContactSubmitFormError> {
        let submission =
            ContactSubmission::from_form(form).map_err(ContactSubmitFormError::Validation)?;

        let submitter = submission
            .email
            .clone()
            .with_name((*submission.name).clone());

        let notification = ContactNotificationTemplate {
            name: submission.name.into_inner(),
            email: submission.email.as_str().into(),
            subject: (*submission.subject).clone(),
            message: submission.message.into_inner(),
        };
        let auto_reply = ContactAutoReplyTemplate {
            name: notification.name.clone(),
            subject: submission.subject.into_inner(),
        };

        // Both sends are started together and both are awaited; a failure in
        // either collapses to an overall failure after both have settled.
        let (notification_sent, auto_reply_sent) = tokio::join!(
            self.template_email.send_contact_notification_email(
                (*self.config.email).clone(),
                submitter.clone(),
                &notification,
            ),
            self.template_email
                .send_contact_auto_reply_email(submitter, &auto_reply),
        );

        if !(notification_sent? && auto_reply_sent?) {
            error!("smtp server did not accept the contact emails");
            return Err(ContactSubmitFormError::Send);
        }

        Ok(())
    }
}
