use std::future::Future;

use stormshift_models::email_address::EmailAddressWithName;
use stormshift_templates_contracts::{ContactAutoReplyTemplate, ContactNotificationTemplate};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateEmailService: Send + Sync + 'static {
    /// Sends the owner notification for a contact form submission. `reply_to`
    /// is the submitter, so the owner can answer straight from their mailbox.
    fn send_contact_notification_email(
        &self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: &ContactNotificationTemplate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Sends the thank-you auto-reply to the submitter.
    fn send_contact_auto_reply_email(
        &self,
        recipient: EmailAddressWithName,
        data: &ContactAutoReplyTemplate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[cfg(feature = "mock")]
impl MockTemplateEmailService {
    pub fn with_send_contact_notification_email(
        mut self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: ContactNotificationTemplate,
        result: bool,
    ) -> Self {
        self.expect_send_contact_notification_email()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(reply_to),
                mockall::predicate::eq(data),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_contact_auto_reply_email(
        mut self,
        recipient: EmailAddressWithName,
        data: ContactAutoReplyTemplate,
        result: bool,
    ) -> Self {
        self.expect_send_contact_auto_reply_email()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(data),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
