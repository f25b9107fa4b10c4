use stormshift_di::Build;
use stormshift_email_contracts::{template::TemplateEmailService, ContentType, Email, EmailService};
use stormshift_models::email_address::EmailAddressWithName;
use stormshift_templates_contracts::{
    ContactAutoReplyTemplate, ContactNotificationTemplate, Template, TemplateService,
};

pub const AUTO_REPLY_SUBJECT: &str = "Thank you for contacting StormShift Labs";

#[derive(Debug, Clone, Build)]
pub struct TemplateEmailServiceImpl<Email, Template> {
    email: Email,
    template: Template,
}

impl<EmailS, TemplateS> TemplateEmailServiceImpl<EmailS, TemplateS> {
    pub fn new(email: EmailS, template: TemplateS) -> Self {
        Self { email, template }
    }
}

impl<EmailS, TemplateS> TemplateEmailService for TemplateEmailServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_contact_notification_email(
        &self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: &ContactNotificationTemplate,
    ) -> anyhow::Result<bool> {
        self.send_email(
            recipient,
            Some(reply_to),
            data,
            format!("Portfolio Contact: {}", data.subject),
        )
        .await
    }

    async fn send_contact_auto_reply_email(
        &self,
        recipient: EmailAddressWithName,
        data: &ContactAutoReplyTemplate,
    ) -> anyhow::Result<bool> {
        self.send_email(recipient, None, data, AUTO_REPLY_SUBJECT).await
    }
}

impl<EmailS, TemplateS> TemplateEmailServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_email<T: Template + 'static>(
        &self,
        recipient: EmailAddressWithName,
        reply_to: Option<EmailAddressWithName>,
        data: &T,
        subject: impl Into<String>,
    ) -> anyhow::Result<bool> {
        self.email
            .send(Email {
                recipient,
                subject: subject.into(),
                body: self.template.render(data)?,
                content_type: ContentType::Html,
                reply_to,
            })
            .await
    }
}
