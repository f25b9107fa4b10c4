use anyhow::{anyhow, bail};
use lettre::{
    message::{header, MessageBuilder},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use stormshift_email_contracts::{ContentType, Email, EmailService};
use stormshift_models::email_address::EmailAddressWithName;
use stormshift_utils::Apply;
use tracing::warn;

pub mod template;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddressWithName,
    // `None` when the configured credentials are incomplete; every send then
    // fails closed instead of attempting an anonymous login.
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

#[derive(Debug, Clone)]
pub struct EmailServiceConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    pub from: EmailAddressWithName,
}

impl EmailServiceImpl {
    pub async fn new(config: EmailServiceConfig) -> anyhow::Result<Self> {
        let transport = match (config.smtp_user, config.smtp_password) {
            (Some(user), Some(password)) => Some(
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                    .port(config.smtp_port)
                    .credentials(Credentials::new(user, password))
                    .build(),
            ),
            (None, None) => Some(
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                    .port(config.smtp_port)
                    .build(),
            ),
            _ => {
                warn!("smtp credentials are incomplete, outbound email is disabled");
                None
            }
        };

        Ok(Self {
            from: config.from,
            transport,
        })
    }

    #[cfg(feature = "dummy")]
    pub async fn dummy() -> Self {
        Self::new(EmailServiceConfig {
            smtp_host: "localhost".into(),
            smtp_port: 25,
            smtp_user: None,
            smtp_password: None,
            from: "dummy@example.com".parse().unwrap(),
        })
        .await
        .unwrap()
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let Some(transport) = &self.transport else {
            bail!("smtp credentials are not fully configured, refusing to send");
        };

        let message = Message::builder()
            .from(self.from.0.clone())
            .to(email.recipient.0)
            .apply_map(email.reply_to.map(|x| x.0), MessageBuilder::reply_to)
            .subject(email.subject)
            .header(match email.content_type {
                ContentType::Text => header::ContentType::TEXT_PLAIN,
                ContentType::Html => header::ContentType::TEXT_HTML,
            })
            .body(email.body)?;

        transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        let Some(transport) = &self.transport else {
            bail!("smtp credentials are not fully configured");
        };

        transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}
