use anyhow::Context;
use stormshift_config::EmailConfig;
use stormshift_email_impl::{EmailServiceConfig, EmailServiceImpl};

/// Builds the smtp transport from the configured host and credentials.
pub async fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(EmailServiceConfig {
        smtp_host: config.smtp_host.clone(),
        smtp_port: config.smtp_port,
        smtp_user: config.smtp_user.clone(),
        smtp_password: config.smtp_password.clone(),
        from: config.from.clone(),
    })
    .await
    .context("Failed to set up the smtp transport")
}
