use anyhow::bail;
use clap::Subcommand;
use stormshift_client::{
    api::ContactApiClient,
    form::{ContactFormState, NotificationKind},
};
use stormshift_models::contact::SubmissionField;
use url::Url;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Submit the contact form against a running backend
    Submit {
        /// Base url of the backend
        #[arg(long, default_value = "http://localhost:8000/")]
        endpoint: Url,
        name: String,
        email: String,
        subject: String,
        message: String,
    },
}

impl ContactCommand {
    pub async fn invoke(self) -> anyhow::Result<()> {
        match self {
            ContactCommand::Submit {
                endpoint,
                name,
                email,
                subject,
                message,
            } => submit(endpoint, name, email, subject, message).await,
        }
    }
}

async fn submit(
    endpoint: Url,
    name: String,
    email: String,
    subject: String,
    message: String,
) -> anyhow::Result<()> {
    let api = ContactApiClient::new(endpoint);

    let mut form = ContactFormState::default();
    form.update_field(SubmissionField::Name, name);
    form.update_field(SubmissionField::Email, email);
    form.update_field(SubmissionField::Subject, subject);
    form.update_field(SubmissionField::Message, message);

    let notification = form.submit(&api).await;
    println!("{}: {}", notification.title, notification.description);

    match notification.kind {
        NotificationKind::Success => Ok(()),
        NotificationKind::Error => bail!("Submission failed"),
    }
}
