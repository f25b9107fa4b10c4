use stormshift_config::Config;
use stormshift_di::Provide;
use stormshift_email_contracts::EmailService;
use tracing::{info, warn};

use crate::{
    email,
    environment::{types::RestServer, ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email).await?;
    // A dead or unconfigured smtp server must not keep the api down; every
    // submission fails closed with a 500 until it comes back.
    if let Err(err) = email.ping().await {
        warn!("Failed to ping smtp server: {err}");
    }

    let config_provider = ConfigProvider::new(&config);
    let mut provider = Provider::new(config_provider, email);
    let server: RestServer = provider.provide();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
