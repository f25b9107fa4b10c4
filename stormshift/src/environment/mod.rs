use std::sync::Arc;

use stormshift_config::Config;
use stormshift_core_contact_impl::ContactFeatureConfig;
use stormshift_core_health_impl::HealthFeatureConfig;
use stormshift_di::provider;
use types::Email;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        email: Email,
        ..config: ConfigProvider {
            // Core
            ContactFeatureConfig,
            HealthFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Email) -> Self {
        Self {
            _state: Default::default(),
            email,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // Core
        contact_feature_config: ContactFeatureConfig,
        health_feature_config: HealthFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> Self {
        // Core
        let contact_feature_config = ContactFeatureConfig {
            email: Arc::new(config.contact.email.clone()),
        };

        let health_feature_config = HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        Self {
            _state: Default::default(),

            // Core
            contact_feature_config,
            health_feature_config,
        }
    }
}

#[cfg(test)]
mod tests {
    use stormshift_di::Provide;
    use stormshift_email_impl::EmailServiceImpl;
    use types::RestServer;

    use super::*;

    #[tokio::test]
    async fn provide_rest_server() {
        let config = stormshift_config::load_paths(&[stormshift_config::DEFAULT_CONFIG_PATH]).unwrap();
        let config_provider = ConfigProvider::new(&config);

        let email = EmailServiceImpl::dummy().await;

        let mut provider = Provider::new(config_provider, email);
        let _: RestServer = provider.provide();
    }
}
