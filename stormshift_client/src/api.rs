use std::{
    future::Future,
    ops::Deref,
    sync::{Arc, LazyLock},
};

use stormshift_di::Build;
use stormshift_models::contact::ContactForm;
use stormshift_utils::stormshift_version;
use url::Url;

pub static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    let homepage = env!("CARGO_PKG_HOMEPAGE");
    let version = stormshift_version();

    format!("StormShift Labs Client ({homepage}, Version {version})")
});

const _: () = {
    assert!(!env!("CARGO_PKG_HOMEPAGE").is_empty());
};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Issues one POST of the given form. A network failure and a non-2xx
    /// response are indistinguishable failures to the caller.
    fn submit(&self, form: ContactForm) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Clone, Build)]
pub struct ContactApiClient {
    config: ContactApiClientConfig,
    #[state]
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ContactApiClientConfig {
    pub base_url: Arc<Url>,
}

impl ContactApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            config: ContactApiClientConfig {
                base_url: base_url.into(),
            },
            client: Default::default(),
        }
    }
}

impl ContactApiService for ContactApiClient {
    async fn submit(&self, form: ContactForm) -> anyhow::Result<()> {
        self.client
            .post(self.config.base_url.join("api/contact")?)
            .json(&form)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[cfg(any(test, feature = "mock"))]
impl MockContactApiService {
    pub fn with_submit(mut self, form: ContactForm, result: anyhow::Result<()>) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}

#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self(
            reqwest::Client::builder()
                .user_agent(&*USER_AGENT)
                .build()
                .unwrap(),
        )
    }
}
