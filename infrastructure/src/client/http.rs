//! HTTP client provider
//!
//! [`HttpClientProvider`] implements [`ClientProviderPort`] by handing out
//! [`HttpServiceClient`]s that store modules with `PUT <base url><uri>`.
//! Connection reuse and retries are left to `reqwest` defaults.

use crate::config::FileClientConfig;
use async_trait::async_trait;
use modsync_application::{ClientError, ClientProviderPort, ServiceClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Produces HTTP clients bound to one base URL.
#[derive(Debug, Clone)]
pub struct HttpClientProvider {
    base_url: String,
    timeout: Duration,
}

impl HttpClientProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a provider from the `[client]` section.
    ///
    /// Returns `None` when no URL is configured.
    pub fn from_config(config: &FileClientConfig) -> Option<Self> {
        config
            .url
            .as_ref()
            .map(|url| Self::new(url.as_str()).with_timeout(config.timeout()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ClientProviderPort for HttpClientProvider {
    fn client(&self) -> Result<Arc<dyn ServiceClient>, ClientError> {
        if self.base_url.is_empty() {
            return Err(ClientError::NotConfigured("empty base URL".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        Ok(Arc::new(HttpServiceClient {
            client,
            base_url: self.base_url.clone(),
        }))
    }
}

/// A `reqwest`-backed [`ServiceClient`].
pub struct HttpServiceClient {
    client: reqwest::Client,
    base_url: String,
}

#[async_trait]
impl ServiceClient for HttpServiceClient {
    fn endpoint(&self) -> &str {
        &self.base_url
    }

    async fn put_module(&self, uri: &str, content: Vec<u8>) -> Result<(), ClientError> {
        let url = format!("{}{}", self.base_url, uri);
        let response = self
            .client
            .put(&url)
            .body(content)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Rejected {
                uri: uri.to_string(),
                status: status.as_u16(),
            });
        }

        debug!("Stored module {} ({})", uri, status);
        Ok(())
    }
}

fn map_reqwest_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Connection(e.to_string())
    }
}
