//! Where the permission matrix comes from.

use crate::error::FetchError;
use async_trait::async_trait;
use crm_access_config::EndpointConfig;
use crm_access_core::PermissionMatrix;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Resolves the signed-in user's permission matrix.
#[async_trait]
pub trait PermissionSource: Send + Sync {
    /// Fetch the current matrix. One call is one network request; no retries.
    async fn fetch_permissions(&self) -> Result<PermissionMatrix, FetchError>;
}

/// `GET /api/salesforce/permissions` over HTTP.
pub struct HttpPermissionSource {
    client: Client,
    url: String,
    auth_token: Option<String>,
    timeout: Duration,
}

impl HttpPermissionSource {
    /// Create a source using `client` for the endpoint described by `config`.
    ///
    /// The timeout is applied per request, so a client shared with the rest
    /// of the application keeps its own settings.
    #[must_use]
    pub fn new(client: Client, config: &EndpointConfig) -> Self {
        Self {
            client,
            url: config.permissions_url(),
            auth_token: config.auth_token.clone(),
            timeout: config.timeout(),
        }
    }

    /// Create a source with its own client.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] if the HTTP client cannot be built.
    pub fn from_config(config: &EndpointConfig) -> Result<Self, FetchError> {
        let client = Client::builder().build()?;
        Ok(Self::new(client, config))
    }

    /// URL this source requests.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PermissionSource for HttpPermissionSource {
    async fn fetch_permissions(&self) -> Result<PermissionMatrix, FetchError> {
        let url = reqwest::Url::parse(&self.url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", self.url)))?;

        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .timeout(self.timeout);

        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        debug!("Fetching permissions from {}", self.url);
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await?;
        PermissionMatrix::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}
