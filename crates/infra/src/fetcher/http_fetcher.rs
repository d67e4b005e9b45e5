//! Remote list fetcher
//!
//! Issues `GET {endpoint}?limit={page_size}` and decodes the body as a JSON
//! array of profiles. Any record the decoder rejects fails the whole batch.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use swipedeck_core::ProfileFetcher;
use swipedeck_domain::{FetchConfig, FetchError, Profile, Result};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::errors::conversions::status_message;
use crate::errors::IntoFetchError;
use crate::http::HttpClient;

/// `ProfileFetcher` backed by the HTTP list endpoint
#[derive(Clone)]
pub struct HttpProfileFetcher {
    client: HttpClient,
    endpoint: String,
    page_size: u32,
}

impl HttpProfileFetcher {
    pub fn new(client: HttpClient, endpoint: impl Into<String>, page_size: u32) -> Self {
        Self { client, endpoint: endpoint.into(), page_size }
    }

    /// Build the fetcher and its transport from configuration.
    ///
    /// The endpoint itself is only parsed per request, so a malformed value
    /// surfaces as `FetchError::InvalidUrl` from [`ProfileFetcher::fetch`].
    ///
    /// # Errors
    /// Returns `SwipeDeckError::Network` if the HTTP client cannot be built.
    pub fn from_config(config: &FetchConfig) -> Result<Self> {
        let mut builder = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .max_attempts(config.max_attempts);
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        Ok(Self::new(builder.build()?, config.endpoint.clone(), config.page_size))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Endpoint with the `limit` query parameter appended.
    ///
    /// # Errors
    /// `FetchError::InvalidUrl` when the endpoint does not parse or is not
    /// http(s).
    pub fn request_url(&self) -> std::result::Result<Url, FetchError> {
        let mut url = Url::parse(&self.endpoint).map_err(IntoFetchError::into_fetch_error)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(format!(
                "unsupported scheme '{}' in {}",
                url.scheme(),
                self.endpoint
            )));
        }
        url.query_pairs_mut().append_pair("limit", &self.page_size.to_string());
        Ok(url)
    }
}

#[async_trait]
impl ProfileFetcher for HttpProfileFetcher {
    #[instrument(skip(self), fields(endpoint = %self.endpoint, limit = self.page_size))]
    async fn fetch(&self) -> std::result::Result<Vec<Profile>, FetchError> {
        let url = self.request_url()?;
        let response = self.client.send(self.client.request(Method::GET, url)).await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "profile list request rejected");
            return Err(FetchError::Transport(status_message(status)));
        }

        let body = response.bytes().await.map_err(IntoFetchError::into_fetch_error)?;
        let profiles: Vec<Profile> =
            serde_json::from_slice(&body).map_err(IntoFetchError::into_fetch_error)?;

        debug!(count = profiles.len(), "profile list decoded");
        Ok(profiles)
    }
}
