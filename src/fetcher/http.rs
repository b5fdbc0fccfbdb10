//! HTTP fetcher for the proposal platform

use super::traits::{FetchResult, PageFetcher};
use crate::config::Config;
use crate::error::{Error, FetchError, Result};
use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

/// Fetches proposal pages with a single GET per identifier
///
/// No retries and no redirect customization; the timeout is the one from
/// [`HttpConfig`](crate::config::HttpConfig), unset by default.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    /// HTTP client shared by every request of a crawl
    client: reqwest::Client,

    /// Page URL the `id` query parameter is appended to
    base_url: Url,
}

impl HttpFetcher {
    /// Create a fetcher from the crawl configuration
    ///
    /// # Errors
    /// Returns error if the base URL does not parse or the HTTP client cannot be created
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            Error::config(
                "base_url",
                format!("invalid base URL '{}': {}", config.base_url, e),
            )
        })?;

        let mut builder = reqwest::Client::builder().user_agent(config.http.user_agent.as_str());
        if let Some(timeout) = config.http.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    /// URL of the page for `id`: the base URL with `id=<id>` appended to its query
    pub fn page_url(&self, id: u64) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("id", &id.to_string());
        url
    }

    async fn get_text(&self, url: Url) -> FetchResult {
        let response = self.client.get(url).send().await?;

        if let Some(err) = FetchError::from_status(response.status().as_u16()) {
            return Err(err);
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, id: u64) -> FetchResult {
        let url = self.page_url(id);
        debug!(id, url = %url, "Accessing page");

        let result = self.get_text(url).await;
        match &result {
            Ok(page) => info!(id, bytes = page.len(), "Fetched page"),
            Err(e) => info!(id, category = e.category(), "Failed to fetch page: {}", e),
        }
        result
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
