//! Cached HTTP GET for the upstream feeds.

use reqwest::Client;
use source_api::SourceConfig;
use source_spi::{Result, SourceError};
use tracing::info;

use crate::cache::ResponseCache;

/// reqwest client plus the response cache.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    cache: ResponseCache,
}

impl HttpClient {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("covid-charts/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()
            .map_err(|e| SourceError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            cache: ResponseCache::new(config.cache_ttl()),
        })
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Body of `url`, from the cache when fresh.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        if let Some(body) = self.cache.get(url) {
            return Ok(body);
        }

        info!(url, "fetching data");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::RequestFailed(e.to_string()))?;

        self.cache.insert(url, body.clone());
        Ok(body)
    }
}
