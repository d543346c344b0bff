//! Series sources: HTTP-backed and in-memory.

use async_trait::async_trait;
use series_core::{group_observations, PatchTable};
use series_spi::{Observation, SeriesSet};
use source_api::SourceConfig;
use source_spi::{Feed, FeedObservations, MergedResponse, Result, SeriesSource, SourceError};
use tracing::info;

use crate::client::HttpClient;
use crate::feeds::{global_feed, NationalFeed, RegionalFeed};

/// Group feed rows into sorted, deduplicated series.
pub fn assemble(observations: FeedObservations) -> SeriesSet {
    group_observations(&observations.into_rows())
}

/// Fetches the three upstream feeds through the response cache.
pub struct HttpSeriesSource {
    config: SourceConfig,
    client: HttpClient,
    national: NationalFeed,
    regional: RegionalFeed,
    global: Box<dyn Feed>,
    patches: PatchTable,
}

impl HttpSeriesSource {
    pub fn new(config: SourceConfig) -> Result<Self> {
        let client = HttpClient::new(&config)?;
        let global = global_feed(config.global_provider);
        Ok(Self {
            config,
            client,
            national: NationalFeed,
            regional: RegionalFeed,
            global,
            patches: PatchTable::known_gaps(),
        })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    async fn fetch_feed(&self, feed: &dyn Feed, url: &str) -> Result<Vec<Observation>> {
        let body = self.client.get_text(url).await?;
        let rows = feed.parse(&body)?;
        if rows.is_empty() {
            return Err(SourceError::NoData);
        }
        info!(feed = feed.name(), rows = rows.len(), "feed parsed");
        Ok(rows)
    }
}

#[async_trait]
impl SeriesSource for HttpSeriesSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_observations(&self) -> Result<FeedObservations> {
        let (national, regional, global) = tokio::try_join!(
            self.fetch_feed(&self.national, &self.config.national_url),
            self.fetch_feed(&self.regional, &self.config.regional_url),
            self.fetch_feed(self.global.as_ref(), &self.config.global_url),
        )?;

        let national = self.patches.apply(national);
        Ok(FeedObservations::new(national, regional, global))
    }

    async fn fetch_all_series(&self) -> Result<SeriesSet> {
        Ok(assemble(self.fetch_observations().await?))
    }
}

/// Serves a fixed set of rows; used by tests and for offline input files.
#[derive(Debug, Clone, Default)]
pub struct StaticSeriesSource {
    observations: FeedObservations,
}

impl StaticSeriesSource {
    pub fn new(observations: FeedObservations) -> Self {
        Self { observations }
    }

    /// Rows of a previously saved merged response.
    pub fn from_merged(response: MergedResponse) -> Result<Self> {
        Ok(Self::new(response.into_observations()?))
    }

    /// Parse a merged response JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let response: MergedResponse =
            serde_json::from_str(json).map_err(|e| SourceError::ParseError(e.to_string()))?;
        Self::from_merged(response)
    }
}

#[async_trait]
impl SeriesSource for StaticSeriesSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_observations(&self) -> Result<FeedObservations> {
        Ok(self.observations.clone())
    }

    async fn fetch_all_series(&self) -> Result<SeriesSet> {
        let set = assemble(self.observations.clone());
        if set.iter().all(|series| series.is_empty()) {
            return Err(SourceError::NoData);
        }
        Ok(set)
    }
}
