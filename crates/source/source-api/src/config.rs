//! Source configuration types.

use serde::{Deserialize, Serialize};
use source_spi::{Result, SourceError};
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_NATIONAL_URL: &str = "https://raw.githubusercontent.com/pcm-dpc/COVID-19/master/dati-json/dpc-covid19-ita-andamento-nazionale.json";
pub const DEFAULT_REGIONAL_URL: &str =
    "https://raw.githubusercontent.com/pcm-dpc/COVID-19/master/dati-json/dpc-covid19-ita-regioni.json";
pub const CSSE_DEATHS_URL: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_time_series/time_series_19-covid-Deaths.csv";
pub const POLITOLOGUE_URL: &str =
    "https://coronavirus.politologue.com/data/coronavirus/coronacsv.aspx?format=json";

/// Which feed supplies the per-country series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlobalProvider {
    /// Wide CSV time series, one column per day
    #[default]
    Csse,
    /// Aggregator JSON with French country names
    Politologue,
}

impl GlobalProvider {
    /// Default URL of the provider.
    pub fn default_url(&self) -> &'static str {
        match self {
            GlobalProvider::Csse => CSSE_DEATHS_URL,
            GlobalProvider::Politologue => POLITOLOGUE_URL,
        }
    }
}

impl FromStr for GlobalProvider {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csse" => Ok(GlobalProvider::Csse),
            "politologue" => Ok(GlobalProvider::Politologue),
            other => Err(SourceError::ConfigError(format!(
                "unknown global provider '{}'",
                other
            ))),
        }
    }
}

/// Configuration for fetching the upstream feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub national_url: String,
    pub regional_url: String,
    pub global_url: String,
    pub global_provider: GlobalProvider,
    /// Lifetime of a cached response body
    pub cache_ttl_secs: u64,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            national_url: DEFAULT_NATIONAL_URL.to_string(),
            regional_url: DEFAULT_REGIONAL_URL.to_string(),
            global_url: GlobalProvider::Csse.default_url().to_string(),
            global_provider: GlobalProvider::Csse,
            cache_ttl_secs: 600,
            timeout_secs: 30,
        }
    }
}

impl SourceConfig {
    /// Configuration reading the aggregator instead of the CSV feed.
    pub fn politologue() -> Self {
        Self {
            global_url: POLITOLOGUE_URL.to_string(),
            global_provider: GlobalProvider::Politologue,
            ..Self::default()
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Defaults overridden by `COVID_*` environment variables.
    ///
    /// Changing the provider without a URL switches to that provider's
    /// default URL.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = SourceConfigBuilder::new();
        if let Some(provider) = lookup("COVID_GLOBAL_PROVIDER") {
            builder = builder.global_provider(provider.parse()?);
        }
        if let Some(url) = lookup("COVID_NATIONAL_URL") {
            builder = builder.national_url(&url);
        }
        if let Some(url) = lookup("COVID_REGIONAL_URL") {
            builder = builder.regional_url(&url);
        }
        if let Some(url) = lookup("COVID_GLOBAL_URL") {
            builder = builder.global_url(&url);
        }
        if let Some(ttl) = lookup("COVID_CACHE_TTL_SECS") {
            let ttl = ttl.trim().parse().map_err(|_| {
                SourceError::ConfigError(format!("COVID_CACHE_TTL_SECS is not a number: {}", ttl))
            })?;
            builder = builder.cache_ttl_secs(ttl);
        }
        builder.build()
    }
}

/// Builder for SourceConfig.
#[derive(Debug, Default)]
pub struct SourceConfigBuilder {
    national_url: Option<String>,
    regional_url: Option<String>,
    global_url: Option<String>,
    global_provider: Option<GlobalProvider>,
    cache_ttl_secs: Option<u64>,
    timeout_secs: Option<u64>,
}

impl SourceConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn national_url(mut self, url: &str) -> Self {
        self.national_url = Some(url.to_string());
        self
    }

    pub fn regional_url(mut self, url: &str) -> Self {
        self.regional_url = Some(url.to_string());
        self
    }

    pub fn global_url(mut self, url: &str) -> Self {
        self.global_url = Some(url.to_string());
        self
    }

    pub fn global_provider(mut self, provider: GlobalProvider) -> Self {
        self.global_provider = Some(provider);
        self
    }

    pub fn cache_ttl_secs(mut self, secs: u64) -> Self {
        self.cache_ttl_secs = Some(secs);
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<SourceConfig> {
        let defaults = SourceConfig::default();
        let global_provider = self.global_provider.unwrap_or(defaults.global_provider);
        let timeout_secs = self.timeout_secs.unwrap_or(defaults.timeout_secs);
        if timeout_secs == 0 {
            return Err(SourceError::ConfigError(
                "timeout must be at least one second".to_string(),
            ));
        }

        let config = SourceConfig {
            national_url: self.national_url.unwrap_or(defaults.national_url),
            regional_url: self.regional_url.unwrap_or(defaults.regional_url),
            global_url: self
                .global_url
                .unwrap_or_else(|| global_provider.default_url().to_string()),
            global_provider,
            cache_ttl_secs: self.cache_ttl_secs.unwrap_or(defaults.cache_ttl_secs),
            timeout_secs,
        };

        for url in [&config.national_url, &config.regional_url, &config.global_url] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(SourceError::ConfigError(format!(
                    "not an http(s) URL: {}",
                    url
                )));
            }
        }
        Ok(config)
    }
}
