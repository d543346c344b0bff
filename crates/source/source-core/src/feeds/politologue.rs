//! Third-party aggregator JSON feed.
//!
//! `{"PaysData": [{"Date", "Pays", "Deces", ...}]}` with French country
//! names. Countries outside the known set are skipped.

use serde::Deserialize;
use series_spi::{Country, Observation, SeriesGroup, TimePoint};
use source_spi::{Feed, Result, SourceError};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(rename = "PaysData")]
    pays_data: Vec<CountryRecord>,
}

#[derive(Debug, Deserialize)]
struct CountryRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Pays")]
    pays: String,
    #[serde(rename = "Deces")]
    deces: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PolitologueFeed;

impl Feed for PolitologueFeed {
    fn name(&self) -> &str {
        "politologue"
    }

    fn parse(&self, body: &str) -> Result<Vec<Observation>> {
        let payload: Payload =
            serde_json::from_str(body).map_err(|e| SourceError::ParseError(e.to_string()))?;

        let total = payload.pays_data.len();
        let mut observations = Vec::new();
        for record in payload.pays_data {
            let Some(country) = Country::from_aggregator_name(&record.pays) else {
                continue;
            };
            let date = TimePoint::parse_date(&record.date)?;
            observations.push(Observation::new(
                date,
                record.deces,
                SeriesGroup::Country(country),
            ));
        }
        debug!(kept = observations.len(), total, "aggregator rows filtered");

        observations.sort_by_key(|o| o.date);
        Ok(observations)
    }
}
