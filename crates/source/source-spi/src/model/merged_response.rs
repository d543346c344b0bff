//! JSON shape served to the charts.
//!
//! Flat `{date, value, region|country}` rows, one list per feed. The shape is
//! kept stable so the charts can be pointed at a saved copy.

use serde::{Deserialize, Serialize};
use series_spi::{Country, Observation, SeriesGroup, TimePoint};

use super::FeedObservations;
use crate::error::Result;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalRow {
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalRow {
    pub date: String,
    pub value: f64,
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalRow {
    pub date: String,
    pub value: f64,
    pub country: Country,
}

/// The merged upstream response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedResponse {
    pub italian_data: Vec<NationalRow>,
    pub regional_data: Vec<RegionalRow>,
    pub global_data: Vec<GlobalRow>,
}

impl MergedResponse {
    /// Flatten tagged rows; each row lands in the list of its tag.
    pub fn from_observations(observations: &FeedObservations) -> Self {
        let mut response = MergedResponse::default();
        for o in observations.iter() {
            let date = o.date.format(DATE_FORMAT).to_string();
            match &o.group {
                SeriesGroup::National => response.italian_data.push(NationalRow {
                    date,
                    value: o.value,
                }),
                SeriesGroup::Region(region) => response.regional_data.push(RegionalRow {
                    date,
                    value: o.value,
                    region: region.clone(),
                }),
                SeriesGroup::Country(country) => response.global_data.push(GlobalRow {
                    date,
                    value: o.value,
                    country: *country,
                }),
            }
        }
        response
    }

    /// Re-tag the rows. Dates may carry a time of day.
    pub fn into_observations(self) -> Result<FeedObservations> {
        let national = self
            .italian_data
            .into_iter()
            .map(|r| tagged(&r.date, r.value, SeriesGroup::National))
            .collect::<Result<Vec<_>>>()?;
        let regional = self
            .regional_data
            .into_iter()
            .map(|r| tagged(&r.date, r.value, SeriesGroup::Region(r.region)))
            .collect::<Result<Vec<_>>>()?;
        let global = self
            .global_data
            .into_iter()
            .map(|r| tagged(&r.date, r.value, SeriesGroup::Country(r.country)))
            .collect::<Result<Vec<_>>>()?;

        Ok(FeedObservations::new(national, regional, global))
    }
}

fn tagged(date: &str, value: f64, group: SeriesGroup) -> Result<Observation> {
    Ok(Observation::new(TimePoint::parse_date(date)?, value, group))
}
