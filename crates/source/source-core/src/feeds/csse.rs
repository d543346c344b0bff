//! JHU CSSE wide CSV time series.
//!
//! One row per province, one column per day:
//!
//! ```text
//! Province/State,Country/Region,Lat,Long,1/22/20,1/23/20,...
//! ```
//!
//! Only the known countries are kept. France, the United Kingdom and the
//! Netherlands list overseas territories beside a mainland row, and only the
//! mainland row is read. Every other country's province rows are summed per
//! day.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use series_core::sum_by_date;
use series_spi::{Country, Observation, SeriesGroup, TimePoint};
use source_spi::{Feed, Result, SourceError};
use tracing::debug;

const PROVINCE_COLUMN: usize = 0;
const COUNTRY_COLUMN: usize = 1;
const FIRST_DATE_COLUMN: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct CsseFeed;

impl CsseFeed {
    fn date_columns(headers: &StringRecord) -> Result<Vec<NaiveDate>> {
        if headers.len() <= FIRST_DATE_COLUMN {
            return Err(SourceError::Csv(format!(
                "expected date columns after column {}, found {} columns",
                FIRST_DATE_COLUMN,
                headers.len()
            )));
        }
        headers
            .iter()
            .skip(FIRST_DATE_COLUMN)
            .map(|h| TimePoint::parse_date(h).map_err(SourceError::from))
            .collect()
    }

    /// Whether a row of `country` contributes to its series.
    fn keeps_row(country: Country, province: &str) -> bool {
        if country.has_mainland_row() {
            province.is_empty() || province == country.csse_name()
        } else {
            true
        }
    }
}

impl Feed for CsseFeed {
    fn name(&self) -> &str {
        "csse"
    }

    fn parse(&self, body: &str) -> Result<Vec<Observation>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(body.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| SourceError::Csv(e.to_string()))?
            .clone();
        let dates = Self::date_columns(&headers)?;

        let mut rows = Vec::new();
        let mut countries = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| SourceError::Csv(e.to_string()))?;
            let province = record.get(PROVINCE_COLUMN).unwrap_or("").trim();
            let Some(country) = record
                .get(COUNTRY_COLUMN)
                .and_then(|name| Country::from_csse_name(name.trim()))
            else {
                continue;
            };
            if !Self::keeps_row(country, province) {
                continue;
            }

            for (date, cell) in dates.iter().zip(record.iter().skip(FIRST_DATE_COLUMN)) {
                let cell = cell.trim();
                if cell.is_empty() {
                    continue;
                }
                let value: f64 = cell.parse().map_err(|_| {
                    SourceError::Csv(format!(
                        "non-numeric count '{}' for {} on {}",
                        cell, country, date
                    ))
                })?;
                rows.push(Observation::new(*date, value, SeriesGroup::Country(country)));
            }
            if !countries.contains(&country) {
                countries.push(country);
            }
        }
        debug!(rows = rows.len(), countries = countries.len(), "csv rows kept");

        countries.sort();
        let observations = countries
            .into_iter()
            .flat_map(|country| {
                let group = SeriesGroup::Country(country);
                sum_by_date(&rows, &group)
                    .points
                    .into_iter()
                    .map(move |p| Observation::new(p.date, p.value, group.clone()))
            })
            .collect();
        Ok(observations)
    }
}
