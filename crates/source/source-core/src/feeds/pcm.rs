//! Italian civil protection (PCM-DPC) JSON feeds.
//!
//! Both feeds are arrays of daily records; only the date, the cumulative
//! death count and, for the regional feed, the region name are read.

use serde::Deserialize;
use series_spi::{Observation, SeriesGroup, TimePoint};
use source_spi::{Feed, Result, SourceError};

#[derive(Debug, Deserialize)]
struct NationalRecord {
    data: String,
    deceduti: f64,
}

#[derive(Debug, Deserialize)]
struct RegionalRecord {
    data: String,
    deceduti: f64,
    denominazione_regione: String,
}

/// National aggregate feed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NationalFeed;

impl Feed for NationalFeed {
    fn name(&self) -> &str {
        "pcm-dpc-national"
    }

    fn parse(&self, body: &str) -> Result<Vec<Observation>> {
        let records: Vec<NationalRecord> =
            serde_json::from_str(body).map_err(|e| SourceError::ParseError(e.to_string()))?;

        let mut observations = Vec::with_capacity(records.len());
        for record in records {
            let date = TimePoint::parse_date(&record.data)?;
            observations.push(Observation::new(date, record.deceduti, SeriesGroup::National));
        }
        Ok(observations)
    }
}

/// Per-region feed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionalFeed;

impl Feed for RegionalFeed {
    fn name(&self) -> &str {
        "pcm-dpc-regional"
    }

    fn parse(&self, body: &str) -> Result<Vec<Observation>> {
        let records: Vec<RegionalRecord> =
            serde_json::from_str(body).map_err(|e| SourceError::ParseError(e.to_string()))?;

        let mut observations = Vec::with_capacity(records.len());
        for record in records {
            let date = TimePoint::parse_date(&record.data)?;
            observations.push(Observation::new(
                date,
                record.deceduti,
                SeriesGroup::Region(record.denominazione_regione),
            ));
        }
        Ok(observations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const NATIONAL: &str = r#"[
        {"data": "2020-02-24T18:00:00", "stato": "ITA", "deceduti": 7, "totale_casi": 229},
        {"data": "2020-02-25T18:00:00", "stato": "ITA", "deceduti": 10, "totale_casi": 322}
    ]"#;

    const REGIONAL: &str = r#"[
        {"data": "2020-02-24 18:00:00", "codice_regione": 3, "denominazione_regione": "Lombardia", "deceduti": 6},
        {"data": "2020-02-24 18:00:00", "codice_regione": 5, "denominazione_regione": "Veneto", "deceduti": 1}
    ]"#;

    #[test]
    fn test_national_parse() {
        let rows = NationalFeed.parse(NATIONAL).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2020, 2, 24).unwrap());
        assert_eq!(rows[0].value, 7.0);
        assert_eq!(rows[1].group, SeriesGroup::National);
    }

    #[test]
    fn test_regional_parse() {
        let rows = RegionalFeed.parse(REGIONAL).unwrap();
        assert_eq!(rows[0].group, SeriesGroup::region("Lombardia"));
        assert_eq!(rows[1].group, SeriesGroup::region("Veneto"));
        assert_eq!(rows[1].value, 1.0);
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let result = NationalFeed.parse(r#"[{"data": "2020-02-24T18:00:00"}]"#);
        assert!(matches!(result, Err(SourceError::ParseError(_))));
    }

    #[test]
    fn test_bad_date_is_invalid_date() {
        let result = NationalFeed.parse(r#"[{"data": "ieri", "deceduti": 1}]"#);
        assert!(matches!(result, Err(SourceError::InvalidDate(_))));
    }

    #[test]
    fn test_empty_array() {
        assert!(RegionalFeed.parse("[]").unwrap().is_empty());
    }
}
