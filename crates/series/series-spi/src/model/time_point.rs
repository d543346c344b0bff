//! Single daily observation.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeriesError};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

// `m/d/yy` precedes `%Y/%m/%d`, which would otherwise read `3/9/20` as year 3.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y", "%Y/%m/%d"];

/// A cumulative count observed on one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Calendar day of the observation
    pub date: NaiveDate,
    /// Cumulative count (e.g. total deaths to date)
    pub value: f64,
}

impl TimePoint {
    /// Create a new TimePoint.
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Parse a feed date into a calendar day.
    ///
    /// Upstream feeds disagree on formats: ISO timestamps with or without a
    /// `T`, RFC 3339 with a zone, slash-separated timestamps and the
    /// `m/d/yy` column headers of the CSV feed are all accepted. The time of
    /// day is discarded.
    pub fn parse_date(raw: &str) -> Result<NaiveDate> {
        let raw = raw.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.date_naive());
        }

        for format in DATE_TIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
                return Ok(dt.date());
            }
        }

        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
                return Ok(date);
            }
        }

        Err(SeriesError::InvalidDate(raw.to_string()))
    }
}
