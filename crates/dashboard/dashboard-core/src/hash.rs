//! URL-fragment encoding of the UI state.
//!
//! Query-string form with sorted keys:
//!
//! ```text
//! filterCumulative=italy&filterDaily=italy&forecast=3&scale=linear
//! ```
//!
//! Missing or empty keys take their defaults; values outside the known sets
//! are errors.

use dashboard_spi::{DashboardError, Result, UiState};
use serde::{Deserialize, Serialize};

/// Longest accepted forecast horizon, in days.
pub const MAX_FORECAST: usize = 365;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EncodedHash<'a> {
    filter_cumulative: &'a str,
    filter_daily: &'a str,
    forecast: usize,
    scale: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHash {
    #[serde(alias = "filter")]
    filter_cumulative: Option<String>,
    filter_daily: Option<String>,
    forecast: Option<String>,
    scale: Option<String>,
}

/// Encode without the leading `#`.
pub fn encode(state: &UiState) -> String {
    let encoded = EncodedHash {
        filter_cumulative: state.filter_cumulative.key(),
        filter_daily: state.filter_daily.key(),
        forecast: state.forecast,
        scale: state.scale.key(),
    };
    // Flat struct of strings and integers; the encoder cannot reject it.
    serde_urlencoded::to_string(&encoded).unwrap_or_default()
}

/// Decode a fragment; a leading `#` is ignored.
pub fn decode(fragment: &str) -> Result<UiState> {
    let query = fragment.strip_prefix('#').unwrap_or(fragment);
    let raw: RawHash = serde_urlencoded::from_str(query)
        .map_err(|e| DashboardError::InvalidHash(e.to_string()))?;

    let defaults = UiState::default();
    Ok(UiState {
        filter_cumulative: parse_or(raw.filter_cumulative, defaults.filter_cumulative)?,
        filter_daily: parse_or(raw.filter_daily, defaults.filter_daily)?,
        scale: parse_or(raw.scale, defaults.scale)?,
        forecast: parse_forecast(raw.forecast, defaults.forecast)?,
    })
}

fn parse_or<T>(value: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr<Err = DashboardError>,
{
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(raw) => raw.parse(),
    }
}

fn parse_forecast(value: Option<String>, default: usize) -> Result<usize> {
    let forecast = match value.as_deref().map(str::trim) {
        None | Some("") => return Ok(default),
        Some(raw) => raw.parse::<usize>().map_err(|_| {
            DashboardError::InvalidHash(format!("forecast is not a day count: {}", raw))
        })?,
    };
    if forecast > MAX_FORECAST {
        return Err(DashboardError::InvalidHash(format!(
            "forecast {} exceeds {} days",
            forecast, MAX_FORECAST
        )));
    }
    Ok(forecast)
}
