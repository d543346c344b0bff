//! Source error types.

use series_spi::SeriesError;
use thiserror::Error;

/// Upstream fetch and parse errors.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Upstream answered with a non-success status
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// Failed to parse a JSON payload
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to read the CSV feed
    #[error("CSV error: {0}")]
    Csv(String),

    /// Invalid date format
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// No data returned
    #[error("No data returned")]
    NoData,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

impl From<SeriesError> for SourceError {
    fn from(error: SeriesError) -> Self {
        match error {
            SeriesError::InvalidDate(raw) => SourceError::InvalidDate(raw),
            other => SourceError::ParseError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_error() {
        let error = SourceError::RequestFailed("Connection timeout".to_string());
        assert_eq!(error.to_string(), "Request failed: Connection timeout");
    }

    #[test]
    fn test_http_status_error() {
        let error = SourceError::HttpStatus {
            url: "https://example.org/feed.json".to_string(),
            status: 404,
        };
        assert_eq!(error.to_string(), "HTTP 404 from https://example.org/feed.json");
    }

    #[test]
    fn test_csv_error() {
        let error = SourceError::Csv("unequal lengths".to_string());
        assert_eq!(error.to_string(), "CSV error: unequal lengths");
    }

    #[test]
    fn test_no_data_error() {
        assert_eq!(SourceError::NoData.to_string(), "No data returned");
    }

    #[test]
    fn test_from_series_invalid_date() {
        let error: SourceError = SeriesError::InvalidDate("2020-13-45".to_string()).into();
        assert!(matches!(error, SourceError::InvalidDate(ref raw) if raw == "2020-13-45"));
    }

    #[test]
    fn test_from_other_series_error() {
        let error: SourceError = SeriesError::EmptySeries.into();
        assert_eq!(error.to_string(), "Parse error: Series is empty");
    }

    #[test]
    fn test_error_is_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(SourceError::RequestFailed("test".to_string()));
        assert_eq!(error.to_string(), "Request failed: test");
    }
}
