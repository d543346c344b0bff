//! X-axis date labels.

use chrono::{Days, NaiveDate};

/// `n` consecutive day labels from `start`, like `"21 Feb"`.
///
/// Labels past the last observed day continue the calendar, so the forecast
/// horizon gets dates too.
pub fn date_labels(start: NaiveDate, n: usize) -> Vec<String> {
    (0..n as u64)
        .map_while(|offset| start.checked_add_days(Days::new(offset)))
        .map(|date| date.format("%-d %b").to_string())
        .collect()
}
