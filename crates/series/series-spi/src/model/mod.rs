//! Data model for tagged time series.

mod group;
mod observation;
mod series;
mod series_set;
mod time_point;

pub use group::{Country, SeriesGroup};
pub use observation::Observation;
pub use series::Series;
pub use series_set::SeriesSet;
pub use time_point::TimePoint;
