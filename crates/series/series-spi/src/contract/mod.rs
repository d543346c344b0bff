//! Contracts implemented by series transforms.

mod series_step;

pub use series_step::SeriesStep;
