//! Raw feed rows and the merged response shape.

mod feed_observations;
mod merged_response;

pub use feed_observations::FeedObservations;
pub use merged_response::{GlobalRow, MergedResponse, NationalRow, RegionalRow};
