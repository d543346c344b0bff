//! Options, state records and the render model.

mod filter;
mod scale;
mod state;
mod view;

pub use filter::Filter;
pub use scale::Scale;
pub use state::{SessionState, UiState};
pub use view::{Annotation, AxisSpec, CompareView, CumulativeView, DailyView, Dataset, SliderSpec};
