//! UI and session state records.

use serde::{Deserialize, Serialize};

use super::{Filter, Scale};

/// The state carried in the URL fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub filter_cumulative: Filter,
    pub filter_daily: Filter,
    pub scale: Scale,
    /// Forecast horizon `h` in days
    pub forecast: usize,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            filter_cumulative: Filter::Italy,
            filter_daily: Filter::Italy,
            scale: Scale::Linear,
            forecast: 3,
        }
    }
}

/// Everything one session mutates.
///
/// Owned by a single controller; no other code writes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub ui: UiState,
    /// Training window `k`; `None` means the whole series
    pub training_window: Option<usize>,
}

impl SessionState {
    pub fn new(ui: UiState) -> Self {
        Self {
            ui,
            training_window: None,
        }
    }
}
