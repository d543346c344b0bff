//! Reactive recompute controller.
//!
//! Owns the session state. Every event handler writes the state first and
//! then recomputes from it, so a view always reflects a complete write.

use std::sync::Arc;

use dashboard_spi::{
    CompareView, CumulativeView, DailyView, Filter, Result, SessionState, UiState,
};
use regression_core::standard_fitters;
use regression_spi::CurveFitter;
use series_spi::SeriesSet;
use tracing::debug;

use crate::compare::compare_view;
use crate::daily::daily_view;
use crate::hash;
use crate::recompute::recompute;
use crate::select::{active_series, MIN_DEATHS};
use crate::window::TrainingWindow;

/// Single owner of the mutable [`SessionState`].
///
/// The series set is fetched once and shared read-only.
pub struct Controller {
    set: Arc<SeriesSet>,
    fitters: Vec<Box<dyn CurveFitter>>,
    state: SessionState,
    threshold: f64,
}

impl Controller {
    /// Controller with the standard fitters and the default threshold.
    pub fn new(set: impl Into<Arc<SeriesSet>>, ui: UiState) -> Self {
        Self {
            set: set.into(),
            fitters: standard_fitters(),
            state: SessionState::new(ui),
            threshold: MIN_DEATHS,
        }
    }

    pub fn with_fitters(mut self, fitters: Vec<Box<dyn CurveFitter>>) -> Self {
        self.fitters = fitters;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn series_set(&self) -> &SeriesSet {
        &self.set
    }

    /// Current UI state as a URL fragment.
    pub fn hash(&self) -> String {
        hash::encode(&self.state.ui)
    }

    /// Recompute the cumulative chart without changing state.
    pub fn refresh(&self) -> Result<CumulativeView> {
        recompute(&self.state, &self.set, &self.fitters, self.threshold)
    }

    /// Slider moved to `k`.
    pub fn on_slider(&mut self, k: usize) -> Result<CumulativeView> {
        let len = self.active_len(self.state.ui.filter_cumulative);
        self.state.training_window = Some(TrainingWindow::clamp(k, len).get());
        debug!(requested = k, window = ?self.state.training_window, "slider moved");
        self.refresh()
    }

    /// Cumulative filter changed; the window is re-clamped to the new series.
    pub fn on_filter_change(&mut self, filter: Filter) -> Result<CumulativeView> {
        self.state.ui.filter_cumulative = filter;
        self.reclamp();
        self.refresh()
    }

    /// URL fragment changed. Both charts are recomputed.
    ///
    /// An undecodable fragment leaves the state untouched.
    pub fn on_hash_change(&mut self, fragment: &str) -> Result<(CumulativeView, DailyView)> {
        let ui = hash::decode(fragment)?;
        let filter_changed = ui.filter_cumulative != self.state.ui.filter_cumulative;
        self.state.ui = ui;
        if filter_changed {
            self.reclamp();
        }
        Ok((self.refresh()?, self.daily()?))
    }

    pub fn daily(&self) -> Result<DailyView> {
        daily_view(&self.state.ui, &self.set, self.threshold)
    }

    pub fn compare(&self) -> CompareView {
        compare_view(&self.set, self.threshold)
    }

    fn active_len(&self, filter: Filter) -> usize {
        active_series(&self.set, filter, self.threshold).len()
    }

    fn reclamp(&mut self) {
        let len = self.active_len(self.state.ui.filter_cumulative);
        self.state.training_window = self
            .state
            .training_window
            .map(|k| TrainingWindow::clamp(k, len).get());
    }
}
