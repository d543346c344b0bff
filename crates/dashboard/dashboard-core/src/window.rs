//! Training window `k`.

use serde::{Deserialize, Serialize};

/// Number of leading points used for fitting; always within `[1, len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrainingWindow(usize);

impl TrainingWindow {
    /// Clamp `requested` into `[1, len]`.
    ///
    /// An empty series still yields a window of 1; callers reject empty
    /// series before fitting.
    pub fn clamp(requested: usize, len: usize) -> Self {
        Self(requested.clamp(1, len.max(1)))
    }

    /// The whole series.
    pub fn full(len: usize) -> Self {
        Self::clamp(len, len)
    }

    /// Resolve an optional slider position; `None` is the whole series.
    pub fn resolve(requested: Option<usize>, len: usize) -> Self {
        match requested {
            Some(k) => Self::clamp(k, len),
            None => Self::full(len),
        }
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_down_to_series_length() {
        assert_eq!(TrainingWindow::clamp(50, 10).get(), 10);
    }

    #[test]
    fn test_clamps_up_to_one() {
        assert_eq!(TrainingWindow::clamp(0, 10).get(), 1);
    }

    #[test]
    fn test_in_range_is_kept() {
        assert_eq!(TrainingWindow::clamp(7, 10).get(), 7);
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(TrainingWindow::clamp(5, 0).get(), 1);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(TrainingWindow::resolve(None, 12).get(), 12);
        assert_eq!(TrainingWindow::resolve(Some(4), 12).get(), 4);
        assert_eq!(TrainingWindow::resolve(Some(40), 12).get(), 12);
    }
}
