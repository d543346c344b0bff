//! Render model handed to the charting layer.
//!
//! Every array is index-aligned with the label sequence of its view; `None`
//! (and non-finite numbers) serialize as `null` and leave a gap in the line.

use serde::{Deserialize, Serialize};

use super::{Filter, Scale};

/// One line of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Stable key: `observed`, a fit key, or a series key
    pub key: String,
    pub label: String,
    pub data: Vec<Option<f64>>,
}

impl Dataset {
    pub fn new(key: &str, label: &str, data: Vec<Option<f64>>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            data,
        }
    }

    /// Observed values followed by `None` up to `len` entries.
    pub fn padded(key: &str, label: &str, values: &[f64], len: usize) -> Self {
        let mut data: Vec<Option<f64>> = values.iter().map(|&v| Some(v)).collect();
        if data.len() < len {
            data.resize(len, None);
        }
        Self::new(key, label, data)
    }

    /// Values that carry a number.
    pub fn non_null_count(&self) -> usize {
        self.data.iter().filter(|v| v.is_some()).count()
    }
}

/// Y-axis bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub scale: Scale,
    pub min: f64,
    /// `None` lets the chart pick the top
    pub max: Option<f64>,
    /// Values that get a tick label; empty means the chart's own ticks
    pub ticks: Vec<f64>,
}

/// Training-window slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub min: usize,
    pub max: usize,
    pub value: usize,
    /// Share of the x-axis covered by observed days, `len / (len + h)`
    pub width_fraction: f64,
    /// Pixels trimmed from the slider track to line up with the plot area
    pub offset_px: u32,
}

/// Vertical marker on the x-axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// 0-based label index
    pub index: usize,
    pub label: String,
}

/// Observed series plus the fitted curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativeView {
    pub filter: Filter,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    /// Training window `k` actually used
    pub boundary: usize,
    pub axis: AxisSpec,
    pub slider: SliderSpec,
    pub annotation: Option<Annotation>,
}

/// Day-over-day deltas of one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyView {
    pub filter: Filter,
    pub labels: Vec<String>,
    pub dataset: Dataset,
}

/// Threshold-aligned series of several countries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareView {
    /// `"1"..="n"`: days since the threshold was passed
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub axis: AxisSpec,
}
