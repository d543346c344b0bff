//! Composable series pipelines
//!
//! Each step wraps one pure transform from [`crate::transform`]; a
//! [`SeriesPipeline`] applies its steps in insertion order.

use series_spi::{Series, SeriesStep};

use crate::transform::{daily_delta, dedup_by_date, filter_by_min_value, sort_by_date};

/// Sort step - stable ascending sort by date
pub struct SortStep;

impl SeriesStep for SortStep {
    fn apply(&self, series: Series) -> Series {
        sort_by_date(series)
    }

    fn name(&self) -> &str {
        "sort"
    }
}

/// Dedup step - keeps the last row of a repeated date
pub struct DedupStep;

impl SeriesStep for DedupStep {
    fn apply(&self, series: Series) -> Series {
        dedup_by_date(series)
    }

    fn name(&self) -> &str {
        "dedup"
    }
}

/// Threshold step - drops points at or below a minimum value
pub struct MinValueStep {
    threshold: f64,
}

impl MinValueStep {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl SeriesStep for MinValueStep {
    fn apply(&self, series: Series) -> Series {
        filter_by_min_value(&series, self.threshold)
    }

    fn name(&self) -> &str {
        "min_value"
    }
}

/// Delta step - cumulative counts to day-over-day counts
pub struct DailyDeltaStep;

impl SeriesStep for DailyDeltaStep {
    fn apply(&self, series: Series) -> Series {
        daily_delta(&series)
    }

    fn name(&self) -> &str {
        "daily_delta"
    }
}

/// Composable series pipeline
pub struct SeriesPipeline {
    steps: Vec<Box<dyn SeriesStep>>,
}

impl SeriesPipeline {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Sort then deduplicate; the normalization every raw series goes through.
    pub fn normalize() -> Self {
        Self::new().with_step(Box::new(SortStep)).with_step(Box::new(DedupStep))
    }

    /// Add a step to the pipeline
    pub fn add_step(&mut self, step: Box<dyn SeriesStep>) {
        self.steps.push(step);
    }

    /// Builder-style [`SeriesPipeline::add_step`]
    pub fn with_step(mut self, step: Box<dyn SeriesStep>) -> Self {
        self.add_step(step);
        self
    }

    /// Run every step in order
    pub fn run(&self, series: Series) -> Series {
        self.steps.iter().fold(series, |acc, step| step.apply(acc))
    }

    /// Names of the steps, in order
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Get the number of steps in the pipeline
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the pipeline is empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for SeriesPipeline {
    fn default() -> Self {
        Self::new()
    }
}
