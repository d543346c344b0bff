//! Y-axis bounds.

use dashboard_spi::{AxisSpec, Scale};

pub const LOG_AXIS_MIN: f64 = 10.0;
pub const LOG_AXIS_MAX: f64 = 100_000.0;

/// Top of the linear axis for a curve ending at `peak`.
///
/// `peak · 1.5` is rounded to thousands (below 10 000) or ten-thousands,
/// then snapped down to a multiple of 20, 50 or 500. Returns `None` when that
/// leaves no positive bound, so the chart scales itself.
pub fn linear_axis_max(peak: f64) -> Option<f64> {
    let headroom = peak * 1.5;
    if !headroom.is_finite() {
        return None;
    }

    let rounded = if headroom < 10_000.0 {
        (headroom / 1_000.0).round() * 1_000.0
    } else {
        (headroom / 10_000.0).round() * 10_000.0
    };

    let step = if rounded < 200.0 {
        20.0
    } else if rounded < 1_000.0 {
        50.0
    } else {
        500.0
    };
    let max = (rounded / step).floor() * step;

    (max > 0.0).then_some(max)
}

/// Tick values of the log axis: the powers of ten in range.
pub fn log_ticks() -> Vec<f64> {
    let mut ticks = Vec::new();
    let mut tick = LOG_AXIS_MIN;
    while tick <= LOG_AXIS_MAX {
        ticks.push(tick);
        tick *= 10.0;
    }
    ticks
}

/// Axis for `scale`; `peak` only matters on the linear scale.
pub fn axis_spec(scale: Scale, peak: f64) -> AxisSpec {
    match scale {
        Scale::Linear => AxisSpec {
            scale,
            min: 0.0,
            max: linear_axis_max(peak),
            ticks: Vec::new(),
        },
        Scale::Logarithmic => AxisSpec {
            scale,
            min: LOG_AXIS_MIN,
            max: Some(LOG_AXIS_MAX),
            ticks: log_ticks(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_thousands() {
        // 2400 * 1.5 = 3600 -> 4000
        assert_eq!(linear_axis_max(2_400.0), Some(4_000.0));
    }

    #[test]
    fn test_rounds_to_ten_thousands() {
        // 10000 * 1.5 = 15000 -> 20000
        assert_eq!(linear_axis_max(10_000.0), Some(20_000.0));
        // 30000 * 1.5 = 45000 -> 50000
        assert_eq!(linear_axis_max(30_000.0), Some(50_000.0));
    }

    #[test]
    fn test_small_peak_has_no_bound() {
        // 200 * 1.5 = 300 -> 0
        assert_eq!(linear_axis_max(200.0), None);
    }

    #[test]
    fn test_non_finite_peak() {
        assert_eq!(linear_axis_max(f64::NAN), None);
        assert_eq!(linear_axis_max(f64::INFINITY), None);
    }

    #[test]
    fn test_log_axis() {
        let axis = axis_spec(Scale::Logarithmic, 123.0);
        assert_eq!(axis.min, 10.0);
        assert_eq!(axis.max, Some(100_000.0));
        assert_eq!(axis.ticks, vec![10.0, 100.0, 1_000.0, 10_000.0, 100_000.0]);
    }

    #[test]
    fn test_linear_axis_starts_at_zero() {
        let axis = axis_spec(Scale::Linear, 5_000.0);
        assert_eq!(axis.min, 0.0);
        // 7500 rounds half away from zero
        assert_eq!(axis.max, Some(8_000.0));
    }
}
