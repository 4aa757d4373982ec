//! Bar magnitudes relative to a column maximum

/// Percentage of `max_value` that `value` represents, bounded to [0, 100].
///
/// Returns 0 when `max_value` is zero, negative or NaN.
pub fn bar_percent(value: f64, max_value: f64) -> f64 {
    if max_value.is_nan() || max_value <= 0.0 {
        return 0.0;
    }

    let percent = value / max_value * 100.0;
    if percent.is_nan() {
        return 0.0;
    }

    percent.clamp(0.0, 100.0)
}

/// Two-segment bar: the value and its complement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub percent: f64,
    pub opposite: f64,
}

impl Bar {
    pub fn new(value: u64, max_value: u64) -> Self {
        let percent = bar_percent(value as f64, max_value as f64);
        Self {
            percent,
            opposite: 100.0 - percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_percent_scenario() {
        assert!((bar_percent(40.0, 70.0) - 57.142857).abs() < 1e-4);
        assert_eq!(bar_percent(70.0, 70.0), 100.0);
        assert_eq!(bar_percent(0.0, 70.0), 0.0);
    }

    #[test]
    fn test_zero_max_never_divides() {
        for value in [0.0, 1.0, -5.0, 1e300, f64::INFINITY, f64::NAN] {
            assert_eq!(bar_percent(value, 0.0), 0.0);
        }
    }

    #[test]
    fn test_clamped_to_bounds() {
        assert_eq!(bar_percent(150.0, 100.0), 100.0);
        assert_eq!(bar_percent(-20.0, 100.0), 0.0);
        assert_eq!(bar_percent(f64::INFINITY, 100.0), 100.0);
        assert_eq!(bar_percent(f64::NAN, 100.0), 0.0);
        assert_eq!(bar_percent(10.0, f64::NAN), 0.0);
        assert_eq!(bar_percent(10.0, -1.0), 0.0);
    }

    #[test]
    fn test_opposite_complements_to_hundred() {
        for (value, max) in [(40, 70), (1, 3), (2, 3), (7, 9), (0, 5), (5, 5), (123_456, 987_654)] {
            let bar = Bar::new(value, max);
            assert_eq!(bar.percent + bar.opposite, 100.0);
        }
    }

    #[test]
    fn test_bar_with_empty_column() {
        let bar = Bar::new(0, 0);
        assert_eq!(bar.percent, 0.0);
        assert_eq!(bar.opposite, 100.0);
    }
}
