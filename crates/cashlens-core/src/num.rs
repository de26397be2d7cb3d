//! Shared numeric-safety helpers.
//!
//! Every transform in the metrics layer is required to be total: no `NaN`,
//! no infinities, no division-by-zero panics, defined outputs for empty
//! input. These helpers are the single place those policies live so that
//! each transform states its contract once and reuses the same arithmetic.

/// Percentage of `part` within `total`.
///
/// A zero (or negative-rounded-to-zero) total is treated as a denominator of
/// 1, so the share of an all-zero row evaluates to 0 rather than `NaN`.
///
/// # Example
///
/// ```rust
/// use cashlens_core::num::pct_of;
///
/// assert_eq!(pct_of(30.0, 120.0), 25.0);
/// assert_eq!(pct_of(0.0, 0.0), 0.0);
/// ```
#[must_use]
pub fn pct_of(part: f64, total: f64) -> f64 {
    let denom = if total == 0.0 { 1.0 } else { total };
    (part / denom) * 100.0
}

/// Arithmetic mean of a slice. The mean of an empty slice is 0.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Relative change from `previous` to `current`, in percent.
///
/// Returns `None` when `previous` is 0: a percent change against a zero
/// baseline is undefined and the caller decides how to render that, the
/// same way the dashboard suppresses the delta badge.
#[must_use]
pub fn percent_change(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}

/// Rounds `value` to `decimals` decimal places (half away from zero).
///
/// Display values on the dashboard carry one decimal place; that policy is
/// `round_to(x, 1)`.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Collapses `NaN` and infinities to 0, passing finite values through.
///
/// Upstream pipelines can emit null-ish or non-finite measures for the
/// first weeks of a rolling window; those read as 0 here.
#[must_use]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pct_of_splits_total() {
        assert_relative_eq!(pct_of(30.0, 120.0), 25.0);
        assert_relative_eq!(pct_of(90.0, 120.0), 75.0);
    }

    #[test]
    fn test_pct_of_zero_total() {
        let share = pct_of(0.0, 0.0);
        assert_eq!(share, 0.0);
        assert!(share.is_finite());
    }

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_simple() {
        assert_relative_eq!(mean(&[5.0, 10.0, 15.0]), 10.0);
    }

    #[test]
    fn test_percent_change() {
        let change = percent_change(1000.0, 980.0).unwrap();
        assert_relative_eq!(change, 2.0408, epsilon = 1e-3);
        assert_eq!(round_to(change, 1), 2.0);
    }

    #[test]
    fn test_percent_change_zero_baseline() {
        assert_eq!(percent_change(100.0, 0.0), None);
    }

    #[test]
    fn test_percent_change_sign() {
        let change = percent_change(980.0, 1000.0).unwrap();
        assert_relative_eq!(change, -2.0);
    }

    #[test]
    fn test_round_to_one_decimal() {
        assert_eq!(round_to(2.0408, 1), 2.0);
        assert_eq!(round_to(-2.0408, 1), -2.0);
        assert_eq!(round_to(2.45, 1), 2.5);
    }

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(-3.25), -3.25);
    }
}
