//! Aggregator: scalar summary statistics over a weekly series.
//!
//! Reduces a series (or the Normalizer's output) to the figures the
//! dashboard's KPI cards render: transaction-dominance summaries, field
//! averages, shock counts, and percent change against an explicit baseline.
//!
//! All operations here are total. Empty series and zero counts produce
//! documented defaults instead of failing.

use serde::Serialize;
use std::fmt;

use cashlens_core::num::{mean, percent_change};
use cashlens_core::types::{StabilityRow, VolatilityRow};

/// Which transaction direction dominates the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowDirection {
    /// Strictly more inflow than outflow transactions.
    Inflow,
    /// Strictly more outflow than inflow transactions.
    Outflow,
    /// Equal counts. Ties always resolve here, never to an arbitrary side.
    Balanced,
}

impl fmt::Display for FlowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowDirection::Inflow => "inflow",
            FlowDirection::Outflow => "outflow",
            FlowDirection::Balanced => "balanced",
        };
        write!(f, "{name}")
    }
}

/// Structural risk classification of the dominance ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StructuralRisk {
    /// Transaction mix is within the configured imbalance cutoff.
    Low,
    /// Transaction mix is concentrated past the cutoff.
    High,
}

impl fmt::Display for StructuralRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StructuralRisk::Low => "Low",
            StructuralRisk::High => "High",
        };
        write!(f, "{name}")
    }
}

/// Configuration for the dominance classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominanceConfig {
    /// Ratio above which the transaction mix is flagged [`StructuralRisk::High`].
    pub high_ratio_cutoff: f64,
}

impl DominanceConfig {
    /// Default cutoff: an imbalance beyond 3:1 is flagged High.
    pub const DEFAULT_HIGH_RATIO_CUTOFF: f64 = 3.0;
}

impl Default for DominanceConfig {
    fn default() -> Self {
        Self {
            high_ratio_cutoff: Self::DEFAULT_HIGH_RATIO_CUTOFF,
        }
    }
}

/// Transaction-dominance summary for the cash-structure view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DominanceSummary {
    /// Number of inflow transactions.
    pub inflow_count: u64,
    /// Number of outflow transactions.
    pub outflow_count: u64,
    /// Which direction strictly dominates; `Balanced` on an exact tie.
    pub direction: FlowDirection,
    /// Larger count over smaller count. When the smaller count is 0 the
    /// ratio is the larger count itself (a defined sentinel, never a
    /// division by zero).
    pub ratio: f64,
    /// Threshold classification of the ratio.
    pub risk: StructuralRisk,
}

/// Summarizes transaction dominance from the two direction counts.
///
/// - `ratio` is larger/smaller; a zero smaller count yields the larger
///   count itself as the sentinel ratio, so `(10, 0)` reports 10.
/// - `direction` is the strictly greater side, `Balanced` on a tie.
/// - `risk` is `High` when `ratio > config.high_ratio_cutoff`, else `Low`.
///
/// `(0, 0)` reports a `Balanced` direction with a ratio of 0.
#[must_use]
pub fn dominance_summary(
    inflow_count: u64,
    outflow_count: u64,
    config: &DominanceConfig,
) -> DominanceSummary {
    let larger = inflow_count.max(outflow_count) as f64;
    let smaller = inflow_count.min(outflow_count) as f64;

    let ratio = if smaller == 0.0 { larger } else { larger / smaller };

    let direction = if inflow_count > outflow_count {
        FlowDirection::Inflow
    } else if outflow_count > inflow_count {
        FlowDirection::Outflow
    } else {
        FlowDirection::Balanced
    };

    let risk = if ratio > config.high_ratio_cutoff {
        StructuralRisk::High
    } else {
        StructuralRisk::Low
    };

    DominanceSummary {
        inflow_count,
        outflow_count,
        direction,
        ratio,
        risk,
    }
}

/// Arithmetic mean of a named numeric field over any row type.
///
/// The average of an empty series is 0, not an error.
#[must_use]
pub fn average_by<T>(rows: &[T], field: impl Fn(&T) -> f64) -> f64 {
    let values: Vec<f64> = rows.iter().map(field).collect();
    mean(&values)
}

/// Mean stability index over the stability series; 0 for an empty series.
#[must_use]
pub fn average_stability(rows: &[StabilityRow]) -> f64 {
    average_by(rows, |r| r.stability_index)
}

/// Number of weeks flagged as volatility shocks.
#[must_use]
pub fn count_shocks(rows: &[VolatilityRow]) -> usize {
    rows.iter().filter(|r| r.is_shock()).count()
}

/// Percent change of the cash position against an explicit baseline.
///
/// The baseline is a parameter by design: the comparison value comes from
/// the caller's records, not from a multiplier applied to the current
/// value. Returns `None` when the baseline is 0 so the view can suppress
/// the delta instead of rendering an undefined figure. Display rounding is
/// one decimal place, applied by the caller via
/// [`round_to`](cashlens_core::num::round_to).
#[must_use]
pub fn cash_change_pct(current: f64, previous: f64) -> Option<f64> {
    percent_change(current, previous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cashlens_core::num::round_to;
    use cashlens_core::types::RiskBand;

    #[test]
    fn test_dominance_ratio_simple() {
        let s = dominance_summary(120, 40, &DominanceConfig::default());
        assert_relative_eq!(s.ratio, 3.0);
        assert_eq!(s.direction, FlowDirection::Inflow);
        assert_eq!(s.risk, StructuralRisk::Low);
    }

    #[test]
    fn test_dominance_sentinel_on_zero_count() {
        let s = dominance_summary(10, 0, &DominanceConfig::default());
        assert_relative_eq!(s.ratio, 10.0);
        assert!(s.ratio.is_finite());
        assert_eq!(s.risk, StructuralRisk::High);
    }

    #[test]
    fn test_dominance_tie_is_balanced() {
        let s = dominance_summary(7, 7, &DominanceConfig::default());
        assert_eq!(s.direction, FlowDirection::Balanced);
        assert_relative_eq!(s.ratio, 1.0);
    }

    #[test]
    fn test_dominance_both_zero() {
        let s = dominance_summary(0, 0, &DominanceConfig::default());
        assert_eq!(s.direction, FlowDirection::Balanced);
        assert_eq!(s.ratio, 0.0);
        assert_eq!(s.risk, StructuralRisk::Low);
    }

    #[test]
    fn test_dominance_custom_cutoff() {
        let config = DominanceConfig {
            high_ratio_cutoff: 1.5,
        };
        let s = dominance_summary(40, 20, &config);
        assert_eq!(s.risk, StructuralRisk::High);
    }

    #[test]
    fn test_average_by_empty_is_zero() {
        let rows: Vec<StabilityRow> = Vec::new();
        assert_eq!(average_stability(&rows), 0.0);
    }

    #[test]
    fn test_average_stability() {
        let rows = vec![
            StabilityRow::new("w1", 0.9, RiskBand::Low),
            StabilityRow::new("w2", 0.5, RiskBand::Medium),
            StabilityRow::new("w3", 0.1, RiskBand::High),
        ];
        assert_relative_eq!(average_stability(&rows), 0.5);
    }

    #[test]
    fn test_count_shocks() {
        let rows = vec![
            VolatilityRow::new("w1", -10.0, 4.0, 1),
            VolatilityRow::new("w2", 5.0, 1.0, 0),
            VolatilityRow::new("w3", -20.0, 5.0, 1),
        ];
        assert_eq!(count_shocks(&rows), 2);
    }

    #[test]
    fn test_cash_change_against_baseline() {
        let change = cash_change_pct(1000.0, 980.0).unwrap();
        assert_relative_eq!(change, 2.0408, epsilon = 1e-3);
        assert_eq!(round_to(change, 1), 2.0);
    }

    #[test]
    fn test_cash_change_zero_baseline() {
        assert_eq!(cash_change_pct(1000.0, 0.0), None);
    }
}
