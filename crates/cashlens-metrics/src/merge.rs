//! Merger: combining independently-produced series into one row set.
//!
//! Two join modes:
//!
//! - [`merge_by_position`]: the documented default. A positional join
//!   driven by the primary series; the caller guarantees the series share a
//!   time axis and supplies the default for positions the secondary does
//!   not cover.
//! - [`merge_by_week`]: the strict variant. Requires equal lengths and
//!   pairwise-equal `week_start` labels and fails loudly on the first
//!   drift, for callers that cannot guarantee alignment upstream.

use serde::Serialize;

use cashlens_core::types::{StressRow, VolatilityRow};

use crate::error::{MetricsError, MetricsResult};

/// Combines two series by positional index.
///
/// The output has exactly the primary's length and order. For each index
/// `i`, `combine` receives the primary row and `Some(&secondary[i])` when
/// the secondary covers that position, `None` past its end; the combiner
/// supplies the defaults for the uncovered tail. Neither input is mutated.
///
/// This is an explicit positional join, not a join on the time label: the
/// caller is responsible for the two series sharing a time axis.
#[must_use]
pub fn merge_by_position<P, S, R>(
    primary: &[P],
    secondary: &[S],
    mut combine: impl FnMut(&P, Option<&S>) -> R,
) -> Vec<R> {
    if secondary.len() < primary.len() {
        log::debug!(
            "positional merge: secondary covers {} of {} rows, defaults fill the tail",
            secondary.len(),
            primary.len()
        );
    }
    primary
        .iter()
        .enumerate()
        .map(|(i, row)| combine(row, secondary.get(i)))
        .collect()
}

/// Label-keyed strict merge.
///
/// Like [`merge_by_position`], but refuses misaligned inputs: the series
/// must have equal lengths and identical `week_start` labels at every
/// position. The first drift produces
/// [`MetricsError::MisalignedSeries`] naming the offending index, instead
/// of silently joining values from different weeks.
pub fn merge_by_week<P, S, R>(
    primary: &[P],
    secondary: &[S],
    primary_week: impl Fn(&P) -> &str,
    secondary_week: impl Fn(&S) -> &str,
    mut combine: impl FnMut(&P, &S) -> R,
) -> MetricsResult<Vec<R>> {
    if primary.len() != secondary.len() {
        let index = primary.len().min(secondary.len());
        return Err(MetricsError::MisalignedSeries {
            index,
            primary: primary.get(index).map(|p| primary_week(p).to_string()),
            secondary: secondary.get(index).map(|s| secondary_week(s).to_string()),
        });
    }

    primary
        .iter()
        .zip(secondary.iter())
        .enumerate()
        .map(|(index, (p, s))| {
            if primary_week(p) != secondary_week(s) {
                return Err(MetricsError::MisalignedSeries {
                    index,
                    primary: Some(primary_week(p).to_string()),
                    secondary: Some(secondary_week(s).to_string()),
                });
            }
            Ok(combine(p, s))
        })
        .collect()
}

/// A stress row joined with the volatility measures of the same week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressComposite {
    /// Opaque time-bucket label, taken from the primary (stress) series.
    pub week_start: String,
    /// Signed net cash flow for the week.
    pub net_cash_flow: f64,
    /// Liquidity stress score for the week.
    pub stress_score: f64,
    /// Rolling volatility joined in positionally; 0 when uncovered.
    pub volatility: f64,
    /// Shock flag joined in positionally; 0 when uncovered.
    pub shock: u8,
}

/// Builds the composite stress view the risk page renders.
///
/// The stress series is primary and drives the row count and labels; the
/// volatility series contributes `volatility` and `shock` positionally,
/// with 0 defaults where it is shorter or absent.
#[must_use]
pub fn stress_composite(
    stress: &[StressRow],
    volatility: &[VolatilityRow],
) -> Vec<StressComposite> {
    merge_by_position(stress, volatility, |s, v| StressComposite {
        week_start: s.week_start.clone(),
        net_cash_flow: s.net_cash_flow,
        stress_score: s.stress_score,
        volatility: v.map_or(0.0, |v| v.volatility),
        shock: v.map_or(0, |v| v.shock),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stress(n: usize) -> Vec<StressRow> {
        (0..n)
            .map(|i| StressRow::new(format!("w{i}"), -(i as f64), i as f64 * 0.1))
            .collect()
    }

    fn volatility(n: usize) -> Vec<VolatilityRow> {
        (0..n)
            .map(|i| VolatilityRow::new(format!("w{i}"), -(i as f64), i as f64 + 1.0, (i % 2) as u8))
            .collect()
    }

    #[test]
    fn test_positional_merge_primary_drives_length() {
        let merged = stress_composite(&stress(5), &volatility(3));

        assert_eq!(merged.len(), 5);
        // Covered positions take the secondary's values...
        assert_eq!(merged[2].volatility, 3.0);
        // ...and the uncovered tail takes defaults.
        assert_eq!(merged[3].volatility, 0.0);
        assert_eq!(merged[4].shock, 0);
    }

    #[test]
    fn test_positional_merge_absent_secondary() {
        let merged = stress_composite(&stress(2), &[]);
        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(|r| r.volatility == 0.0 && r.shock == 0));
    }

    #[test]
    fn test_positional_merge_preserves_primary_labels() {
        let merged = stress_composite(&stress(3), &volatility(3));
        assert_eq!(merged[0].week_start, "w0");
        assert_eq!(merged[2].week_start, "w2");
    }

    #[test]
    fn test_strict_merge_accepts_aligned_series() {
        let merged = merge_by_week(
            &stress(3),
            &volatility(3),
            |s| s.week_start.as_str(),
            |v| v.week_start.as_str(),
            |s, v| (s.stress_score, v.volatility),
        )
        .unwrap();
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[1], (0.1, 2.0));
    }

    #[test]
    fn test_strict_merge_rejects_length_mismatch() {
        let err = merge_by_week(
            &stress(5),
            &volatility(3),
            |s| s.week_start.as_str(),
            |v| v.week_start.as_str(),
            |_, _| (),
        )
        .unwrap_err();
        assert_eq!(
            err,
            MetricsError::MisalignedSeries {
                index: 3,
                primary: Some("w3".to_string()),
                secondary: None,
            }
        );
    }

    #[test]
    fn test_strict_merge_rejects_label_drift() {
        let mut vols = volatility(3);
        vols[1].week_start = "w9".to_string();

        let err = merge_by_week(
            &stress(3),
            &vols,
            |s| s.week_start.as_str(),
            |v| v.week_start.as_str(),
            |_, _| (),
        )
        .unwrap_err();
        match err {
            MetricsError::MisalignedSeries { index, .. } => assert_eq!(index, 1),
        }
    }
}
