//! Normalizer: percentage-of-total shares and running totals.
//!
//! Two normalization modes over a weekly series:
//!
//! - [`normalize_flow_mix`] extends each inflow/outflow row with each
//!   component's share of the row total, in percent
//! - [`accumulate_flows`] produces the running total of a signed flow
//!   series together with the positive/negative volume buckets the
//!   Aggregator uses for volume-balance summaries

use serde::Serialize;

use cashlens_core::num::pct_of;
use cashlens_core::types::{WeeklyMixRow, WeeklyRecord};

/// A weekly mix row extended with percentage shares of the row total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedMixRow {
    /// Opaque time-bucket label, carried through from the input row.
    pub week_start: String,
    /// Inflow volume for the week.
    pub inflow: f64,
    /// Outflow volume for the week.
    pub outflow: f64,
    /// Inflow share of the row total, in percent.
    pub inflow_pct: f64,
    /// Outflow share of the row total, in percent.
    pub outflow_pct: f64,
}

/// Extends each mix row with its components' percentage shares.
///
/// Output has the same length and order as the input. For every row with a
/// positive total, `inflow_pct + outflow_pct == 100` (within floating-point
/// tolerance). A row whose total is 0 has both shares equal to 0: the
/// denominator is deliberately treated as 1 so the division stays defined
/// (see [`pct_of`]).
#[must_use]
pub fn normalize_flow_mix(rows: &[WeeklyMixRow]) -> Vec<NormalizedMixRow> {
    rows.iter()
        .map(|row| {
            let total = row.total();
            NormalizedMixRow {
                week_start: row.week_start.clone(),
                inflow: row.inflow,
                outflow: row.outflow,
                inflow_pct: pct_of(row.inflow, total),
                outflow_pct: pct_of(row.outflow, total),
            }
        })
        .collect()
}

/// A weekly actuals row extended with the running total of net flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CumulativeFlowRow {
    /// Opaque time-bucket label, carried through from the input row.
    pub week_start: String,
    /// Signed net cash flow for the week.
    pub net_cash_flow: f64,
    /// Sum of net flows from the first row through this one.
    pub cumulative: f64,
}

/// Running-total output of [`accumulate_flows`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FlowAccumulation {
    /// Input rows extended with the running total, same length and order.
    pub rows: Vec<CumulativeFlowRow>,
    /// Sum of strictly positive net flows.
    pub inflow_total: f64,
    /// Sum of magnitudes of strictly negative net flows.
    pub outflow_total: f64,
}

/// Computes the running total of a signed weekly flow series.
///
/// `cumulative[0] == flow[0]` and `cumulative[i] == cumulative[i-1] +
/// flow[i]` for `i > 0`. Alongside the rows, strictly positive flows
/// accumulate into `inflow_total` and the magnitudes of strictly negative
/// flows into `outflow_total`; zero-valued weeks contribute to neither
/// bucket. An empty input yields an empty accumulation with zero totals.
#[must_use]
pub fn accumulate_flows(rows: &[WeeklyRecord]) -> FlowAccumulation {
    let mut acc = FlowAccumulation {
        rows: Vec::with_capacity(rows.len()),
        ..FlowAccumulation::default()
    };
    let mut running = 0.0;

    for row in rows {
        running += row.net_cash_flow;
        if row.net_cash_flow > 0.0 {
            acc.inflow_total += row.net_cash_flow;
        } else if row.net_cash_flow < 0.0 {
            acc.outflow_total += -row.net_cash_flow;
        }
        acc.rows.push(CumulativeFlowRow {
            week_start: row.week_start.clone(),
            net_cash_flow: row.net_cash_flow,
            cumulative: running,
        });
    }

    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shares_sum_to_hundred() {
        let rows = vec![
            WeeklyMixRow::new("w1", 30.0, 90.0),
            WeeklyMixRow::new("w2", 7.0, 3.0),
        ];
        let normalized = normalize_flow_mix(&rows);

        assert_eq!(normalized.len(), 2);
        assert_relative_eq!(normalized[0].inflow_pct, 25.0);
        assert_relative_eq!(normalized[0].outflow_pct, 75.0);
        for row in &normalized {
            assert_relative_eq!(row.inflow_pct + row.outflow_pct, 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_total_row_yields_zero_shares() {
        let rows = vec![WeeklyMixRow::new("w1", 0.0, 0.0)];
        let normalized = normalize_flow_mix(&rows);

        assert_eq!(normalized[0].inflow_pct, 0.0);
        assert_eq!(normalized[0].outflow_pct, 0.0);
        assert!(normalized[0].inflow_pct.is_finite());
    }

    #[test]
    fn test_order_and_labels_preserved() {
        let rows = vec![
            WeeklyMixRow::new("w2", 1.0, 1.0),
            WeeklyMixRow::new("w1", 2.0, 2.0),
        ];
        let normalized = normalize_flow_mix(&rows);
        // Rows pass through positionally; labels are never sorted or matched.
        assert_eq!(normalized[0].week_start, "w2");
        assert_eq!(normalized[1].week_start, "w1");
    }

    #[test]
    fn test_running_total_recurrence() {
        let rows = vec![
            WeeklyRecord::new("w1", 100.0, 1100.0),
            WeeklyRecord::new("w2", -50.0, 1050.0),
            WeeklyRecord::new("w3", 0.0, 1050.0),
        ];
        let acc = accumulate_flows(&rows);

        assert_eq!(acc.rows[0].cumulative, 100.0);
        assert_eq!(acc.rows[1].cumulative, 50.0);
        assert_eq!(acc.rows[2].cumulative, 50.0);
    }

    #[test]
    fn test_volume_buckets_skip_zero_weeks() {
        let rows = vec![
            WeeklyRecord::new("w1", 100.0, 0.0),
            WeeklyRecord::new("w2", -50.0, 0.0),
            WeeklyRecord::new("w3", 0.0, 0.0),
            WeeklyRecord::new("w4", 25.0, 0.0),
        ];
        let acc = accumulate_flows(&rows);

        assert_relative_eq!(acc.inflow_total, 125.0);
        assert_relative_eq!(acc.outflow_total, 50.0);
    }

    #[test]
    fn test_empty_series() {
        let acc = accumulate_flows(&[]);
        assert!(acc.rows.is_empty());
        assert_eq!(acc.inflow_total, 0.0);
        assert_eq!(acc.outflow_total, 0.0);
    }
}
