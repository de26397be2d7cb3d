//! Weekly actuals and flow-composition rows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the weekly actuals series.
///
/// Produced upstream by the forecast pipeline: `net_cash_flow` is the signed
/// weekly flow and `cash_position` the end-of-week balance. `week_start` is
/// an opaque time-bucket label.
///
/// # Example
///
/// ```rust
/// use cashlens_core::types::WeeklyRecord;
///
/// let row = WeeklyRecord::new("2025-01-06", 100.0, 1100.0);
/// assert_eq!(row.net_cash_flow, 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyRecord {
    /// Opaque time-bucket label (e.g. an ISO week-start date).
    #[serde(default)]
    pub week_start: String,
    /// Signed net cash flow for the week.
    #[serde(default)]
    pub net_cash_flow: f64,
    /// End-of-week cash position.
    #[serde(default)]
    pub cash_position: f64,
}

impl WeeklyRecord {
    /// Creates a new weekly actuals row.
    #[must_use]
    pub fn new(week_start: impl Into<String>, net_cash_flow: f64, cash_position: f64) -> Self {
        Self {
            week_start: week_start.into(),
            net_cash_flow,
            cash_position,
        }
    }
}

impl fmt::Display for WeeklyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: net {} (position {})",
            self.week_start, self.net_cash_flow, self.cash_position
        )
    }
}

/// One row of the driver-concentration weekly mix.
///
/// `inflow` and `outflow` are non-negative component volumes; the Normalizer
/// turns them into percentage shares of the row total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyMixRow {
    /// Opaque time-bucket label.
    #[serde(default)]
    pub week_start: String,
    /// Inflow volume for the week (non-negative).
    #[serde(default)]
    pub inflow: f64,
    /// Outflow volume for the week (non-negative).
    #[serde(default)]
    pub outflow: f64,
}

impl WeeklyMixRow {
    /// Creates a new weekly mix row.
    #[must_use]
    pub fn new(week_start: impl Into<String>, inflow: f64, outflow: f64) -> Self {
        Self {
            week_start: week_start.into(),
            inflow,
            outflow,
        }
    }

    /// Combined inflow and outflow volume for the week.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.inflow + self.outflow
    }
}
