//! Risk indicator rows and the three-band risk classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative risk band attached to a stability row.
///
/// The bands are mutually exclusive and total: every classified row carries
/// exactly one. Where a single band must be chosen out of several with equal
/// counts, the fixed priority order is High > Medium > Low (see
/// [`priority`](RiskBand::priority)), so tie-breaking is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    /// Stable cash behaviour.
    Low,
    /// Elevated volatility or stress.
    Medium,
    /// Sustained volatility or stress.
    High,
}

impl RiskBand {
    /// All bands in ascending severity order.
    pub const ALL: [RiskBand; 3] = [RiskBand::Low, RiskBand::Medium, RiskBand::High];

    /// Tie-break priority: higher severity wins a tie.
    #[must_use]
    pub fn priority(self) -> u8 {
        match self {
            RiskBand::Low => 0,
            RiskBand::Medium => 1,
            RiskBand::High => 2,
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskBand::Low => "low",
            RiskBand::Medium => "medium",
            RiskBand::High => "high",
        };
        write!(f, "{name}")
    }
}

/// One row of the volatility-risk series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityRow {
    /// Opaque time-bucket label.
    #[serde(default)]
    pub week_start: String,
    /// Signed net cash flow for the week.
    #[serde(default)]
    pub net_cash_flow: f64,
    /// Rolling volatility of the net flow.
    #[serde(default)]
    pub volatility: f64,
    /// Shock flag: 1 when the week breached the shock threshold, else 0.
    #[serde(default)]
    pub shock: u8,
}

impl VolatilityRow {
    /// Creates a new volatility row.
    #[must_use]
    pub fn new(
        week_start: impl Into<String>,
        net_cash_flow: f64,
        volatility: f64,
        shock: u8,
    ) -> Self {
        Self {
            week_start: week_start.into(),
            net_cash_flow,
            volatility,
            shock,
        }
    }

    /// True when the week is flagged as a volatility shock.
    #[must_use]
    pub fn is_shock(&self) -> bool {
        self.shock == 1
    }
}

/// One row of the liquidity-stress series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressRow {
    /// Opaque time-bucket label.
    #[serde(default)]
    pub week_start: String,
    /// Signed net cash flow for the week.
    #[serde(default)]
    pub net_cash_flow: f64,
    /// Liquidity stress score for the week.
    #[serde(default)]
    pub stress_score: f64,
}

impl StressRow {
    /// Creates a new stress row.
    #[must_use]
    pub fn new(week_start: impl Into<String>, net_cash_flow: f64, stress_score: f64) -> Self {
        Self {
            week_start: week_start.into(),
            net_cash_flow,
            stress_score,
        }
    }
}

/// One row of the cash-stability-index series.
///
/// The band is assigned upstream from the stability score; the Classifier
/// only tallies membership. Rows arriving without a band read as
/// [`RiskBand::Low`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityRow {
    /// Opaque time-bucket label.
    #[serde(default)]
    pub week_start: String,
    /// Stability index in `[0, 1]`, higher is more stable.
    #[serde(default)]
    pub stability_index: f64,
    /// Risk band assigned by the upstream pipeline.
    #[serde(default = "default_band")]
    pub risk_band: RiskBand,
}

fn default_band() -> RiskBand {
    RiskBand::Low
}

impl StabilityRow {
    /// Creates a new stability row.
    #[must_use]
    pub fn new(week_start: impl Into<String>, stability_index: f64, risk_band: RiskBand) -> Self {
        Self {
            week_start: week_start.into(),
            stability_index,
            risk_band,
        }
    }
}
