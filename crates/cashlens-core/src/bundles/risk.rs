//! Risk bundle: indicator series and the driver-concentration summary.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::types::{StabilityRow, StressRow, VolatilityRow, WeeklyMixRow};

/// Transaction-count summary of the driver-concentration analysis.
///
/// `Default` yields the zero/"unknown" fallbacks a view substitutes when the
/// upstream section is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverSummary {
    /// Number of inflow transactions in the window.
    #[serde(default)]
    pub inflow_transactions: u64,
    /// Number of outflow transactions in the window.
    #[serde(default)]
    pub outflow_transactions: u64,
    /// Direction label reported upstream.
    #[serde(default = "unknown_label")]
    pub dominant_direction: String,
    /// Dominance ratio reported upstream.
    #[serde(default)]
    pub dominance_ratio: f64,
    /// Structural risk label reported upstream.
    #[serde(default = "unknown_level")]
    pub risk_level: String,
}

fn unknown_label() -> String {
    "unknown".to_string()
}

fn unknown_level() -> String {
    "Unknown".to_string()
}

impl Default for DriverSummary {
    fn default() -> Self {
        Self {
            inflow_transactions: 0,
            outflow_transactions: 0,
            dominant_direction: unknown_label(),
            dominance_ratio: 0.0,
            risk_level: unknown_level(),
        }
    }
}

/// Driver-concentration section of the risk bundle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DriverConcentration {
    /// Transaction-count summary.
    #[serde(default)]
    pub summary: DriverSummary,
    /// Weekly inflow/outflow composition.
    #[serde(default)]
    pub weekly_mix: Vec<WeeklyMixRow>,
}

/// Risk bundle produced by the upstream risk-analysis pipeline
/// (`risk_analysis.json`).
///
/// Every section is optional: a bundle decoded from `{}` is valid and all
/// accessors return empty/default values.
///
/// # Example
///
/// ```rust
/// use cashlens_core::bundles::RiskBundle;
///
/// let b = RiskBundle::from_json("{}").unwrap();
/// assert!(b.weekly_mix().is_empty());
/// assert_eq!(b.driver_summary().inflow_transactions, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskBundle {
    /// Starting liquidity in USD.
    #[serde(default)]
    pub starting_cash_usd: f64,
    /// Driver-concentration analysis.
    #[serde(default)]
    pub driver_concentration: DriverConcentration,
    /// Rolling-volatility series with shock flags.
    #[serde(default)]
    pub volatility_risk: Vec<VolatilityRow>,
    /// Liquidity-stress series.
    #[serde(default)]
    pub liquidity_stress: Vec<StressRow>,
    /// Cash-stability-index series with pre-assigned bands.
    #[serde(default)]
    pub cash_stability_index: Vec<StabilityRow>,
    /// Analysis assumptions, rendered verbatim on the report page.
    #[serde(default)]
    pub assumptions: Vec<String>,
    /// Analysis limitations, rendered verbatim on the report page.
    #[serde(default)]
    pub limitations: Vec<String>,
}

impl RiskBundle {
    /// Decodes a risk bundle from its JSON payload.
    pub fn from_json(payload: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Driver-concentration transaction summary; defaults when absent.
    #[must_use]
    pub fn driver_summary(&self) -> &DriverSummary {
        &self.driver_concentration.summary
    }

    /// Weekly inflow/outflow mix; empty when absent.
    #[must_use]
    pub fn weekly_mix(&self) -> &[WeeklyMixRow] {
        &self.driver_concentration.weekly_mix
    }

    /// Volatility series; empty when absent.
    #[must_use]
    pub fn volatility_rows(&self) -> &[VolatilityRow] {
        &self.volatility_risk
    }

    /// Liquidity-stress series; empty when absent.
    #[must_use]
    pub fn stress_rows(&self) -> &[StressRow] {
        &self.liquidity_stress
    }

    /// Stability-index series; empty when absent.
    #[must_use]
    pub fn stability_rows(&self) -> &[StabilityRow] {
        &self.cash_stability_index
    }
}
