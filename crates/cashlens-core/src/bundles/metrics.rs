//! Headline metrics bundle (`metrics.json`).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreResult;

/// Mean absolute error of the forecast model.
///
/// The pipeline emits a number when it had enough history to backtest, and
/// a marker string (`"insufficient_history"`) otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Mae {
    /// Backtested error value.
    Value(f64),
    /// Marker emitted when the history was too short to evaluate.
    Text(String),
}

impl Mae {
    /// Numeric MAE, if the model was evaluated.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Mae::Value(v) => Some(*v),
            Mae::Text(_) => None,
        }
    }
}

impl Default for Mae {
    fn default() -> Self {
        Mae::Text("insufficient_history".to_string())
    }
}

impl fmt::Display for Mae {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mae::Value(v) => write!(f, "{v:.2}"),
            Mae::Text(t) => write!(f, "{t}"),
        }
    }
}

/// Headline figures and report text from the forecast pipeline.
///
/// # Example
///
/// ```rust
/// use cashlens_core::bundles::MetricsBundle;
///
/// let m = MetricsBundle::from_json(r#"{"starting_cash_usd": 1000.0}"#).unwrap();
/// assert_eq!(m.starting_cash_usd, 1000.0);
/// assert_eq!(m.model, "");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricsBundle {
    /// Starting liquidity in USD.
    #[serde(default)]
    pub starting_cash_usd: f64,
    /// Name of the forecasting model.
    #[serde(default)]
    pub model: String,
    /// Mean absolute error of the model, when evaluated.
    #[serde(default)]
    pub mae: Mae,
    /// Modelling assumptions, rendered verbatim on the report page.
    #[serde(default)]
    pub assumptions: Vec<String>,
    /// Model limitations, rendered verbatim on the report page.
    #[serde(default)]
    pub limitations: Vec<String>,
}

impl MetricsBundle {
    /// Decodes a metrics bundle from its JSON payload.
    pub fn from_json(payload: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}
