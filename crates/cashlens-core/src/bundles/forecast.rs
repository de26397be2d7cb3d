//! Forecast bundle: projected net-flow series keyed by horizon.

use serde::{Deserialize, Serialize};

use super::Mae;
use crate::error::CoreResult;
use crate::types::{ForecastHorizon, ForecastPoint};

/// Forecast series for each horizon the pipeline produces.
///
/// Horizons the pipeline did not emit read as empty series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastSet {
    /// Four weekly points.
    #[serde(rename = "1_month", default)]
    pub one_month: Vec<ForecastPoint>,
    /// Thirteen weekly points.
    #[serde(rename = "3_months", default)]
    pub three_months: Vec<ForecastPoint>,
    /// Fifty-two weekly points.
    #[serde(rename = "1_year", default)]
    pub one_year: Vec<ForecastPoint>,
}

impl ForecastSet {
    /// The series for `horizon`; empty when the pipeline did not emit it.
    #[must_use]
    pub fn horizon(&self, horizon: ForecastHorizon) -> &[ForecastPoint] {
        match horizon {
            ForecastHorizon::OneMonth => &self.one_month,
            ForecastHorizon::ThreeMonths => &self.three_months,
            ForecastHorizon::OneYear => &self.one_year,
        }
    }
}

/// Forecast bundle produced by the upstream forecasting pipeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastBundle {
    /// Name of the forecasting model.
    #[serde(default)]
    pub model: String,
    /// Mean absolute error of the model, when evaluated.
    #[serde(default)]
    pub mae: Mae,
    /// Projected series per horizon.
    #[serde(default)]
    pub forecasts: ForecastSet,
}

impl ForecastBundle {
    /// Decodes a forecast bundle from its JSON payload.
    pub fn from_json(payload: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// The series for `horizon`; empty when absent.
    #[must_use]
    pub fn horizon(&self, horizon: ForecastHorizon) -> &[ForecastPoint] {
        self.forecasts.horizon(horizon)
    }
}
