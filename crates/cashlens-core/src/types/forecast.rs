//! Forecast series rows and horizons.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Forecast horizon produced by the upstream forecasting pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForecastHorizon {
    /// Four weekly points.
    #[serde(rename = "1_month")]
    OneMonth,
    /// Thirteen weekly points.
    #[serde(rename = "3_months")]
    ThreeMonths,
    /// Fifty-two weekly points.
    #[serde(rename = "1_year")]
    OneYear,
}

impl ForecastHorizon {
    /// All horizons in ascending length order.
    pub const ALL: [ForecastHorizon; 3] = [
        ForecastHorizon::OneMonth,
        ForecastHorizon::ThreeMonths,
        ForecastHorizon::OneYear,
    ];
}

impl fmt::Display for ForecastHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ForecastHorizon::OneMonth => "1 month",
            ForecastHorizon::ThreeMonths => "3 months",
            ForecastHorizon::OneYear => "1 year",
        };
        write!(f, "{name}")
    }
}

/// One projected point of a forecast series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// 1-based position of the point within its horizon.
    #[serde(default)]
    pub week_index: u32,
    /// Opaque label of the projected week.
    #[serde(default)]
    pub forecast_week_start: String,
    /// Projected signed net cash flow.
    #[serde(default)]
    pub forecast_net_cash_flow: f64,
}

impl ForecastPoint {
    /// Creates a new forecast point.
    #[must_use]
    pub fn new(
        week_index: u32,
        forecast_week_start: impl Into<String>,
        forecast_net_cash_flow: f64,
    ) -> Self {
        Self {
            week_index,
            forecast_week_start: forecast_week_start.into(),
            forecast_net_cash_flow,
        }
    }
}
