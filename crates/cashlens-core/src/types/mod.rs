//! Domain types for the derived-metrics layer.
//!
//! This module provides the row types for each externally-sourced weekly
//! series:
//!
//! - [`WeeklyRecord`]: weekly actuals (net flow and cash position)
//! - [`WeeklyMixRow`]: inflow/outflow composition per week
//! - [`VolatilityRow`], [`StressRow`], [`StabilityRow`]: risk indicator rows
//! - [`RiskBand`]: the three-band qualitative risk classification
//! - [`ForecastPoint`], [`ForecastHorizon`]: forecast series rows
//!
//! Every row carries its time bucket as an opaque `week_start` label.
//! Ordering is supplied by the producer (ascending by time) and preserved;
//! nothing in this library parses, compares, or reorders the labels.

mod forecast;
mod risk;
mod weekly;

pub use forecast::{ForecastHorizon, ForecastPoint};
pub use risk::{RiskBand, StabilityRow, StressRow, VolatilityRow};
pub use weekly::{WeeklyMixRow, WeeklyRecord};
