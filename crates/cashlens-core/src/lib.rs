//! # Cashlens Core
//!
//! Core types and abstractions for the Cashlens derived-metrics library.
//!
//! This crate provides the foundational building blocks used throughout
//! Cashlens:
//!
//! - **Types**: Row types for each externally-sourced weekly series
//!   (`WeeklyRecord`, `WeeklyMixRow`, `VolatilityRow`, `StressRow`,
//!   `StabilityRow`, `ForecastPoint`) and the `RiskBand` classification
//! - **Bundles**: serde shapes for the metrics, forecast, and risk bundles
//!   produced by the upstream pipelines, with total accessors that degrade
//!   missing fields to zero/empty defaults
//! - **Numeric safety**: shared helpers that keep every downstream
//!   computation free of `NaN` and division-by-zero artifacts
//!
//! ## Design Philosophy
//!
//! - **Total by construction**: absent upstream data becomes a documented
//!   default, never an error or a `NaN`
//! - **Opaque time buckets**: `week_start` labels are carried verbatim and
//!   never parsed, compared, or reordered
//! - **Boundary-only failure**: the only fallible operation is decoding a
//!   bundle from JSON; everything past that boundary is infallible
//!
//! ## Example
//!
//! ```rust
//! use cashlens_core::prelude::*;
//!
//! let bundle = RiskBundle::from_json(r#"{"volatility_risk": []}"#).unwrap();
//! // Absent sections read as empty, not as errors.
//! assert!(bundle.stability_rows().is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod bundles;
pub mod error;
pub mod num;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bundles::{
        DriverConcentration, DriverSummary, ForecastBundle, ForecastSet, Mae, MetricsBundle,
        RiskBundle,
    };
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        ForecastHorizon, ForecastPoint, RiskBand, StabilityRow, StressRow, VolatilityRow,
        WeeklyMixRow, WeeklyRecord,
    };
}

// Re-export commonly used items at crate root
pub use error::{CoreError, CoreResult};
pub use types::RiskBand;
