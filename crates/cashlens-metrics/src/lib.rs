//! # Cashlens Metrics
//!
//! The derived-metrics computation layer of the Cashlens dashboard.
//!
//! This crate turns raw, independently-sourced weekly series (actuals, the
//! forecast bundle, the risk bundle - see `cashlens-core`) into the
//! normalized, merged, and aggregated views a presentation layer renders:
//!
//! - **Normalizer**: percentage-of-total shares and running totals
//! - **Aggregator**: dominance summaries, field averages, shock counts,
//!   percent change against an explicit baseline
//! - **Classifier**: risk-band tallies, dominant band, score thresholding
//! - **Merger**: positional joins across series, plus a strict label-keyed
//!   variant that fails loudly on misalignment
//!
//! ## Contracts
//!
//! Every transform is a pure, total function over already-loaded data:
//!
//! - Input slices are never mutated or retained; each call allocates and
//!   returns fresh output.
//! - Ordering is caller-supplied (ascending by time) and preserved; nothing
//!   here reorders rows or interprets `week_start` labels.
//! - Empty series, missing fields, and zero denominators produce documented
//!   defaults, never `NaN`, infinities, or panics. The single fallible
//!   operation is the opt-in strict merge.
//!
//! ## Example
//!
//! ```rust
//! use cashlens_core::types::WeeklyMixRow;
//! use cashlens_metrics::prelude::*;
//!
//! let mix = vec![WeeklyMixRow::new("2025-01-06", 30.0, 90.0)];
//! let shares = normalize_flow_mix(&mix);
//! assert_eq!(shares[0].inflow_pct, 25.0);
//! assert_eq!(shares[0].outflow_pct, 75.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod aggregate;
pub mod classify;
pub mod error;
pub mod merge;
pub mod normalize;

pub use error::{MetricsError, MetricsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::aggregate::{
        average_by, average_stability, cash_change_pct, count_shocks, dominance_summary,
        DominanceConfig, DominanceSummary, FlowDirection, StructuralRisk,
    };
    pub use crate::classify::{score_to_band, tally_bands, BandTally, BandThresholds};
    pub use crate::error::{MetricsError, MetricsResult};
    pub use crate::merge::{merge_by_position, merge_by_week, stress_composite, StressComposite};
    pub use crate::normalize::{
        accumulate_flows, normalize_flow_mix, CumulativeFlowRow, FlowAccumulation,
        NormalizedMixRow,
    };
}
