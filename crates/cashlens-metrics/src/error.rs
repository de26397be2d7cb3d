//! Error types for the metrics layer.
//!
//! The transforms are total; the only operation that can fail is the strict
//! label-keyed merge, which refuses to combine series whose time axes have
//! drifted apart.

use thiserror::Error;

/// A specialized Result type for metrics operations.
pub type MetricsResult<T> = Result<T, MetricsError>;

/// The error type for metrics operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// Two series handed to the strict merge do not share a time axis.
    #[error(
        "misaligned series at index {index}: primary week {primary:?}, secondary week {secondary:?}"
    )]
    MisalignedSeries {
        /// First position at which the series disagree. For a length
        /// mismatch this is the length of the shorter series.
        index: usize,
        /// Primary series label at that position, if any.
        primary: Option<String>,
        /// Secondary series label at that position, if any.
        secondary: Option<String>,
    },
}
