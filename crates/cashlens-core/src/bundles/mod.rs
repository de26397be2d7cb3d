//! Raw-bundle shapes produced by the upstream pipelines.
//!
//! Three bundles cross the boundary into this library:
//!
//! - [`MetricsBundle`]: headline figures and report text from the forecast
//!   pipeline (`metrics.json`)
//! - [`ForecastBundle`]: projected net-flow series keyed by horizon
//! - [`RiskBundle`]: risk indicator series and the driver-concentration
//!   summary (`risk_analysis.json`)
//!
//! Every field of every bundle is optional from this library's point of
//! view: upstream data may be partially available while a view still
//! renders. Absence degrades to a zero/empty default via `#[serde(default)]`
//! and the accessor methods, never to an error. The one fallible operation
//! is the `from_json` boundary constructor, where a genuine shape mismatch
//! (a caller handing over something that is not the documented bundle)
//! surfaces as [`CoreError::Malformed`](crate::error::CoreError) and is not
//! retried or partially recovered.

mod forecast;
mod metrics;
mod risk;

pub use forecast::{ForecastBundle, ForecastSet};
pub use metrics::{Mae, MetricsBundle};
pub use risk::{DriverConcentration, DriverSummary, RiskBundle};
