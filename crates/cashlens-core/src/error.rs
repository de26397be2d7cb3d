//! Error types for the Cashlens core crate.
//!
//! The transform layer itself is total: missing fields, empty series, and
//! zero denominators are absorbed into documented defaults. The only failure
//! worth naming is a shape mismatch at the JSON boundary, which surfaces here
//! and is never retried or partially recovered.

use thiserror::Error;

/// A specialized Result type for Cashlens core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for Cashlens core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A bundle payload did not match its documented shape.
    #[error("malformed bundle: {reason}")]
    Malformed {
        /// Description of the shape mismatch.
        reason: String,
    },
}

impl CoreError {
    /// Creates a malformed-bundle error.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::malformed("expected an object at line 1");
        assert!(err.to_string().contains("malformed bundle"));
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CoreError::from(parse_err);
        assert!(matches!(err, CoreError::Malformed { .. }));
    }
}
