//! Error types.
//!
//! Every failure here is a caller-supplied precondition violation. Errors
//! are raised by the operation that first needs the violated invariant and
//! are never corrected silently.

use thiserror::Error;

/// Result type alias for hopfield-tsp operations.
pub type Result<T> = std::result::Result<T, HopfieldError>;

/// Unified error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HopfieldError {
    /// The distance matrix is empty, not square, asymmetric, has a non-zero
    /// diagonal, or contains a negative or non-finite entry.
    #[error("invalid dimension: {reason}")]
    InvalidDimension {
        /// What was wrong with the matrix.
        reason: String,
    },

    /// A negative step budget was offered.
    #[error("invalid step budget: {steps} (must be >= 0)")]
    InvalidStepBudget {
        /// The rejected step count.
        steps: i64,
    },

    /// A runner configuration parameter is out of range.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },
}

impl HopfieldError {
    pub(crate) fn dimension(reason: impl Into<String>) -> Self {
        Self::InvalidDimension {
            reason: reason.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
