//! Input validation errors for the association metrics.

use thiserror::Error;

/// Errors raised when the inputs to an association metric are malformed.
///
/// Every variant is a precondition violation: the caller should treat the
/// feature as not scorable rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssocError {
    /// One of the input series has no observations.
    #[error("input series must not be empty")]
    EmptyInput,

    /// The aligned input series have different lengths.
    #[error("input series must have the same length (got {left} and {right})")]
    LengthMismatch {
        /// Length of the first series
        left: usize,
        /// Length of the second series
        right: usize,
    },

    /// The target does not take exactly two distinct values.
    #[error("target must have exactly 2 distinct values, found {found}")]
    NonBinaryTarget {
        /// Number of distinct values observed in the target
        found: usize,
    },

    /// Supplied target counts do not cover a value observed in the target.
    #[error("target counts have no entry for target value {value}")]
    MissingTargetCount {
        /// Debug rendering of the uncovered target value
        value: String,
    },

    /// A target total is zero, negative or not finite, so proportions are undefined.
    #[error("target value {value} has a total count that is not a positive finite number")]
    InvalidTargetCount {
        /// Debug rendering of the target value
        value: String,
    },

    /// A target mapping names a value that does not occur in the target.
    #[error("target mapping value {value} does not occur in the target")]
    UnknownTargetValue {
        /// Debug rendering of the mapped value
        value: String,
    },

    /// A target mapping uses the same value for both roles.
    #[error("target mapping uses {value} as both event and non-event value")]
    AmbiguousTargetMapping {
        /// Debug rendering of the repeated value
        value: String,
    },

    /// A measurement is NaN or infinite.
    #[error("measurement at index {index} is not a finite number")]
    NonFiniteMeasurement {
        /// Position of the first offending measurement
        index: usize,
    },
}

/// Check that two aligned series are non-empty and of equal length.
pub(crate) fn check_aligned(left: usize, right: usize) -> Result<(), AssocError> {
    if left == 0 || right == 0 {
        return Err(AssocError::EmptyInput);
    }
    if left != right {
        return Err(AssocError::LengthMismatch { left, right });
    }
    Ok(())
}
