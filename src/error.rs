//! Error types for u-fmcdm.

use thiserror::Error;

/// Errors raised while validating or solving a decision problem.
///
/// Every variant stems from malformed input; none are retryable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FmcdmError {
    /// No alternatives were supplied.
    #[error("alternative set is empty")]
    EmptyAlternativeSet,

    /// No criteria (relations or score vectors) were supplied.
    #[error("at least one criterion is required")]
    NoCriteria,

    /// Dimensions disagree with the alternative count or with each other.
    #[error("shape mismatch in {context}: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Where the mismatch was detected.
        context: String,
        /// Expected side length (or vector length).
        expected: usize,
        /// Actual side length (or vector length).
        found: usize,
    },

    /// A matrix is not square or holds an entry outside [0, 1].
    #[error("invalid fuzzy relation: {reason}")]
    InvalidRelation {
        /// Human-readable description of the defect.
        reason: String,
    },

    /// Method selector outside the recognized codes (1, 2).
    #[error("invalid method code {0}, expected 1 or 2")]
    InvalidMethod(i64),

    /// Solver configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for u-fmcdm operations.
pub type Result<T> = std::result::Result<T, FmcdmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            FmcdmError::EmptyAlternativeSet.to_string(),
            "alternative set is empty"
        );
        assert_eq!(
            FmcdmError::InvalidMethod(3).to_string(),
            "invalid method code 3, expected 1 or 2"
        );

        let err = FmcdmError::ShapeMismatch {
            context: "criterion 1".into(),
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "shape mismatch in criterion 1: expected 3, found 2"
        );
    }
}
