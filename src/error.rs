//! Error types for knn-bayes operations.
//!
//! Provides rich error context for library consumers.

use thiserror::Error;

/// Main error type for knn-bayes operations.
///
/// # Examples
///
/// ```
/// use knn_bayes::error::KnnBayesError;
///
/// let err = KnnBayesError::dimension_mismatch("query", 3, 2);
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnnBayesError {
    /// Two points (or a point and a space) disagree on dimensionality.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Classification requested against a space holding no training points.
    #[error("cannot classify against an empty space")]
    EmptySpace,

    /// A training point was inserted without a class label.
    #[error("training point {index} has no class label")]
    UnlabeledPoint {
        /// Position the point would occupy in the space
        index: usize,
    },

    /// A training point carries a label outside the space's known classes.
    #[error("unknown class label: {label}")]
    UnknownLabel {
        /// Debug rendering of the offending label
        label: String,
    },

    /// A neighbor refers to a point the space does not hold.
    #[error("neighbor index {index} out of bounds for space of {len} points")]
    NeighborOutOfRange {
        /// Offending point index
        index: usize,
        /// Number of points in the space
        len: usize,
    },

    /// Invalid hyperparameter value provided.
    #[error("invalid hyperparameter: {param} = {value}, expected {constraint}")]
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },
}

impl KnnBayesError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an invalid hyperparameter error
    #[must_use]
    pub fn invalid_hyperparameter(
        param: &str,
        value: impl ToString,
        constraint: &str,
    ) -> Self {
        Self::InvalidHyperparameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, KnnBayesError>;
