//! Distance metrics between feature vectors.
//!
//! Every metric checks dimensionality up front instead of silently pairing
//! the shorter prefix of two vectors.

use crate::error::{KnnBayesError, Result};
use crate::primitives::Point;
use serde::{Deserialize, Serialize};

/// Distance metric used for neighbor selection.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// Euclidean distance: `sqrt(sum((x_i - y_i)^2))`
    #[default]
    Euclidean,
    /// Manhattan distance: `sum(|x_i - y_i|)`
    Manhattan,
    /// Minkowski distance with parameter p (p >= 1)
    Minkowski(f64),
}

impl DistanceMetric {
    /// Checks the metric's parameter.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` if a Minkowski `p` is below 1 or not finite.
    pub fn validate(&self) -> Result<()> {
        if let DistanceMetric::Minkowski(p) = *self {
            if !(p >= 1.0 && p.is_finite()) {
                return Err(KnnBayesError::invalid_hyperparameter(
                    "minkowski_p",
                    p,
                    "finite and >= 1",
                ));
            }
        }
        Ok(())
    }

    /// Computes the distance between two equal-length vectors.
    ///
    /// # Errors
    ///
    /// - `InvalidHyperparameter` if the metric's parameter is invalid
    /// - `DimensionMismatch` if the lengths differ
    pub fn compute(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        self.validate()?;
        if a.len() != b.len() {
            return Err(KnnBayesError::dimension_mismatch("lhs", a.len(), b.len()));
        }

        let pairs = a.iter().zip(b);
        let dist = match *self {
            DistanceMetric::Euclidean => pairs
                .map(|(x, y)| {
                    let diff = x - y;
                    diff * diff
                })
                .sum::<f64>()
                .sqrt(),
            DistanceMetric::Manhattan => pairs.map(|(x, y)| (x - y).abs()).sum(),
            DistanceMetric::Minkowski(p) => pairs
                .map(|(x, y)| (x - y).abs().powf(p))
                .sum::<f64>()
                .powf(1.0 / p),
        };
        Ok(dist)
    }
}

/// Euclidean distance between two feature vectors.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the lengths differ.
///
/// # Examples
///
/// ```
/// use knn_bayes::distance::euclidean;
///
/// let d = euclidean(&[0.0, 0.0], &[3.0, 4.0]).expect("same length");
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
pub fn euclidean(a: &[f64], b: &[f64]) -> Result<f64> {
    DistanceMetric::Euclidean.compute(a, b)
}

/// Euclidean distance between two points. Labels are ignored.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the points' dimensionalities differ.
pub fn distance<L, M>(p1: &Point<L>, p2: &Point<M>) -> Result<f64> {
    euclidean(p1.dimensions(), p2.dimensions())
}
