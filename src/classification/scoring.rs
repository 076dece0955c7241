//! Bayesian scoring of classes against a query point.
//!
//! Scores are kept as natural logs: `ln prior + Σ ln N(x_d; μ_d, σ²_d + ε)`.
//! Ordering is identical to the direct product, but classes stay comparable
//! when every product would underflow to zero.

use super::estimate::NeighborhoodStats;
use crate::error::{KnnBayesError, Result};
use crate::stats::log_gaussian_pdf;

/// Default additive variance smoothing applied to every variance term.
pub const DATA_NOISE: f64 = 1e-5;

/// Log score of every class, in class enumeration order.
///
/// A class with prior 0 scores `-inf`.
///
/// # Errors
///
/// Returns `DimensionMismatch` if `query` does not have the dimensionality
/// the statistics were fitted with.
pub fn score_classes(
    stats: &NeighborhoodStats,
    query: &[f64],
    var_smoothing: f64,
) -> Result<Vec<f64>> {
    if let Some(n_dims) = stats.means.first().map(Vec::len) {
        if query.len() != n_dims {
            return Err(KnnBayesError::dimension_mismatch("stats", n_dims, query.len()));
        }
    }

    let scores = (0..stats.n_classes())
        .map(|class_idx| {
            let prior = stats.priors[class_idx];
            if prior <= 0.0 {
                return f64::NEG_INFINITY;
            }

            let means = &stats.means[class_idx];
            let variances = &stats.variances[class_idx];
            query
                .iter()
                .zip(means.iter().zip(variances))
                .fold(prior.ln(), |acc, (&x, (&mean, &variance))| {
                    acc + log_gaussian_pdf(x, mean, variance + var_smoothing)
                })
        })
        .collect();
    Ok(scores)
}

/// Index of the best-scoring class.
///
/// Scans in enumeration order and only replaces the current best on strict
/// improvement, so the earliest class wins exact ties. Returns `None` when no
/// score beats `-inf` (all classes score zero, or scores are NaN).
#[must_use]
pub fn select_best(log_scores: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut best_score = f64::NEG_INFINITY;

    for (class_idx, &score) in log_scores.iter().enumerate() {
        if score > best_score {
            best_score = score;
            best = Some(class_idx);
        }
    }

    best
}
