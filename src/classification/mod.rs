//! Hybrid k-nearest-neighbors / Gaussian naive Bayes classification.
//!
//! A query is classified in three stages:
//! 1. [`neighbors::nearest`] orders the training points by distance
//! 2. [`estimate::estimate`] fits per-class priors, means and variances from
//!    the k nearest of them
//! 3. [`scoring::score_classes`] applies Bayes' rule with a Gaussian
//!    likelihood per dimension and [`scoring::select_best`] picks the winner
//!
//! Nothing survives between queries: every call builds its own neighbor
//! ordering and statistics, so one [`Space`] can serve concurrent queries.
//!
//! # Example
//!
//! ```
//! use knn_bayes::classification::KnnBayesClassifier;
//! use knn_bayes::primitives::{Point, Space};
//!
//! let space = Space::with_points(
//!     1,
//!     ["A", "B"],
//!     vec![
//!         Point::labeled(vec![0.0], "A"),
//!         Point::labeled(vec![0.1], "A"),
//!         Point::labeled(vec![-0.1], "A"),
//!         Point::labeled(vec![10.0], "B"),
//!         Point::labeled(vec![10.1], "B"),
//!         Point::labeled(vec![9.9], "B"),
//!     ],
//! ).expect("valid training points");
//!
//! let classifier = KnnBayesClassifier::new(&space);
//! let label = classifier.classify(&[0.05], 3).expect("1-d query");
//! assert_eq!(label, Some(&"A"));
//! ```

pub mod estimate;
pub mod neighbors;
pub mod scoring;

pub use estimate::NeighborhoodStats;
pub use neighbors::Neighbor;
pub use scoring::DATA_NOISE;

use crate::distance::DistanceMetric;
use crate::error::{KnnBayesError, Result};
use crate::primitives::Space;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Default number of neighbors consulted per query.
pub const DEFAULT_K: usize = 100;

/// Hyperparameters of a [`KnnBayesClassifier`].
///
/// # Example
///
/// ```
/// use knn_bayes::classification::ClassifierConfig;
///
/// let config: ClassifierConfig = serde_json::from_str(r#"{"k": 7}"#).expect("valid json");
/// assert_eq!(config.k, 7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Number of nearest neighbors to fit statistics from
    pub k: usize,
    /// Additive smoothing applied to every variance term
    pub var_smoothing: f64,
    /// Distance metric for neighbor selection
    pub metric: DistanceMetric,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            var_smoothing: DATA_NOISE,
            metric: DistanceMetric::Euclidean,
        }
    }
}

impl ClassifierConfig {
    /// Checks every hyperparameter.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` if `k` is 0, `var_smoothing` is not a
    /// positive finite number, or a Minkowski `p` is below 1.
    pub fn validate(&self) -> Result<()> {
        validate_k(self.k)?;
        self.validate_params()
    }

    fn validate_params(&self) -> Result<()> {
        if !(self.var_smoothing.is_finite() && self.var_smoothing > 0.0) {
            return Err(KnnBayesError::invalid_hyperparameter(
                "var_smoothing",
                self.var_smoothing,
                "finite and > 0",
            ));
        }

        self.metric.validate()
    }
}

fn validate_k(k: usize) -> Result<()> {
    if k == 0 {
        return Err(KnnBayesError::invalid_hyperparameter("k", k, ">= 1"));
    }
    Ok(())
}

/// Everything one query computed: the neighborhood used, the fitted
/// statistics, and the per-class log scores.
#[derive(Debug, Clone)]
pub struct Posterior<'s, L> {
    classes: &'s [L],
    neighbors: Vec<Neighbor>,
    stats: NeighborhoodStats,
    log_scores: Vec<f64>,
    best: Option<usize>,
}

impl<'s, L> Posterior<'s, L> {
    /// Winning class label, or `None` if no class scored above zero.
    #[must_use]
    pub fn label(&self) -> Option<&'s L> {
        let classes: &'s [L] = self.classes;
        self.best.map(|idx| &classes[idx])
    }

    /// Enumeration index of the winning class.
    #[must_use]
    pub fn class_index(&self) -> Option<usize> {
        self.best
    }

    /// The k nearest neighbors, closest first.
    #[must_use]
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    /// Number of neighbors actually used (`min(k, space size)`).
    #[must_use]
    pub fn k_used(&self) -> usize {
        self.neighbors.len()
    }

    /// Statistics fitted from the neighborhood.
    #[must_use]
    pub fn stats(&self) -> &NeighborhoodStats {
        &self.stats
    }

    /// Natural-log scores in class enumeration order.
    #[must_use]
    pub fn log_scores(&self) -> &[f64] {
        &self.log_scores
    }

    /// Unnormalized score `prior × Π likelihood` of a class. May underflow
    /// to 0 where the log score is still finite.
    ///
    /// # Panics
    ///
    /// Panics if `class_idx` is out of bounds.
    #[must_use]
    pub fn score(&self, class_idx: usize) -> f64 {
        self.log_scores[class_idx].exp()
    }
}

/// K-nearest-neighbors / Gaussian naive Bayes classifier over a borrowed
/// training [`Space`].
///
/// Holds only hyperparameters and the space reference; all per-query state
/// lives in the returned values.
#[derive(Debug, Clone)]
pub struct KnnBayesClassifier<'s, L> {
    space: &'s Space<L>,
    config: ClassifierConfig,
}

impl<'s, L> KnnBayesClassifier<'s, L> {
    /// Creates a classifier with default hyperparameters.
    #[must_use]
    pub fn new(space: &'s Space<L>) -> Self {
        Self {
            space,
            config: ClassifierConfig::default(),
        }
    }

    /// Sets the default number of neighbors used by [`Self::classify_default`].
    #[must_use]
    pub fn with_k(mut self, k: usize) -> Self {
        self.config.k = k;
        self
    }

    /// Sets the variance smoothing term.
    #[must_use]
    pub fn with_var_smoothing(mut self, var_smoothing: f64) -> Self {
        self.config.var_smoothing = var_smoothing;
        self
    }

    /// Sets the distance metric.
    #[must_use]
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.config.metric = metric;
        self
    }

    /// Replaces all hyperparameters.
    #[must_use]
    pub fn with_config(mut self, config: ClassifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Current hyperparameters.
    #[must_use]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// The training space queried.
    #[must_use]
    pub fn space(&self) -> &'s Space<L> {
        self.space
    }

    /// Classifies `query` from its `k` nearest training points.
    ///
    /// Uses every point when `k` exceeds the space size. Returns `Ok(None)`
    /// when no class achieves a positive score.
    ///
    /// # Errors
    ///
    /// - `InvalidHyperparameter` if `k` is 0 or the configuration is invalid
    /// - `DimensionMismatch` if `query` does not match the space
    /// - `EmptySpace` if the space has no training points
    pub fn classify<Q>(&self, query: &Q, k: usize) -> Result<Option<&'s L>>
    where
        Q: AsRef<[f64]> + ?Sized,
    {
        Ok(self.explain(query, k)?.label())
    }

    /// Classifies `query` using the configured `k`.
    ///
    /// # Errors
    ///
    /// See [`Self::classify`].
    pub fn classify_default<Q>(&self, query: &Q) -> Result<Option<&'s L>>
    where
        Q: AsRef<[f64]> + ?Sized,
    {
        self.classify(query, self.config.k)
    }

    /// Runs a full query and returns every intermediate result.
    ///
    /// # Errors
    ///
    /// See [`Self::classify`].
    pub fn explain<Q>(&self, query: &Q, k: usize) -> Result<Posterior<'s, L>>
    where
        Q: AsRef<[f64]> + ?Sized,
    {
        validate_k(k)?;
        self.config.validate_params()?;

        let query = query.as_ref();
        let mut neighbors = neighbors::nearest(self.space, query, self.config.metric)?;
        if neighbors.is_empty() {
            return Err(KnnBayesError::EmptySpace);
        }

        if k > neighbors.len() {
            debug!(
                k,
                available = neighbors.len(),
                "k exceeds training size, using all points"
            );
        }
        neighbors.truncate(k);

        let stats = estimate::estimate(self.space, &neighbors)?;
        let log_scores = scoring::score_classes(&stats, query, self.config.var_smoothing)?;
        let best = scoring::select_best(&log_scores);

        trace!(?log_scores, "class log scores");
        debug!(k_used = neighbors.len(), class = ?best, "classified query");

        Ok(Posterior {
            classes: self.space.classes(),
            neighbors,
            stats,
            log_scores,
            best,
        })
    }
}

impl<'s, L: Sync> KnnBayesClassifier<'s, L> {
    /// Classifies many queries against the same space in parallel.
    ///
    /// Results are in input order and equal what [`Self::classify`] returns
    /// for each query.
    ///
    /// # Errors
    ///
    /// Returns an error if any query fails; see [`Self::classify`].
    pub fn classify_batch<Q>(&self, queries: &[Q], k: usize) -> Result<Vec<Option<&'s L>>>
    where
        Q: AsRef<[f64]> + Sync,
    {
        debug!(queries = queries.len(), k, "classifying batch");
        queries
            .par_iter()
            .map(|query| self.classify(query, k))
            .collect()
    }
}


#[cfg(test)]
mod tests_knnb_contract;
