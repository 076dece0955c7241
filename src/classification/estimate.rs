//! Parameter estimation over the k nearest neighbors.

use super::neighbors::Neighbor;
use crate::error::{KnnBayesError, Result};
use crate::primitives::Space;
use crate::stats::mean_var;
use serde::{Deserialize, Serialize};

/// Per-class Gaussian parameters fitted from one query's neighborhood.
///
/// Indexed by class enumeration order of the space. Built fresh for every
/// query and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodStats {
    /// Class prior probabilities P(y=c) within the neighborhood
    pub priors: Vec<f64>,
    /// Feature means per class: means[class][dimension]
    pub means: Vec<Vec<f64>>,
    /// Feature variances per class: variances[class][dimension]
    pub variances: Vec<Vec<f64>>,
    /// Number of neighbors per class
    pub counts: Vec<usize>,
    /// Number of neighbors considered
    pub total: usize,
}

impl NeighborhoodStats {
    /// Returns the number of classes described.
    #[must_use]
    pub fn n_classes(&self) -> usize {
        self.priors.len()
    }
}

/// Fits per-class priors, means and variances from `neighbors`.
///
/// Every neighbor is used; callers pass the k-nearest prefix. Classes absent
/// from the neighborhood get prior 0, mean 0 and variance 0, and a class
/// seen once gets variance 0.
///
/// # Errors
///
/// Returns `NeighborOutOfRange` if a neighbor's index is not a point of
/// `space`, e.g. one produced by [`nearest`](super::neighbors::nearest) on
/// another space.
#[allow(clippy::cast_precision_loss)]
pub fn estimate<L>(space: &Space<L>, neighbors: &[Neighbor]) -> Result<NeighborhoodStats> {
    let n_classes = space.n_classes();
    let n_dims = space.dimensionality();

    // samples[class][dimension] = values seen in the neighborhood
    let mut samples: Vec<Vec<Vec<f64>>> = vec![vec![Vec::new(); n_dims]; n_classes];
    let mut counts = vec![0_usize; n_classes];

    for neighbor in neighbors {
        let point = space
            .points()
            .get(neighbor.index)
            .ok_or(KnnBayesError::NeighborOutOfRange {
                index: neighbor.index,
                len: space.len(),
            })?;
        let class_idx = space.class_of(neighbor.index);
        for (dim, &value) in point.dimensions().iter().enumerate() {
            samples[class_idx][dim].push(value);
        }
        counts[class_idx] += 1;
    }

    let total = neighbors.len();
    let mut means = vec![vec![0.0; n_dims]; n_classes];
    let mut variances = vec![vec![0.0; n_dims]; n_classes];

    for (class_idx, class_samples) in samples.iter().enumerate() {
        for (dim, values) in class_samples.iter().enumerate() {
            let (mean, variance) = mean_var(values);
            means[class_idx][dim] = mean;
            variances[class_idx][dim] = variance;
        }
    }

    let priors = counts
        .iter()
        .map(|&count| {
            if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            }
        })
        .collect();

    Ok(NeighborhoodStats {
        priors,
        means,
        variances,
        counts,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::neighbors::nearest;
    use crate::distance::DistanceMetric;
    use crate::primitives::Point;

    fn mixed_space() -> Space<&'static str> {
        Space::with_points(
            2,
            ["A", "B", "C"],
            vec![
                Point::labeled(vec![0.0, 1.0], "A"),
                Point::labeled(vec![2.0, 3.0], "A"),
                Point::labeled(vec![4.0, 8.0], "A"),
                Point::labeled(vec![1.0, 1.0], "B"),
                Point::labeled(vec![50.0, 50.0], "C"),
            ],
        )
        .expect("valid space")
    }

    fn all_neighbors(space: &Space<&'static str>) -> Vec<Neighbor> {
        (0..space.len())
            .map(|index| Neighbor {
                index,
                distance: 0.0,
            })
            .collect()
    }

    #[test]
    fn test_means_and_variances_per_class() {
        let space = mixed_space();
        let stats = estimate(&space, &all_neighbors(&space)).expect("indices from space");

        assert_eq!(stats.means[0], vec![2.0, 4.0]);
        assert!((stats.variances[0][0] - 4.0).abs() < 1e-12);
        assert!((stats.variances[0][1] - 13.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample_class_has_zero_variance() {
        let space = mixed_space();
        let stats = estimate(&space, &all_neighbors(&space)).expect("indices from space");

        assert_eq!(stats.means[1], vec![1.0, 1.0]);
        assert_eq!(stats.variances[1], vec![0.0, 0.0]);
    }

    #[test]
    fn test_priors_and_counts() {
        let space = mixed_space();
        let stats = estimate(&space, &all_neighbors(&space)).expect("indices from space");

        assert_eq!(stats.total, 5);
        assert_eq!(stats.counts, vec![3, 1, 1]);
        assert_eq!(stats.counts.iter().sum::<usize>(), stats.total);
        assert!((stats.priors.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!((stats.priors[0] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_absent_class_is_all_zero() {
        let space = mixed_space();
        let neighbors = nearest(&space, &[0.5, 1.0], DistanceMetric::Euclidean).expect("2-d query");
        let stats = estimate(&space, &neighbors[..3]).expect("indices from space");

        assert_eq!(stats.total, 3);
        assert_eq!(stats.counts[2], 0);
        assert_eq!(stats.priors[2], 0.0);
        assert_eq!(stats.means[2], vec![0.0, 0.0]);
        assert_eq!(stats.variances[2], vec![0.0, 0.0]);
    }

    #[test]
    fn test_empty_neighborhood_has_zero_priors() {
        let space = mixed_space();
        let stats = estimate(&space, &[]).expect("no neighbors");

        assert_eq!(stats.total, 0);
        assert_eq!(stats.n_classes(), 3);
        assert!(stats.priors.iter().all(|&p| p == 0.0));
    }

    #[test]
    fn test_does_not_mutate_space() {
        let space = mixed_space();
        let before = space.clone();
        let _ = estimate(&space, &all_neighbors(&space)).expect("indices from space");
        assert_eq!(space, before);
    }

    #[test]
    fn test_neighbor_outside_space_is_error() {
        let space = Space::with_points(1, ["A"], vec![Point::labeled(vec![0.0], "A")])
            .expect("valid space");
        let stray = [Neighbor {
            index: 5,
            distance: 0.0,
        }];
        assert_eq!(
            estimate(&space, &stray),
            Err(KnnBayesError::NeighborOutOfRange { index: 5, len: 1 })
        );
    }

    #[test]
    fn test_neighbors_from_larger_space_are_rejected() {
        let big = mixed_space();
        let neighbors = nearest(&big, &[50.0, 50.0], DistanceMetric::Euclidean).expect("2-d query");
        let small = Space::with_points(2, ["A"], vec![Point::labeled(vec![0.0, 0.0], "A")])
            .expect("valid space");
        assert!(matches!(
            estimate(&small, &neighbors),
            Err(KnnBayesError::NeighborOutOfRange { len: 1, .. })
        ));
    }
}
