//! Neighbor selection: ordering training points by distance to a query.

use crate::distance::DistanceMetric;
use crate::error::{KnnBayesError, Result};
use crate::primitives::Space;

/// A training point's position in its space and its distance to the query.
///
/// Only produced by [`nearest`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub(crate) index: usize,
    pub(crate) distance: f64,
}

impl Neighbor {
    /// Index into [`Space::points`].
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Distance to the query point.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

/// Orders every training point of `space` by ascending distance to `query`.
///
/// The space itself is not reordered; the result is an index permutation.
/// The sort is stable, so equidistant points keep insertion order. NaN
/// distances sort after all others.
///
/// # Errors
///
/// Returns `DimensionMismatch` if `query` does not match the space's
/// dimensionality.
pub fn nearest<L>(space: &Space<L>, query: &[f64], metric: DistanceMetric) -> Result<Vec<Neighbor>> {
    if query.len() != space.dimensionality() {
        return Err(KnnBayesError::dimension_mismatch(
            "space",
            space.dimensionality(),
            query.len(),
        ));
    }

    let mut neighbors = space
        .points()
        .iter()
        .enumerate()
        .map(|(index, point)| {
            metric
                .compute(point.dimensions(), query)
                .map(|distance| Neighbor { index, distance })
        })
        .collect::<Result<Vec<_>>>()?;

    neighbors.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    Ok(neighbors)
}
