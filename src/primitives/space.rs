//! Space type: the labeled training set a classifier queries.

use super::Point;
use crate::error::{KnnBayesError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A training set of equal-dimensionality labeled points plus the ordered set
/// of known class labels.
///
/// Class enumeration order is the order in which labels were first given to
/// [`Space::new`]; it decides ties during classification.
///
/// Invariants, checked on every insertion:
/// - every point has exactly `dimensionality` values
/// - every point carries a label from the known class set
///
/// # Examples
///
/// ```
/// use knn_bayes::primitives::{Point, Space};
///
/// let mut space = Space::new(1, ["A", "B"]);
/// space.push(Point::labeled(vec![0.0], "A")).expect("valid point");
/// space.push(Point::labeled(vec![10.0], "B")).expect("valid point");
///
/// assert_eq!(space.len(), 2);
/// assert!(space.push(Point::labeled(vec![1.0, 2.0], "A")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawSpace<L>",
    bound(deserialize = "L: Deserialize<'de> + PartialEq + fmt::Debug")
)]
pub struct Space<L> {
    dimensionality: usize,
    classes: Vec<L>,
    points: Vec<Point<L>>,
    /// Index into `classes` for each point, parallel to `points`
    #[serde(skip)]
    class_of: Vec<usize>,
}

/// Unvalidated wire form of a [`Space`].
#[derive(Deserialize)]
struct RawSpace<L> {
    dimensionality: usize,
    classes: Vec<L>,
    points: Vec<Point<L>>,
}

impl<L: PartialEq + fmt::Debug> TryFrom<RawSpace<L>> for Space<L> {
    type Error = KnnBayesError;

    fn try_from(raw: RawSpace<L>) -> Result<Self> {
        Self::with_points(raw.dimensionality, raw.classes, raw.points)
    }
}

impl<L: PartialEq + fmt::Debug> Space<L> {
    /// Creates an empty space. Repeated labels are collapsed to their first
    /// occurrence.
    #[must_use]
    pub fn new(dimensionality: usize, classes: impl IntoIterator<Item = L>) -> Self {
        let mut known: Vec<L> = Vec::new();
        for label in classes {
            if !known.contains(&label) {
                known.push(label);
            }
        }

        Self {
            dimensionality,
            classes: known,
            points: Vec::new(),
            class_of: Vec::new(),
        }
    }

    /// Creates a space and inserts `points` in order.
    ///
    /// # Errors
    ///
    /// Returns the first error [`Space::push`] reports.
    pub fn with_points(
        dimensionality: usize,
        classes: impl IntoIterator<Item = L>,
        points: impl IntoIterator<Item = Point<L>>,
    ) -> Result<Self> {
        let mut space = Self::new(dimensionality, classes);
        for point in points {
            space.push(point)?;
        }
        Ok(space)
    }

    /// Appends a training point.
    ///
    /// # Errors
    ///
    /// - `DimensionMismatch` if the point's dimensionality differs from the space's
    /// - `UnlabeledPoint` if the point has no label
    /// - `UnknownLabel` if the label is not a known class
    pub fn push(&mut self, point: Point<L>) -> Result<()> {
        if point.n_dims() != self.dimensionality {
            return Err(KnnBayesError::dimension_mismatch(
                "space",
                self.dimensionality,
                point.n_dims(),
            ));
        }

        let label = point.label().ok_or(KnnBayesError::UnlabeledPoint {
            index: self.points.len(),
        })?;
        let class_idx = self
            .class_index(label)
            .ok_or_else(|| KnnBayesError::UnknownLabel {
                label: format!("{label:?}"),
            })?;

        self.class_of.push(class_idx);
        self.points.push(point);
        Ok(())
    }

    /// Returns the enumeration index of a known class label.
    #[must_use]
    pub fn class_index(&self, label: &L) -> Option<usize> {
        self.classes.iter().position(|known| known == label)
    }
}

impl<L> Space<L> {
    /// Returns the declared dimensionality.
    #[must_use]
    pub fn dimensionality(&self) -> usize {
        self.dimensionality
    }

    /// Returns the known class labels in enumeration order.
    #[must_use]
    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    /// Returns the number of known classes.
    #[must_use]
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// Returns the training points in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point<L>] {
        &self.points
    }

    /// Returns the number of training points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the space holds no training points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Class index of the training point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub(crate) fn class_of(&self, index: usize) -> usize {
        self.class_of[index]
    }
}

#[cfg(test)]
#[path = "space_tests.rs"]
mod tests;
