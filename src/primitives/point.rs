//! Point type for n-dimensional feature vectors.

use serde::{Deserialize, Serialize};

/// A feature vector with an optional class label.
///
/// Training points carry a label; query points usually do not.
///
/// # Examples
///
/// ```
/// use knn_bayes::primitives::Point;
///
/// let train = Point::labeled(vec![0.0, 1.0], "A");
/// assert_eq!(train.n_dims(), 2);
/// assert_eq!(train.label(), Some(&"A"));
///
/// let query: Point<&str> = Point::new(vec![0.5, 0.5]);
/// assert!(query.label().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point<L> {
    dimensions: Vec<f64>,
    label: Option<L>,
}

impl<L> Point<L> {
    /// Creates an unlabeled point.
    #[must_use]
    pub fn new(dimensions: Vec<f64>) -> Self {
        Self {
            dimensions,
            label: None,
        }
    }

    /// Creates a point tagged with a class label.
    #[must_use]
    pub fn labeled(dimensions: Vec<f64>, label: L) -> Self {
        Self {
            dimensions,
            label: Some(label),
        }
    }

    /// Creates an unlabeled point by copying a slice.
    #[must_use]
    pub fn from_slice(dimensions: &[f64]) -> Self {
        Self::new(dimensions.to_vec())
    }

    /// Returns the feature values.
    #[must_use]
    pub fn dimensions(&self) -> &[f64] {
        &self.dimensions
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn n_dims(&self) -> usize {
        self.dimensions.len()
    }

    /// Returns the class label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&L> {
        self.label.as_ref()
    }

    /// Consumes the point, returning its values and label.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Option<L>) {
        (self.dimensions, self.label)
    }
}

impl<L> AsRef<[f64]> for Point<L> {
    fn as_ref(&self) -> &[f64] {
        &self.dimensions
    }
}

impl<L> From<Vec<f64>> for Point<L> {
    fn from(dimensions: Vec<f64>) -> Self {
        Self::new(dimensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unlabeled() {
        let p: Point<u8> = Point::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(p.n_dims(), 3);
        assert_eq!(p.dimensions(), &[1.0, 2.0, 3.0]);
        assert!(p.label().is_none());
    }

    #[test]
    fn test_labeled() {
        let p = Point::labeled(vec![4.0], 'x');
        assert_eq!(p.label(), Some(&'x'));
        assert_eq!(p.as_ref(), &[4.0]);
    }

    #[test]
    fn test_from_vec_and_slice() {
        let a: Point<()> = vec![1.5, -1.5].into();
        let b: Point<()> = Point::from_slice(&[1.5, -1.5]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_into_parts() {
        let (dims, label) = Point::labeled(vec![0.25], 3_u32).into_parts();
        assert_eq!(dims, vec![0.25]);
        assert_eq!(label, Some(3));
    }

    #[test]
    fn test_serde_preserves_label() {
        let p = Point::labeled(vec![0.0, 1.0], "B".to_string());
        let json = serde_json::to_string(&p).expect("point serializes");
        let back: Point<String> = serde_json::from_str(&json).expect("point deserializes");
        assert_eq!(back, p);
    }
}
