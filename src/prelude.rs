//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use knn_bayes::prelude::*;
//! ```

pub use crate::classification::{ClassifierConfig, KnnBayesClassifier, Posterior, DATA_NOISE};
pub use crate::distance::{distance, DistanceMetric};
pub use crate::error::{KnnBayesError, Result};
pub use crate::primitives::{Point, Space};
