//! knn-bayes: hybrid k-nearest-neighbors / Gaussian naive Bayes classification.
//!
//! A query point is classified by selecting its k nearest labeled training
//! points, fitting a per-class, per-dimension Gaussian from that neighborhood,
//! and picking the class with the highest naive Bayes score.
//!
//! # Quick Start
//!
//! ```
//! use knn_bayes::prelude::*;
//!
//! let space = Space::with_points(
//!     2,
//!     ["cat", "dog"],
//!     vec![
//!         Point::labeled(vec![1.0, 1.2], "cat"),
//!         Point::labeled(vec![0.8, 1.0], "cat"),
//!         Point::labeled(vec![1.1, 0.9], "cat"),
//!         Point::labeled(vec![4.0, 4.2], "dog"),
//!         Point::labeled(vec![4.1, 3.9], "dog"),
//!         Point::labeled(vec![3.8, 4.0], "dog"),
//!     ],
//! ).unwrap();
//!
//! let classifier = KnnBayesClassifier::new(&space);
//! assert_eq!(classifier.classify(&[1.0, 1.0], 3).unwrap(), Some(&"cat"));
//! assert_eq!(classifier.classify(&[4.0, 4.0], 3).unwrap(), Some(&"dog"));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: `Point` and `Space`
//! - [`distance`]: distance metrics
//! - [`stats`]: mean/variance and Gaussian densities
//! - [`classification`]: neighbor selection, parameter estimation, scoring

pub mod classification;
pub mod distance;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod stats;

pub use classification::{ClassifierConfig, KnnBayesClassifier, Posterior};
pub use error::{KnnBayesError, Result};
pub use primitives::{Point, Space};
