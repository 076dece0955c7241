//! Core data primitives (Point, Space).
//!
//! A [`Space`] owns the labeled training points a classifier queries. Both
//! types are read-only once built: classification never reorders or mutates
//! them.

mod point;
mod space;

pub use point::Point;
pub use space::Space;
