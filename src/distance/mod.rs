//! Distance oracle: metrics and the precomputed distance matrix.
//!
//! - [`Metric`] — Block (Manhattan) or great-circle (haversine) distance
//! - [`DistanceMatrix`] — Dense matrix built once, queried in O(1)

mod matrix;
mod metric;

pub use matrix::DistanceMatrix;
pub use metric::{Metric, EARTH_RADIUS_KM};
