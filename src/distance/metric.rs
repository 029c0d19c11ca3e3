//! Distance metrics over coordinates.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};
use crate::models::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// How travel cost between two coordinates is measured.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::Metric;
/// use u_cvrp::models::Coordinate;
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(3.0, 4.0);
/// assert_eq!(Metric::Block.distance(a, b).unwrap(), 7.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Sum of absolute component differences (Manhattan).
    #[default]
    Block,
    /// Haversine surface distance over (latitude, longitude) degrees, in km.
    GreatCircle,
}

impl Metric {
    /// Distance from `a` to `b`.
    ///
    /// Fails with [`RoutingError::InvalidCoordinate`] if either coordinate
    /// has a non-finite component.
    pub fn distance(&self, a: Coordinate, b: Coordinate) -> Result<f64> {
        for c in [a, b] {
            if !c.is_finite() {
                return Err(RoutingError::InvalidCoordinate {
                    location: None,
                    x: c.x(),
                    y: c.y(),
                });
            }
        }
        Ok(self.distance_unchecked(a, b))
    }

    /// Distance for coordinates already known to be finite.
    pub(crate) fn distance_unchecked(&self, a: Coordinate, b: Coordinate) -> f64 {
        match self {
            Metric::Block => block(a, b),
            Metric::GreatCircle => haversine(a, b),
        }
    }
}

fn block(a: Coordinate, b: Coordinate) -> f64 {
    (a.x() - b.x()).abs() + (a.y() - b.y()).abs()
}

fn haversine(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude() - a.longitude()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h a hair past 1 for antipodal points.
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();
    EARTH_RADIUS_KM * c
}
