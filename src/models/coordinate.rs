//! Coordinate and block-size types.

use serde::{Deserialize, Serialize};

/// A point in the plane or on the sphere.
///
/// Under the block metric the components are `(x, y)`; under the
/// great-circle metric they are `(latitude, longitude)` in degrees.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::Coordinate;
///
/// let c = Coordinate::new(3.0, 4.0);
/// assert_eq!(c.x(), 3.0);
/// assert_eq!(c.y(), 4.0);
///
/// let pole = Coordinate::lat_lon(90.0, 0.0);
/// assert_eq!(pole.latitude(), 90.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    x: f64,
    y: f64,
}

impl Coordinate {
    /// Creates a planar coordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a geographic coordinate from degrees.
    pub fn lat_lon(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude)
    }

    /// First component.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Second component.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Latitude in degrees (alias of [`x`](Self::x)).
    pub fn latitude(&self) -> f64 {
        self.x
    }

    /// Longitude in degrees (alias of [`y`](Self::y)).
    pub fn longitude(&self) -> f64 {
        self.y
    }

    /// Returns `true` if both components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Converts block units into distance units.
    pub fn scaled(&self, block: BlockSize) -> Self {
        Self::new(self.x * block.width, self.y * block.height)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Dimensions of one city block, used to turn grid positions into distances.
///
/// Applied once when coordinates are ingested, never per distance query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockSize {
    /// Length of a block along x.
    pub width: f64,
    /// Length of a block along y.
    pub height: f64,
}

impl BlockSize {
    /// Creates a block size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// An average city block, 114 m by 80 m.
    pub fn city_block() -> Self {
        Self::new(114.0, 80.0)
    }
}
