//! Dense precomputed distance matrix.

use tracing::debug;

use super::Metric;
use crate::error::{Result, RoutingError};
use crate::models::Coordinate;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once from coordinates under one [`Metric`]; every later query is an
/// O(1) lookup. Route construction and reporting share the same matrix so
/// planned and reported distances always agree.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::{DistanceMatrix, Metric};
/// use u_cvrp::models::Coordinate;
///
/// let locations = vec![
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(3.0, 4.0),
///     Coordinate::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_coordinates(Metric::Block, &locations).unwrap();
/// assert_eq!(dm.get(0, 1), 7.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
    metric: Option<Metric>,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
            metric: None,
        }
    }

    /// Computes all pairwise distances between `locations` under `metric`.
    ///
    /// The diagonal is exactly zero. Fails with
    /// [`RoutingError::InvalidCoordinate`] naming the first non-finite location.
    pub fn from_coordinates(metric: Metric, locations: &[Coordinate]) -> Result<Self> {
        if let Some((idx, c)) = locations.iter().enumerate().find(|(_, c)| !c.is_finite()) {
            return Err(RoutingError::InvalidCoordinate {
                location: Some(idx),
                x: c.x(),
                y: c.y(),
            });
        }

        let n = locations.len();
        let mut dm = Self::new(n);
        dm.metric = Some(metric);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric.distance_unchecked(locations[i], locations[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        debug!(size = n, ?metric, "distance matrix computed");
        Ok(dm)
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size` or any
    /// entry is negative or not finite.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size || data.iter().any(|d| !d.is_finite() || *d < 0.0) {
            return None;
        }
        Some(Self {
            data,
            size,
            metric: None,
        })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The metric the matrix was computed with, if it came from coordinates.
    pub fn metric(&self) -> Option<Metric> {
        self.metric
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Sum of arc distances along `path`.
    pub fn path_length(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}
