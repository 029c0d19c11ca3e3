//! Demand table.

use serde::Serialize;

use crate::error::{Result, RoutingError};

/// Capacity consumed by visiting each location, indexed like the locations.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::DemandTable;
///
/// let table = DemandTable::for_locations(vec![0.0, 5.0, 5.0], 3).unwrap();
/// assert_eq!(table.demand(1), 5.0);
/// assert_eq!(table.total(), 10.0);
///
/// assert!(DemandTable::for_locations(vec![0.0, 5.0], 3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandTable {
    demands: Vec<f64>,
}

impl DemandTable {
    /// Builds a table that must have exactly one entry per location.
    ///
    /// Fails with [`RoutingError::DemandLocationMismatch`] otherwise.
    pub fn for_locations(demands: Vec<f64>, num_locations: usize) -> Result<Self> {
        if demands.len() != num_locations {
            return Err(RoutingError::DemandLocationMismatch {
                locations: num_locations,
                demands: demands.len(),
            });
        }
        Ok(Self { demands })
    }

    /// Demand at `location`.
    ///
    /// # Panics
    ///
    /// Panics if `location` is out of bounds.
    pub fn demand(&self, location: usize) -> f64 {
        self.demands[location]
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.demands.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.demands.is_empty()
    }

    /// Sum of all demands.
    pub fn total(&self) -> f64 {
        self.demands.iter().sum()
    }

    /// All demands in location order.
    pub fn as_slice(&self) -> &[f64] {
        &self.demands
    }
}
