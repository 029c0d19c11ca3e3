//! Vehicle type.

use serde::Serialize;

/// A vehicle of the fleet.
///
/// Every vehicle starts and ends its route at the problem's depot.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::Vehicle;
///
/// let v = Vehicle::new(0, 15.0);
/// assert_eq!(v.id(), 0);
/// assert_eq!(v.capacity(), 15.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    id: usize,
    capacity: f64,
}

impl Vehicle {
    /// Creates a vehicle with the given ID and capacity.
    pub fn new(id: usize, capacity: f64) -> Self {
        Self { id, capacity }
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum load capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }
}
