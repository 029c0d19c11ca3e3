//! Route and visit types.

use serde::Serialize;

/// One stop along a route, with the running totals on departure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visit {
    /// Location index being visited.
    pub location: usize,
    /// Cumulative load after this visit.
    pub load: f64,
    /// Cumulative distance travelled to reach this visit.
    pub distance: f64,
}

/// The ordered stops of one vehicle, depot to depot.
///
/// The first and last visits are the depot; an idle vehicle has exactly
/// those two.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Route, Visit};
///
/// let mut route = Route::new(0);
/// route.push_visit(Visit { location: 0, load: 0.0, distance: 0.0 });
/// route.push_visit(Visit { location: 1, load: 5.0, distance: 1.0 });
/// route.push_visit(Visit { location: 0, load: 5.0, distance: 2.0 });
/// assert_eq!(route.locations(), vec![0, 1, 0]);
/// assert_eq!(route.customer_ids(), vec![1]);
/// assert_eq!(route.total_load(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    vehicle_id: usize,
    visits: Vec<Visit>,
}

impl Route {
    /// Creates an empty route for the given vehicle.
    pub fn new(vehicle_id: usize) -> Self {
        Self {
            vehicle_id,
            visits: Vec::new(),
        }
    }

    /// Appends a visit to the end of this route.
    pub fn push_visit(&mut self, visit: Visit) {
        self.visits.push(visit);
    }

    /// Returns the vehicle assigned to this route.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Returns the ordered sequence of visits, depot endpoints included.
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Location indices in visit order, depot endpoints included.
    pub fn locations(&self) -> Vec<usize> {
        self.visits.iter().map(|v| v.location).collect()
    }

    /// Location indices strictly between the depot endpoints.
    pub fn customer_ids(&self) -> Vec<usize> {
        let n = self.visits.len();
        if n <= 2 {
            return Vec::new();
        }
        self.visits[1..n - 1].iter().map(|v| v.location).collect()
    }

    /// Returns `true` if the vehicle never leaves the depot.
    pub fn is_idle(&self) -> bool {
        self.visits.len() <= 2
    }

    /// Total distance travelled, return leg included.
    pub fn total_distance(&self) -> f64 {
        self.visits.last().map_or(0.0, |v| v.distance)
    }

    /// Load carried when the route ends.
    pub fn total_load(&self) -> f64 {
        self.visits.last().map_or(0.0, |v| v.load)
    }
}
