//! Successor-pointer assignment produced by a routing engine.

use serde::Serialize;

/// Where a vehicle goes after a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Successor {
    /// Travel on to this location.
    Location(usize),
    /// Return to the depot; the route is over.
    End,
}

/// Counters collected while constructing an assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Arc-cost lookups performed.
    pub arc_evaluations: u64,
    /// Candidates skipped because they would overflow a dimension.
    pub capacity_rejections: u64,
}

/// For every vehicle, the successor of each location it visits.
///
/// Each vehicle's chain starts at the depot and ends with
/// [`Successor::End`]. A location appears in at most one chain.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Assignment, Successor};
///
/// let a = Assignment::from_routes(0, 4, &[vec![2, 1], vec![3]]).unwrap();
/// assert_eq!(a.next(0, 0), Some(Successor::Location(2)));
/// assert_eq!(a.next(0, 1), Some(Successor::End));
/// assert_eq!(a.route(1), vec![0, 3, 0]);
/// assert_eq!(a.vehicle_of(1), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    depot: usize,
    num_locations: usize,
    next: Vec<Vec<Option<Successor>>>,
    stats: SearchStats,
}

impl Assignment {
    /// An assignment where every vehicle stays at the depot.
    pub(crate) fn idle(depot: usize, num_locations: usize, num_vehicles: usize) -> Self {
        let mut next = vec![vec![None; num_locations]; num_vehicles];
        for row in &mut next {
            row[depot] = Some(Successor::End);
        }
        Self {
            depot,
            num_locations,
            next,
            stats: SearchStats::default(),
        }
    }

    /// Sets `vehicle`'s route to visit `customers` in order.
    pub(crate) fn set_route(&mut self, vehicle: usize, customers: &[usize]) {
        let row = &mut self.next[vehicle];
        let mut prev = self.depot;
        for &c in customers {
            row[prev] = Some(Successor::Location(c));
            prev = c;
        }
        row[prev] = Some(Successor::End);
    }

    pub(crate) fn with_stats(mut self, stats: SearchStats) -> Self {
        self.stats = stats;
        self
    }

    /// Builds an assignment from per-vehicle customer sequences (depot excluded).
    ///
    /// Returns `None` if a sequence names the depot, an out-of-range
    /// location, or a location already used.
    pub fn from_routes(depot: usize, num_locations: usize, routes: &[Vec<usize>]) -> Option<Self> {
        if depot >= num_locations {
            return None;
        }
        let mut seen = vec![false; num_locations];
        seen[depot] = true;
        for &c in routes.iter().flatten() {
            if c >= num_locations || seen[c] {
                return None;
            }
            seen[c] = true;
        }

        let mut assignment = Self::idle(depot, num_locations, routes.len());
        for (vehicle, customers) in routes.iter().enumerate() {
            assignment.set_route(vehicle, customers);
        }
        Some(assignment)
    }

    /// Depot location index.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Number of locations covered, depot included.
    pub fn num_locations(&self) -> usize {
        self.num_locations
    }

    /// Number of vehicles covered.
    pub fn num_vehicles(&self) -> usize {
        self.next.len()
    }

    /// Location where `vehicle` starts (the depot).
    pub fn start(&self, _vehicle: usize) -> usize {
        self.depot
    }

    /// Successor of `location` on `vehicle`'s route, or `None` if the
    /// vehicle does not visit it.
    pub fn next(&self, vehicle: usize, location: usize) -> Option<Successor> {
        self.next
            .get(vehicle)
            .and_then(|row| row.get(location))
            .copied()
            .flatten()
    }

    /// Walks `vehicle`'s chain: depot, visited locations, depot.
    pub fn route(&self, vehicle: usize) -> Vec<usize> {
        let mut path = vec![self.start(vehicle)];
        let mut current = self.start(vehicle);
        // Chains are acyclic by construction; the bound only guards the walk.
        let limit = self.next.get(vehicle).map_or(0, |row| row.len());
        for _ in 0..=limit {
            match self.next(vehicle, current) {
                Some(Successor::Location(l)) => {
                    path.push(l);
                    current = l;
                }
                Some(Successor::End) | None => break,
            }
        }
        path.push(self.depot);
        path
    }

    /// Vehicle serving `location`, if any. The depot is served by none.
    pub fn vehicle_of(&self, location: usize) -> Option<usize> {
        if location == self.depot {
            return None;
        }
        (0..self.next.len()).find(|&v| self.next(v, location).is_some())
    }

    /// Construction counters.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
