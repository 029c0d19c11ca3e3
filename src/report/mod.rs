//! Decoding an assignment into routes, loads and distances.
//!
//! - [`report`] — walks every vehicle's successor chain
//! - [`render_text`] — console layout of a [`Report`]

mod render;

pub use render::render_text;

use serde::Serialize;

use crate::distance::{DistanceMatrix, Metric};
use crate::error::{ModelViolation, Result};
use crate::models::{Assignment, ProblemModel, Route, Visit};

/// Routes of the whole fleet with their totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    routes: Vec<Route>,
    total_distance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    metric: Option<Metric>,
}

impl Report {
    /// One route per vehicle, in vehicle order, idle vehicles included.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Routes of vehicles that left the depot.
    pub fn active_routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().filter(|r| !r.is_idle())
    }

    /// Sum of all route distances.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Sum of all final route loads.
    pub fn total_load(&self) -> f64 {
        self.routes.iter().map(|r| r.total_load()).sum()
    }

    /// Metric the distances were measured with, if known.
    pub fn metric(&self) -> Option<Metric> {
        self.metric
    }
}

/// Reduces `assignment` to per-vehicle routes using the same `distances`
/// that planned it.
///
/// For each vehicle the chain is walked from the depot to the end sentinel,
/// accumulating the load picked up and the distance travelled. No search
/// is performed.
///
/// Fails with `InvalidProblemModel` when `distances` or `assignment` does
/// not match the model's locations, vehicles or depot.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::Metric;
/// use u_cvrp::models::{Assignment, Coordinate, ProblemModel};
/// use u_cvrp::report::report;
///
/// let model = ProblemModel::build(
///     vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0), Coordinate::new(2.0, 0.0)],
///     vec![0.0, 5.0, 5.0],
///     1,
///     0,
///     vec![10.0],
/// )
/// .unwrap();
/// let dm = model.distance_matrix(Metric::Block).unwrap();
/// let assignment = Assignment::from_routes(0, 3, &[vec![1, 2]]).unwrap();
///
/// let r = report(&model, &dm, &assignment).unwrap();
/// assert_eq!(r.routes()[0].locations(), vec![0, 1, 2, 0]);
/// assert_eq!(r.routes()[0].total_load(), 10.0);
/// assert_eq!(r.total_distance(), 4.0);
/// ```
pub fn report(
    model: &ProblemModel,
    distances: &DistanceMatrix,
    assignment: &Assignment,
) -> Result<Report> {
    if distances.size() != model.num_locations() {
        return Err(ModelViolation::DistanceMatrixSize {
            locations: model.num_locations(),
            matrix: distances.size(),
        }
        .into());
    }
    if assignment.depot() != model.depot() {
        return Err(ModelViolation::AssignmentDepot {
            depot: model.depot(),
            assignment: assignment.depot(),
        }
        .into());
    }
    if assignment.num_vehicles() != model.num_vehicles() {
        return Err(ModelViolation::AssignmentVehicles {
            vehicles: model.num_vehicles(),
            assignment: assignment.num_vehicles(),
        }
        .into());
    }
    if assignment.num_locations() != model.num_locations() {
        return Err(ModelViolation::AssignmentLocations {
            locations: model.num_locations(),
            assignment: assignment.num_locations(),
        }
        .into());
    }

    let mut routes = Vec::with_capacity(model.num_vehicles());
    for vehicle in 0..model.num_vehicles() {
        let mut route = Route::new(vehicle);
        let mut load = 0.0;
        let mut distance = 0.0;
        let mut prev: Option<usize> = None;

        for location in assignment.route(vehicle) {
            if let Some(p) = prev {
                distance += distances.get(p, location);
            }
            // The closing depot visit adds nothing.
            load += model.load_at(location);
            route.push_visit(Visit {
                location,
                load,
                distance,
            });
            prev = Some(location);
        }
        routes.push(route);
    }

    let total_distance = routes.iter().map(|r| r.total_distance()).sum();
    Ok(Report {
        routes,
        total_distance,
        metric: distances.metric(),
    })
}
