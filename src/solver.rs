//! Route construction: wires a problem model into a routing engine.
//!
//! [`solve`] configures a [`CheapestArcEngine`] with the distance matrix as
//! arc-cost evaluator and the capacity dimension as a hard side constraint,
//! then asks it for a first solution. [`plan`] runs the whole pipeline from a
//! model to a [`Report`].

use tracing::info;

use crate::constraint::CapacityDimension;
use crate::distance::{DistanceMatrix, Metric};
use crate::engine::{CheapestArcEngine, RoutingEngine, SearchParameters};
use crate::error::{ModelViolation, Result};
use crate::models::{Assignment, ProblemModel};
use crate::report::{report, Report};

/// Constructs an assignment serving every non-depot location exactly once.
///
/// Fails with [`RoutingError::Infeasible`](crate::error::RoutingError::Infeasible)
/// when the fleet cannot carry all demand. Never returns a partial
/// assignment.
///
/// # Examples
///
/// ```
/// use u_cvrp::constraint::CapacityDimension;
/// use u_cvrp::distance::Metric;
/// use u_cvrp::engine::SearchParameters;
/// use u_cvrp::models::{Coordinate, ProblemModel};
/// use u_cvrp::solver::solve;
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
/// let capacity = CapacityDimension::new(&model);
///
/// let assignment = solve(&model, &dm, &capacity, &SearchParameters::default()).unwrap();
/// assert_eq!(assignment.route(0), vec![0, 1, 2, 0]);
/// ```
pub fn solve(
    model: &ProblemModel,
    distances: &DistanceMatrix,
    capacity: &CapacityDimension,
    parameters: &SearchParameters,
) -> Result<Assignment> {
    if distances.size() != model.num_locations() {
        return Err(ModelViolation::DistanceMatrixSize {
            locations: model.num_locations(),
            matrix: distances.size(),
        }
        .into());
    }

    info!(
        locations = model.num_locations(),
        vehicles = model.num_vehicles(),
        strategy = ?parameters.first_solution_strategy,
        "solving"
    );

    let mut engine = CheapestArcEngine::for_model(model, distances);
    capacity.install(&mut engine);
    engine.solve_with_parameters(parameters)
}

/// Builds the distance matrix, constructs routes, and reports them.
pub fn plan(model: &ProblemModel, metric: Metric, parameters: &SearchParameters) -> Result<Report> {
    let distances = model.distance_matrix(metric)?;
    let capacity = CapacityDimension::new(model);
    let assignment = solve(model, &distances, &capacity, parameters)?;
    let report = report(model, &distances, &assignment)?;
    info!(
        total_distance = report.total_distance(),
        routes = report.active_routes().count(),
        "routes planned"
    );
    Ok(report)
}
