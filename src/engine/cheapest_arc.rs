//! Path-cheapest-arc construction engine.
//!
//! Vehicles are filled one at a time in index order. Each route starts at
//! the depot and is repeatedly extended with the unvisited node whose arc
//! from the current route end is cheapest, among nodes that keep every
//! dimension within the vehicle's capacity. When no node fits, the route
//! closes back to the depot and the next vehicle continues with whatever is
//! still unvisited. Equal costs go to the lowest node index, so the result
//! is fully deterministic.
//!
//! # Complexity
//!
//! O(n² · d) per vehicle, where n = number of nodes and d = number of
//! dimensions.

use tracing::{debug, info};

use super::{ArcCostEvaluator, Dimension, FirstSolutionStrategy, RoutingEngine, SearchParameters};
use crate::error::{ModelViolation, Result, RoutingError};
use crate::models::{Assignment, ProblemModel, SearchStats};

/// Routing engine that returns the path-cheapest-arc first solution.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::engine::{CheapestArcEngine, Dimension, RoutingEngine, SearchParameters};
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 2.0,
///     1.0, 0.0, 1.0,
///     2.0, 1.0, 0.0,
/// ]).unwrap();
/// let mut engine = CheapestArcEngine::new(3, 1, 0, &dm);
/// engine.add_dimension(Dimension::new("Capacity", vec![0.0, 5.0, 5.0], 0.0, vec![10.0], true));
///
/// let assignment = engine.solve_with_parameters(&SearchParameters::default()).unwrap();
/// assert_eq!(assignment.route(0), vec![0, 1, 2, 0]);
/// ```
pub struct CheapestArcEngine<'a> {
    num_locations: usize,
    num_vehicles: usize,
    depot: usize,
    evaluator: &'a dyn ArcCostEvaluator,
    dimensions: Vec<Dimension>,
}

impl<'a> CheapestArcEngine<'a> {
    /// Creates an engine over `num_locations` nodes and `num_vehicles`
    /// vehicles, all based at `depot`.
    pub fn new(
        num_locations: usize,
        num_vehicles: usize,
        depot: usize,
        evaluator: &'a dyn ArcCostEvaluator,
    ) -> Self {
        Self {
            num_locations,
            num_vehicles,
            depot,
            evaluator,
            dimensions: Vec::new(),
        }
    }

    /// Creates an engine sized for `model`.
    pub fn for_model(model: &ProblemModel, evaluator: &'a dyn ArcCostEvaluator) -> Self {
        Self::new(
            model.num_locations(),
            model.num_vehicles(),
            model.depot(),
            evaluator,
        )
    }

    /// Registered dimensions, in registration order.
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    fn check_shapes(&self) -> Result<()> {
        let n = self.num_locations;
        if self.depot >= n {
            return Err(ModelViolation::DepotOutOfBounds {
                depot_index: self.depot,
                locations: n,
            }
            .into());
        }
        if self.evaluator.num_nodes() != n {
            return Err(ModelViolation::DistanceMatrixSize {
                locations: n,
                matrix: self.evaluator.num_nodes(),
            }
            .into());
        }
        for dim in &self.dimensions {
            if dim.num_nodes() != n {
                return Err(ModelViolation::DimensionSize {
                    dimension: dim.name().to_string(),
                    transits: dim.num_nodes(),
                    locations: n,
                }
                .into());
            }
            if dim.num_vehicles() != self.num_vehicles {
                return Err(ModelViolation::DimensionCapacities {
                    dimension: dim.name().to_string(),
                    capacities: dim.num_vehicles(),
                    vehicles: self.num_vehicles,
                }
                .into());
            }
        }
        Ok(())
    }

    fn fits(&self, vehicle: usize, cumuls: &[f64], node: usize) -> bool {
        self.dimensions
            .iter()
            .zip(cumuls)
            .all(|(dim, &cumul)| dim.try_visit(vehicle, cumul, node).is_some())
    }

    fn path_cheapest_arc(&self) -> Result<Assignment> {
        self.check_shapes()?;
        let n = self.num_locations;
        let mut assignment = Assignment::idle(self.depot, n, self.num_vehicles);
        let mut stats = SearchStats::default();

        let mut visited = vec![false; n];
        visited[self.depot] = true;
        let mut remaining = n.saturating_sub(1);

        for vehicle in 0..self.num_vehicles {
            if remaining == 0 {
                break;
            }

            let mut cumuls: Vec<f64> = self.dimensions.iter().map(|d| d.start_cumul()).collect();
            let mut current = self.depot;
            let mut route = Vec::new();

            loop {
                let mut best: Option<(usize, f64)> = None;
                for node in 0..n {
                    if visited[node] {
                        continue;
                    }
                    if !self.fits(vehicle, &cumuls, node) {
                        stats.capacity_rejections += 1;
                        continue;
                    }
                    let cost = self.evaluator.arc_cost(current, node);
                    stats.arc_evaluations += 1;
                    // Strict comparison keeps the lowest index on ties.
                    if best.map_or(true, |(_, c)| cost < c) {
                        best = Some((node, cost));
                    }
                }

                let Some((next, _)) = best else {
                    break;
                };
                for (dim, cumul) in self.dimensions.iter().zip(cumuls.iter_mut()) {
                    *cumul += dim.transit(next);
                }
                visited[next] = true;
                remaining -= 1;
                route.push(next);
                current = next;
            }

            debug!(vehicle, stops = route.len(), cumuls = ?cumuls, "route closed");
            assignment.set_route(vehicle, &route);
        }

        if remaining > 0 {
            let unserved: Vec<usize> = (0..n).filter(|&i| !visited[i]).collect();
            let unserved_demand = self
                .dimensions
                .first()
                .map_or(0.0, |d| d.total_transit(&unserved));
            info!(
                unserved = unserved.len(),
                unserved_demand, "construction left locations unserved"
            );
            return Err(RoutingError::Infeasible {
                unserved,
                unserved_demand,
            });
        }

        info!(
            vehicles = self.num_vehicles,
            arc_evaluations = stats.arc_evaluations,
            capacity_rejections = stats.capacity_rejections,
            "first solution constructed"
        );
        Ok(assignment.with_stats(stats))
    }
}

impl<'a> RoutingEngine<'a> for CheapestArcEngine<'a> {
    fn set_arc_cost_evaluator(&mut self, evaluator: &'a dyn ArcCostEvaluator) {
        self.evaluator = evaluator;
    }

    fn add_dimension(&mut self, dimension: Dimension) -> usize {
        self.dimensions.push(dimension);
        self.dimensions.len() - 1
    }

    fn solve_with_parameters(&self, parameters: &SearchParameters) -> Result<Assignment> {
        match parameters.first_solution_strategy {
            FirstSolutionStrategy::PathCheapestArc => self.path_cheapest_arc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{DistanceMatrix, Metric};
    use crate::models::Coordinate;

    fn line(n: usize) -> DistanceMatrix {
        let coords: Vec<Coordinate> = (0..n).map(|i| Coordinate::new(i as f64, 0.0)).collect();
        DistanceMatrix::from_coordinates(Metric::Block, &coords).expect("finite")
    }

    fn capacity(demands: Vec<f64>, capacities: Vec<f64>) -> Dimension {
        Dimension::new("Capacity", demands, 0.0, capacities, true)
    }

    #[test]
    fn test_single_vehicle_follows_line() {
        let dm = line(4);
        let mut engine = CheapestArcEngine::new(4, 1, 0, &dm);
        engine.add_dimension(capacity(vec![0.0, 1.0, 1.0, 1.0], vec![10.0]));
        let a = engine
            .solve_with_parameters(&SearchParameters::default())
            .expect("feasible");
        assert_eq!(a.route(0), vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        // Nodes 1 and 2 are both at distance 1 from the depot.
        let coords = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(1.0, 0.0),
        ];
        let dm = DistanceMatrix::from_coordinates(Metric::Block, &coords).expect("finite");
        let engine = CheapestArcEngine::new(3, 1, 0, &dm);
        let a = engine
            .solve_with_parameters(&SearchParameters::default())
            .expect("feasible");
        assert_eq!(a.route(0), vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_second_vehicle_takes_rest() {
        let dm = line(4);
        let mut engine = CheapestArcEngine::new(4, 2, 0, &dm);
        engine.add_dimension(capacity(vec![0.0, 5.0, 5.0, 5.0], vec![10.0, 10.0]));
        let a = engine
            .solve_with_parameters(&SearchParameters::default())
            .expect("feasible");
        assert_eq!(a.route(0), vec![0, 1, 2, 0]);
        assert_eq!(a.route(1), vec![0, 3, 0]);
    }

    #[test]
    fn test_skips_too_heavy_and_continues() {
        // Node 1 is nearest but too heavy for vehicle 0; vehicle 1 takes it.
        let dm = line(3);
        let mut engine = CheapestArcEngine::new(3, 2, 0, &dm);
        engine.add_dimension(capacity(vec![0.0, 8.0, 2.0], vec![5.0, 10.0]));
        let a = engine
            .solve_with_parameters(&SearchParameters::default())
            .expect("feasible");
        assert_eq!(a.route(0), vec![0, 2, 0]);
        assert_eq!(a.route(1), vec![0, 1, 0]);
        assert!(a.stats().capacity_rejections > 0);
    }

    #[test]
    fn test_idle_vehicles_stay_at_depot() {
        let dm = line(2);
        let mut engine = CheapestArcEngine::new(2, 3, 0, &dm);
        engine.add_dimension(capacity(vec![0.0, 1.0], vec![5.0, 5.0, 5.0]));
        let a = engine
            .solve_with_parameters(&SearchParameters::default())
            .expect("feasible");
        assert_eq!(a.route(0), vec![0, 1, 0]);
        assert_eq!(a.route(1), vec![0, 0]);
        assert_eq!(a.route(2), vec![0, 0]);
    }

    #[test]
    fn test_infeasible_reports_unserved() {
        let dm = line(3);
        let mut engine = CheapestArcEngine::new(3, 1, 0, &dm);
        engine.add_dimension(capacity(vec![0.0, 5.0, 5.0], vec![4.0]));
        let err = engine
            .solve_with_parameters(&SearchParameters::default())
            .unwrap_err();
        assert_eq!(
            err,
            RoutingError::Infeasible {
                unserved: vec![1, 2],
                unserved_demand: 10.0,
            }
        );
    }

    #[test]
    fn test_no_vehicles_with_customers_is_infeasible() {
        let dm = line(2);
        let engine = CheapestArcEngine::new(2, 0, 0, &dm);
        let err = engine
            .solve_with_parameters(&SearchParameters::default())
            .unwrap_err();
        assert!(err.is_infeasible());
    }

    #[test]
    fn test_depot_in_the_middle() {
        let dm = line(3);
        let engine = CheapestArcEngine::new(3, 1, 1, &dm);
        let a = engine
            .solve_with_parameters(&SearchParameters::default())
            .expect("feasible");
        assert_eq!(a.route(0), vec![1, 0, 2, 1]);
    }

    #[test]
    fn test_set_arc_cost_evaluator_replaces_costs() {
        let dm = line(3);
        // Reversed costs: from the depot, node 2 is now cheapest.
        let reversed =
            DistanceMatrix::from_data(3, vec![0.0, 9.0, 1.0, 9.0, 0.0, 1.0, 1.0, 1.0, 0.0])
                .expect("valid");
        let mut engine = CheapestArcEngine::new(3, 1, 0, &dm);
        engine.set_arc_cost_evaluator(&reversed);
        let a = engine
            .solve_with_parameters(&SearchParameters::default())
            .expect("feasible");
        assert_eq!(a.route(0), vec![0, 2, 1, 0]);
    }

    #[test]
    fn test_add_dimension_returns_index() {
        let dm = line(2);
        let mut engine = CheapestArcEngine::new(2, 1, 0, &dm);
        assert_eq!(engine.add_dimension(capacity(vec![0.0, 1.0], vec![1.0])), 0);
        assert_eq!(engine.add_dimension(capacity(vec![0.0, 1.0], vec![1.0])), 1);
        assert_eq!(engine.dimensions().len(), 2);
    }

    #[test]
    fn test_dimension_short_of_vehicles_is_rejected() {
        let dm = line(3);
        let mut engine = CheapestArcEngine::new(3, 2, 0, &dm);
        engine.add_dimension(capacity(vec![0.0, 1.0, 1.0], vec![4.0]));
        let err = engine
            .solve_with_parameters(&SearchParameters::default())
            .unwrap_err();
        assert_eq!(
            err,
            RoutingError::InvalidProblemModel(ModelViolation::DimensionCapacities {
                dimension: "Capacity".to_string(),
                capacities: 1,
                vehicles: 2,
            })
        );
    }

    #[test]
    fn test_dimension_short_of_nodes_is_rejected() {
        let dm = line(3);
        let mut engine = CheapestArcEngine::new(3, 1, 0, &dm);
        engine.add_dimension(capacity(vec![0.0, 1.0], vec![4.0]));
        let err = engine
            .solve_with_parameters(&SearchParameters::default())
            .unwrap_err();
        assert!(matches!(
            err,
            RoutingError::InvalidProblemModel(ModelViolation::DimensionSize {
                transits: 2,
                locations: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_small_evaluator_is_rejected() {
        let dm = line(2);
        let engine = CheapestArcEngine::new(4, 1, 0, &dm);
        let err = engine
            .solve_with_parameters(&SearchParameters::default())
            .unwrap_err();
        assert_eq!(
            err,
            RoutingError::InvalidProblemModel(ModelViolation::DistanceMatrixSize {
                locations: 4,
                matrix: 2,
            })
        );
    }

    #[test]
    fn test_depot_out_of_range_is_rejected() {
        let dm = line(2);
        let engine = CheapestArcEngine::new(2, 1, 5, &dm);
        let err = engine
            .solve_with_parameters(&SearchParameters::default())
            .unwrap_err();
        assert!(err.is_invalid_input());
    }
}
