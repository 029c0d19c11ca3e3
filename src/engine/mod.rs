//! Routing engine interface and the built-in construction engine.
//!
//! A routing engine is configured with an arc-cost evaluator and any number
//! of cumulative [`Dimension`]s, then asked for an [`Assignment`]. The search
//! itself is pluggable behind [`RoutingEngine`]; this crate ships
//! [`CheapestArcEngine`], which runs the first-solution heuristic only.
//!
//! - [`RoutingEngine`] — configuration and solve interface
//! - [`ArcCostEvaluator`] — travel cost between two nodes
//! - [`Dimension`] — bounded cumulative quantity (load, time, ...)
//! - [`CheapestArcEngine`] — path-cheapest-arc construction, O(n²·v)

mod cheapest_arc;
mod dimension;
mod parameters;

pub use cheapest_arc::CheapestArcEngine;
pub use dimension::Dimension;
pub use parameters::{FirstSolutionStrategy, SearchParameters};

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::Assignment;

/// Cost of travelling directly from one node to another.
pub trait ArcCostEvaluator {
    /// Cost of the arc `from -> to`.
    fn arc_cost(&self, from: usize, to: usize) -> f64;

    /// Number of nodes the evaluator can price.
    fn num_nodes(&self) -> usize;
}

impl ArcCostEvaluator for DistanceMatrix {
    fn arc_cost(&self, from: usize, to: usize) -> f64 {
        self.get(from, to)
    }

    fn num_nodes(&self) -> usize {
        self.size()
    }
}

/// A search engine that turns a configured routing model into an assignment.
///
/// Dimensions registered with [`add_dimension`](Self::add_dimension) are hard
/// constraints: an engine must never return an assignment that breaks one.
pub trait RoutingEngine<'a> {
    /// Uses `evaluator` as the cost of every arc, for every vehicle.
    fn set_arc_cost_evaluator(&mut self, evaluator: &'a dyn ArcCostEvaluator);

    /// Registers a cumulative dimension and returns its index.
    fn add_dimension(&mut self, dimension: Dimension) -> usize;

    /// Runs the search.
    ///
    /// Fails with [`RoutingError::Infeasible`](crate::error::RoutingError::Infeasible)
    /// if some location cannot be served, and with
    /// [`RoutingError::InvalidProblemModel`](crate::error::RoutingError::InvalidProblemModel)
    /// if the evaluator or a dimension does not match the routed nodes and vehicles.
    fn solve_with_parameters(&self, parameters: &SearchParameters) -> Result<Assignment>;
}
