//! Search parameters.

use serde::{Deserialize, Serialize};

/// Heuristic used to build the first feasible route set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstSolutionStrategy {
    /// Extend each route with the cheapest feasible arc from its end.
    #[default]
    PathCheapestArc,
}

/// Parameters handed to [`RoutingEngine::solve_with_parameters`](super::RoutingEngine::solve_with_parameters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchParameters {
    /// Construction heuristic.
    #[serde(default)]
    pub first_solution_strategy: FirstSolutionStrategy,
}

impl SearchParameters {
    /// Parameters using the given construction heuristic.
    pub fn with_strategy(first_solution_strategy: FirstSolutionStrategy) -> Self {
        Self {
            first_solution_strategy,
        }
    }
}
