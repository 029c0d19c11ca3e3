//! Vehicle capacity as a cumulative load dimension.

use crate::engine::{Dimension, RoutingEngine};
use crate::models::ProblemModel;

/// Name under which the load dimension is registered.
pub const CAPACITY_DIMENSION: &str = "Capacity";

/// Per-vehicle load limit expressed as a hard cumulative constraint.
///
/// The load starts at zero when a vehicle leaves the depot, grows by the
/// demand of every visited location with no slack, and may never exceed the
/// vehicle's capacity at any point along the route. Depot demand is never
/// counted.
///
/// # Examples
///
/// ```
/// use u_cvrp::constraint::CapacityDimension;
/// use u_cvrp::models::{Coordinate, ProblemModel};
///
/// let model = ProblemModel::build(
///     vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0), Coordinate::new(2.0, 0.0)],
///     vec![0.0, 5.0, 5.0],
///     1,
///     0,
///     vec![10.0],
/// )
/// .unwrap();
/// let capacity = CapacityDimension::new(&model);
/// assert!(capacity.is_feasible(0, &[1, 2]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityDimension {
    demands: Vec<f64>,
    capacities: Vec<f64>,
}

impl CapacityDimension {
    /// Derives the load dimension from `model`.
    pub fn new(model: &ProblemModel) -> Self {
        Self {
            demands: (0..model.num_locations()).map(|i| model.load_at(i)).collect(),
            capacities: model.vehicles().iter().map(|v| v.capacity()).collect(),
        }
    }

    /// Registers the dimension with `engine` and returns its index there.
    pub fn install<'a, E: RoutingEngine<'a>>(&self, engine: &mut E) -> usize {
        engine.add_dimension(self.to_dimension())
    }

    /// The engine-level dimension: zero slack, cumul fixed to zero at start.
    pub fn to_dimension(&self) -> Dimension {
        Dimension::new(
            CAPACITY_DIMENSION,
            self.demands.clone(),
            0.0,
            self.capacities.clone(),
            true,
        )
    }

    /// Capacity of `vehicle`.
    pub fn capacity(&self, vehicle: usize) -> f64 {
        self.capacities[vehicle]
    }

    /// Returns `true` if visiting `customers` in order keeps every prefix
    /// load within `vehicle`'s capacity.
    pub fn is_feasible(&self, vehicle: usize, customers: &[usize]) -> bool {
        let capacity = self.capacity(vehicle);
        let mut load = 0.0;
        customers.iter().all(|&c| {
            load += self.demands[c];
            load <= capacity
        })
    }
}
