//! Built-in sample instance.

use crate::error::Result;
use crate::models::{BlockSize, Coordinate, ProblemModel};

/// Raw inputs of a problem, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// All locations, depot included.
    pub locations: Vec<Coordinate>,
    /// Demand per location.
    pub demands: Vec<f64>,
    /// One capacity per vehicle.
    pub vehicle_capacities: Vec<f64>,
    /// Depot location index.
    pub depot_index: usize,
}

impl Instance {
    /// Validates the inputs into a [`ProblemModel`].
    pub fn into_model(self) -> Result<ProblemModel> {
        let num_vehicles = self.vehicle_capacities.len();
        ProblemModel::build(
            self.locations,
            self.demands,
            num_vehicles,
            self.depot_index,
            self.vehicle_capacities,
        )
    }
}

const CITY_BLOCKS: [(f64, f64); 17] = [
    (4.0, 4.0),
    (2.0, 0.0),
    (8.0, 0.0),
    (0.0, 1.0),
    (1.0, 1.0),
    (5.0, 2.0),
    (7.0, 2.0),
    (3.0, 3.0),
    (6.0, 3.0),
    (5.0, 5.0),
    (8.0, 5.0),
    (1.0, 6.0),
    (2.0, 6.0),
    (3.0, 7.0),
    (6.0, 7.0),
    (0.0, 8.0),
    (7.0, 8.0),
];

const CITY_BLOCK_DEMANDS: [f64; 17] = [
    0.0, 1.0, 1.0, 2.0, 4.0, 2.0, 4.0, 8.0, 8.0, 1.0, 2.0, 1.0, 2.0, 4.0, 4.0, 8.0, 8.0,
];

/// Sixteen customers on a city grid served from a depot at block (4, 4) by
/// four vehicles of capacity 15.
///
/// Block positions are scaled by [`BlockSize::city_block`], so distances are
/// in metres under [`Metric::Block`](crate::distance::Metric::Block).
///
/// # Examples
///
/// ```
/// use u_cvrp::sample::city_blocks;
///
/// let instance = city_blocks();
/// assert_eq!(instance.locations.len(), 17);
/// assert_eq!(instance.vehicle_capacities, vec![15.0; 4]);
/// ```
pub fn city_blocks() -> Instance {
    let block = BlockSize::city_block();
    Instance {
        locations: CITY_BLOCKS
            .iter()
            .map(|&p| Coordinate::from(p).scaled(block))
            .collect(),
        demands: CITY_BLOCK_DEMANDS.to_vec(),
        vehicle_capacities: vec![15.0; 4],
        depot_index: 0,
    }
}
