//! Validated CVRP problem model.

use serde::Serialize;
use tracing::{info, warn};

use super::{Coordinate, DemandTable, Vehicle};
use crate::distance::{DistanceMatrix, Metric};
use crate::error::{ModelViolation, Result, RoutingError};

/// Locations, demands, fleet and depot of one CVRP instance.
///
/// Built once per solve and immutable afterwards. All validation happens in
/// [`ProblemModel::build`], so a model that exists is always consistent.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Coordinate, ProblemModel};
///
/// let model = ProblemModel::build(
///     vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0)],
///     vec![0.0, 5.0],
///     1,
///     0,
///     vec![10.0],
/// )
/// .unwrap();
/// assert_eq!(model.num_locations(), 2);
/// assert_eq!(model.customers().collect::<Vec<_>>(), vec![1]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblemModel {
    locations: Vec<Coordinate>,
    demands: DemandTable,
    vehicles: Vec<Vehicle>,
    depot: usize,
}

impl ProblemModel {
    /// Validates the inputs and assembles a model.
    ///
    /// Checks run in this order and the first failure is returned:
    /// location/demand count, depot bounds, capacity count, capacity
    /// positivity, demand validity, coordinate finiteness.
    pub fn build(
        locations: Vec<Coordinate>,
        demands: Vec<f64>,
        num_vehicles: usize,
        depot_index: usize,
        vehicle_capacities: Vec<f64>,
    ) -> Result<Self> {
        if locations.len() != demands.len() {
            return Err(ModelViolation::LengthMismatch {
                locations: locations.len(),
                demands: demands.len(),
            }
            .into());
        }
        if depot_index >= locations.len() {
            return Err(ModelViolation::DepotOutOfBounds {
                depot_index,
                locations: locations.len(),
            }
            .into());
        }
        if vehicle_capacities.len() != num_vehicles {
            return Err(ModelViolation::CapacityCountMismatch {
                num_vehicles,
                capacities: vehicle_capacities.len(),
            }
            .into());
        }
        if let Some((vehicle, &capacity)) = vehicle_capacities
            .iter()
            .enumerate()
            .find(|(_, c)| !(c.is_finite() && **c > 0.0))
        {
            return Err(ModelViolation::NonPositiveCapacity { vehicle, capacity }.into());
        }
        if let Some((location, &demand)) = demands
            .iter()
            .enumerate()
            .find(|(_, d)| !(d.is_finite() && **d >= 0.0))
        {
            return Err(ModelViolation::InvalidDemand { location, demand }.into());
        }
        if let Some((idx, c)) = locations.iter().enumerate().find(|(_, c)| !c.is_finite()) {
            return Err(RoutingError::InvalidCoordinate {
                location: Some(idx),
                x: c.x(),
                y: c.y(),
            });
        }

        if demands[depot_index] != 0.0 {
            warn!(
                depot = depot_index,
                demand = demands[depot_index],
                "depot demand is not zero; it is excluded from capacity accounting"
            );
        }

        // Lengths agree by now; `DemandLocationMismatch` is only seen by
        // direct `DemandTable` callers.
        let demands = DemandTable::for_locations(demands, locations.len())?;
        let vehicles = vehicle_capacities
            .into_iter()
            .enumerate()
            .map(|(id, capacity)| Vehicle::new(id, capacity))
            .collect::<Vec<_>>();

        info!(
            locations = locations.len(),
            vehicles = vehicles.len(),
            depot = depot_index,
            total_demand = demands.total(),
            "problem model built"
        );

        Ok(Self {
            locations,
            demands,
            vehicles,
            depot: depot_index,
        })
    }

    /// All locations, depot included.
    pub fn locations(&self) -> &[Coordinate] {
        &self.locations
    }

    /// Number of locations, depot included.
    pub fn num_locations(&self) -> usize {
        self.locations.len()
    }

    /// The demand table.
    pub fn demands(&self) -> &DemandTable {
        &self.demands
    }

    /// Load picked up when visiting `location`; always zero at the depot.
    pub fn load_at(&self, location: usize) -> f64 {
        if location == self.depot {
            0.0
        } else {
            self.demands.demand(location)
        }
    }

    /// The fleet.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Number of vehicles.
    pub fn num_vehicles(&self) -> usize {
        self.vehicles.len()
    }

    /// Depot location index.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Non-depot location indices in ascending order.
    pub fn customers(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.locations.len()).filter(move |&i| i != self.depot)
    }

    /// Demand of all non-depot locations.
    pub fn total_demand(&self) -> f64 {
        self.customers().map(|i| self.demands.demand(i)).sum()
    }

    /// Sum of all vehicle capacities.
    pub fn total_capacity(&self) -> f64 {
        self.vehicles.iter().map(|v| v.capacity()).sum()
    }

    /// Precomputes the distance matrix over this model's locations.
    pub fn distance_matrix(&self, metric: Metric) -> Result<DistanceMatrix> {
        DistanceMatrix::from_coordinates(metric, &self.locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(n: usize) -> Vec<Coordinate> {
        (0..n).map(|i| Coordinate::new(i as f64, 0.0)).collect()
    }

    fn violation(err: RoutingError) -> ModelViolation {
        match err {
            RoutingError::InvalidProblemModel(v) => v,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_build_valid() {
        let model = ProblemModel::build(coords(3), vec![0.0, 5.0, 5.0], 2, 0, vec![10.0, 4.0])
            .expect("valid");
        assert_eq!(model.num_locations(), 3);
        assert_eq!(model.num_vehicles(), 2);
        assert_eq!(model.vehicles()[1].capacity(), 4.0);
        assert_eq!(model.depot(), 0);
        assert_eq!(model.total_demand(), 10.0);
        assert_eq!(model.total_capacity(), 14.0);
    }

    #[test]
    fn test_length_mismatch_checked_first() {
        // Every rule is broken; the length mismatch wins.
        let err = ProblemModel::build(coords(3), vec![0.0], 2, 9, vec![-1.0]).unwrap_err();
        assert!(matches!(
            violation(err),
            ModelViolation::LengthMismatch {
                locations: 3,
                demands: 1
            }
        ));
    }

    #[test]
    fn test_depot_bounds_before_capacity_count() {
        let err = ProblemModel::build(coords(2), vec![0.0, 1.0], 2, 2, vec![1.0]).unwrap_err();
        assert!(matches!(
            violation(err),
            ModelViolation::DepotOutOfBounds { depot_index: 2, .. }
        ));
    }

    #[test]
    fn test_capacity_count_before_positivity() {
        let err = ProblemModel::build(coords(2), vec![0.0, 1.0], 2, 0, vec![0.0]).unwrap_err();
        assert!(matches!(
            violation(err),
            ModelViolation::CapacityCountMismatch {
                num_vehicles: 2,
                capacities: 1
            }
        ));
    }

    #[test]
    fn test_non_positive_capacity() {
        let err =
            ProblemModel::build(coords(2), vec![0.0, 1.0], 2, 0, vec![3.0, 0.0]).unwrap_err();
        assert!(matches!(
            violation(err),
            ModelViolation::NonPositiveCapacity { vehicle: 1, .. }
        ));

        let err =
            ProblemModel::build(coords(2), vec![0.0, 1.0], 1, 0, vec![f64::NAN]).unwrap_err();
        assert!(matches!(
            violation(err),
            ModelViolation::NonPositiveCapacity { vehicle: 0, .. }
        ));
    }

    #[test]
    fn test_invalid_demand() {
        let err = ProblemModel::build(coords(3), vec![0.0, 1.0, -2.0], 1, 0, vec![3.0])
            .unwrap_err();
        assert!(matches!(
            violation(err),
            ModelViolation::InvalidDemand { location: 2, .. }
        ));
    }

    #[test]
    fn test_invalid_coordinate() {
        let mut locations = coords(3);
        locations[1] = Coordinate::new(0.0, f64::INFINITY);
        let err = ProblemModel::build(locations, vec![0.0, 1.0, 1.0], 1, 0, vec![3.0])
            .unwrap_err();
        assert!(matches!(
            err,
            RoutingError::InvalidCoordinate {
                location: Some(1),
                ..
            }
        ));
    }

    #[test]
    fn test_depot_not_first() {
        let model = ProblemModel::build(coords(3), vec![2.0, 7.0, 1.0], 1, 1, vec![5.0])
            .expect("valid");
        assert_eq!(model.customers().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(model.load_at(1), 0.0);
        assert_eq!(model.load_at(0), 2.0);
        assert_eq!(model.total_demand(), 3.0);
    }

    #[test]
    fn test_zero_vehicles_is_valid_model() {
        let model = ProblemModel::build(coords(1), vec![0.0], 0, 0, vec![]).expect("valid");
        assert_eq!(model.num_vehicles(), 0);
        assert_eq!(model.customers().count(), 0);
    }

    #[test]
    fn test_distance_matrix() {
        let model = ProblemModel::build(coords(3), vec![0.0; 3], 1, 0, vec![1.0]).expect("valid");
        let dm = model.distance_matrix(Metric::Block).expect("finite");
        assert_eq!(dm.get(0, 2), 2.0);
    }
}
