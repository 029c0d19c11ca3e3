//! Error types for model construction and route construction.

use std::fmt;

/// The rule a [`ProblemModel`](crate::models::ProblemModel) or its inputs violated.
///
/// `build` checks the model rules in declaration order and reports only the
/// first violation. Distance matrix, dimension and assignment shapes are
/// checked when solving or reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelViolation {
    /// Location and demand counts differ.
    LengthMismatch {
        /// Number of locations.
        locations: usize,
        /// Number of demands.
        demands: usize,
    },
    /// The depot index does not address a location.
    DepotOutOfBounds {
        /// Requested depot index.
        depot_index: usize,
        /// Number of locations.
        locations: usize,
    },
    /// The number of capacities differs from the number of vehicles.
    CapacityCountMismatch {
        /// Declared vehicle count.
        num_vehicles: usize,
        /// Number of capacities supplied.
        capacities: usize,
    },
    /// A vehicle capacity is zero, negative, or not finite.
    NonPositiveCapacity {
        /// Offending vehicle.
        vehicle: usize,
        /// Its capacity.
        capacity: f64,
    },
    /// A demand is negative or not finite.
    InvalidDemand {
        /// Offending location.
        location: usize,
        /// Its demand.
        demand: f64,
    },
    /// A distance matrix does not cover exactly the model's locations.
    DistanceMatrixSize {
        /// Number of locations in the model.
        locations: usize,
        /// Size of the matrix.
        matrix: usize,
    },
    /// A dimension does not have one transit per location.
    DimensionSize {
        /// Dimension name.
        dimension: String,
        /// Number of transits supplied.
        transits: usize,
        /// Number of locations routed.
        locations: usize,
    },
    /// A dimension does not have one capacity per vehicle.
    DimensionCapacities {
        /// Dimension name.
        dimension: String,
        /// Number of capacities supplied.
        capacities: usize,
        /// Number of vehicles routed.
        vehicles: usize,
    },
    /// An assignment starts from a different depot than the model.
    AssignmentDepot {
        /// Model depot.
        depot: usize,
        /// Assignment depot.
        assignment: usize,
    },
    /// An assignment covers a different number of vehicles than the model.
    AssignmentVehicles {
        /// Model vehicle count.
        vehicles: usize,
        /// Vehicles in the assignment.
        assignment: usize,
    },
    /// An assignment covers a different number of locations than the model.
    AssignmentLocations {
        /// Model location count.
        locations: usize,
        /// Locations in the assignment.
        assignment: usize,
    },
}

impl fmt::Display for ModelViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelViolation::LengthMismatch { locations, demands } => write!(
                f,
                "{} locations but {} demands",
                locations, demands
            ),
            ModelViolation::DepotOutOfBounds {
                depot_index,
                locations,
            } => write!(
                f,
                "depot index {} is out of bounds for {} locations",
                depot_index, locations
            ),
            ModelViolation::CapacityCountMismatch {
                num_vehicles,
                capacities,
            } => write!(
                f,
                "{} vehicles but {} capacities",
                num_vehicles, capacities
            ),
            ModelViolation::NonPositiveCapacity { vehicle, capacity } => write!(
                f,
                "vehicle {} has non-positive capacity {}",
                vehicle, capacity
            ),
            ModelViolation::InvalidDemand { location, demand } => write!(
                f,
                "location {} has invalid demand {}",
                location, demand
            ),
            ModelViolation::DistanceMatrixSize { locations, matrix } => write!(
                f,
                "distance matrix covers {} locations but the model has {}",
                matrix, locations
            ),
            ModelViolation::DimensionSize {
                dimension,
                transits,
                locations,
            } => write!(
                f,
                "dimension {} has {} transits for {} locations",
                dimension, transits, locations
            ),
            ModelViolation::DimensionCapacities {
                dimension,
                capacities,
                vehicles,
            } => write!(
                f,
                "dimension {} has {} capacities for {} vehicles",
                dimension, capacities, vehicles
            ),
            ModelViolation::AssignmentDepot { depot, assignment } => write!(
                f,
                "assignment starts at location {} but the depot is {}",
                assignment, depot
            ),
            ModelViolation::AssignmentVehicles {
                vehicles,
                assignment,
            } => write!(
                f,
                "assignment covers {} vehicles but the model has {}",
                assignment, vehicles
            ),
            ModelViolation::AssignmentLocations {
                locations,
                assignment,
            } => write!(
                f,
                "assignment covers {} locations but the model has {}",
                assignment, locations
            ),
        }
    }
}

/// Errors raised while building a problem or constructing routes.
///
/// Everything except [`RoutingError::Infeasible`] is an input problem detected
/// before any search work starts.
#[derive(Debug, Clone, PartialEq)]
pub enum RoutingError {
    /// A coordinate component is NaN or infinite.
    InvalidCoordinate {
        /// Location index, when the coordinate belongs to a model.
        location: Option<usize>,
        /// First component (x or latitude).
        x: f64,
        /// Second component (y or longitude).
        y: f64,
    },
    /// A demand table does not have one entry per location.
    DemandLocationMismatch {
        /// Number of locations.
        locations: usize,
        /// Number of demands.
        demands: usize,
    },
    /// The problem model failed validation.
    InvalidProblemModel(ModelViolation),
    /// The fleet could not serve every location without exceeding a capacity.
    Infeasible {
        /// Locations left unserved once every vehicle was filled, ascending.
        unserved: Vec<usize>,
        /// Sum of the unserved demand.
        unserved_demand: f64,
    },
}

impl RoutingError {
    /// Returns `true` for a capacity shortage found by the search.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, RoutingError::Infeasible { .. })
    }

    /// Returns `true` for errors caused by malformed input.
    pub fn is_invalid_input(&self) -> bool {
        !self.is_infeasible()
    }
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingError::InvalidCoordinate {
                location: Some(location),
                x,
                y,
            } => write!(
                f,
                "location {} has non-finite coordinate ({}, {})",
                location, x, y
            ),
            RoutingError::InvalidCoordinate { location: None, x, y } => {
                write!(f, "non-finite coordinate ({}, {})", x, y)
            }
            RoutingError::DemandLocationMismatch { locations, demands } => write!(
                f,
                "demand table has {} entries for {} locations",
                demands, locations
            ),
            RoutingError::InvalidProblemModel(violation) => {
                write!(f, "invalid problem model: {}", violation)
            }
            RoutingError::Infeasible {
                unserved,
                unserved_demand,
            } => write!(
                f,
                "infeasible: {} locations with total demand {} could not be served",
                unserved.len(),
                unserved_demand
            ),
        }
    }
}

impl std::error::Error for RoutingError {}

impl From<ModelViolation> for RoutingError {
    fn from(violation: ModelViolation) -> Self {
        RoutingError::InvalidProblemModel(violation)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;
