//! Side constraints installed on a routing engine.

mod capacity;

pub use capacity::{CapacityDimension, CAPACITY_DIMENSION};
