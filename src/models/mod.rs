//! Domain model types for capacitated vehicle routing.
//!
//! Provides coordinates, the demand table, vehicles, the validated problem
//! model, the successor-pointer assignment produced by a routing engine, and
//! the routes decoded from it.

mod assignment;
mod coordinate;
mod demand;
mod problem;
mod route;
mod vehicle;

pub use assignment::{Assignment, SearchStats, Successor};
pub use coordinate::{BlockSize, Coordinate};
pub use demand::DemandTable;
pub use problem::ProblemModel;
pub use route::{Route, Visit};
pub use vehicle::Vehicle;
