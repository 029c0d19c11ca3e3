//! # u-cvrp
//!
//! Capacitated vehicle routing: a validated problem model, precomputed
//! distance oracles, a capacity dimension installed on a pluggable routing
//! engine, cheapest-arc first-solution construction, and route reporting.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Coordinate, DemandTable, Vehicle, ProblemModel, Assignment, Route)
//! - [`distance`] — Block and great-circle metrics, dense distance matrix
//! - [`engine`] — Routing engine trait, dimensions, path-cheapest-arc engine
//! - [`constraint`] — Vehicle capacity as a cumulative dimension
//! - [`solver`] — Route construction and the end-to-end pipeline
//! - [`report`] — Per-vehicle routes, loads, distances and text rendering
//! - [`ingest`] — CSV records of locations and demands
//! - [`config`] — JSON solve configuration
//! - [`sample`] — Built-in city-block instance
//!
//! ## Example
//!
//! ```
//! use u_cvrp::distance::Metric;
//! use u_cvrp::engine::SearchParameters;
//! use u_cvrp::models::{Coordinate, ProblemModel};
//! use u_cvrp::solver::plan;
//!
//! let model = ProblemModel::build(
//!     vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0), Coordinate::new(2.0, 0.0)],
//!     vec![0.0, 5.0, 5.0],
//!     1,
//!     0,
//!     vec![10.0],
//! )
//! .unwrap();
//! let report = plan(&model, Metric::Block, &SearchParameters::default()).unwrap();
//! assert_eq!(report.total_distance(), 4.0);
//! ```

pub mod config;
pub mod constraint;
pub mod distance;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod models;
pub mod report;
pub mod sample;
pub mod solver;

pub use error::{ModelViolation, Result, RoutingError};
