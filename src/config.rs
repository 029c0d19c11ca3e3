//! Solve configuration loaded from JSON.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::distance::Metric;
use crate::engine::{FirstSolutionStrategy, SearchParameters};
use crate::error;
use crate::ingest::{self, IngestOptions, Record};
use crate::models::{BlockSize, Coordinate, ProblemModel};

/// Everything needed to turn ingested records into a solved problem.
///
/// # Examples
///
/// ```
/// use u_cvrp::config::SolveConfig;
/// use u_cvrp::distance::Metric;
///
/// let config = SolveConfig::from_reader(
///     r#"{ "metric": "great_circle", "num_vehicles": 1, "vehicle_capacities": [500],
///          "depot": { "x": 90.0, "y": 0.0 }, "limit": 100 }"#.as_bytes(),
/// )
/// .unwrap();
/// assert_eq!(config.metric, Metric::GreatCircle);
/// assert_eq!(config.depot_index, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveConfig {
    /// Distance metric; the same one is used for planning and reporting.
    #[serde(default)]
    pub metric: Metric,
    /// Fleet size.
    pub num_vehicles: usize,
    /// One capacity per vehicle.
    pub vehicle_capacities: Vec<f64>,
    /// Depot index among the records. Ignored when `depot` is given, since the
    /// depot is then prepended at index 0.
    #[serde(default)]
    pub depot_index: usize,
    /// Construction heuristic.
    #[serde(default)]
    pub first_solution_strategy: FirstSolutionStrategy,
    /// Block dimensions applied to every coordinate at ingestion.
    #[serde(default)]
    pub block_size: Option<BlockSize>,
    /// Depot coordinate, in the same units as the records.
    #[serde(default)]
    pub depot: Option<Coordinate>,
    /// Keep at most this many records.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl SolveConfig {
    /// Parses a configuration from JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let config: Self = serde_json::from_reader(reader).context("invalid configuration")?;
        if config.limit == Some(0) {
            return Err(anyhow!("limit must be positive"));
        }
        Ok(config)
    }

    /// Loads a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("cannot open config {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Options for reading records.
    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            limit: self.limit,
            block_size: self.block_size,
        }
    }

    /// Search parameters for the routing engine.
    pub fn parameters(&self) -> SearchParameters {
        SearchParameters::with_strategy(self.first_solution_strategy)
    }

    /// Builds the problem model from ingested `records`.
    pub fn build_model(&self, records: &[Record]) -> error::Result<ProblemModel> {
        let (locations, demands, depot_index) = match self.depot {
            Some(depot) => {
                let depot = match self.block_size {
                    Some(block) => depot.scaled(block),
                    None => depot,
                };
                let (locations, demands) = ingest::with_depot(depot, records);
                (locations, demands, 0)
            }
            None => (
                records.iter().map(|r| r.coordinate).collect(),
                records.iter().map(|r| r.demand).collect(),
                self.depot_index,
            ),
        };
        ProblemModel::build(
            locations,
            demands,
            self.num_vehicles,
            depot_index,
            self.vehicle_capacities.clone(),
        )
    }
}
