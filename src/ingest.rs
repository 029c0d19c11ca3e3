//! CSV ingestion of location and demand records.
//!
//! Two header conventions are understood:
//!
//! - `Latitude,Longitude,Weight` for geographic data (great-circle metric)
//! - `x,y,demand` for planar or block data
//!
//! Any other columns (ids, names) are ignored.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::models::{BlockSize, Coordinate};

/// Errors raised while reading input records.
#[derive(Debug)]
pub enum IngestError {
    /// The input file could not be opened.
    Io(std::io::Error),
    /// A row could not be parsed.
    Csv(csv::Error),
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::Io(e) => write!(f, "cannot open input: {}", e),
            IngestError::Csv(e) => write!(f, "malformed input: {}", e),
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IngestError::Io(e) => Some(e),
            IngestError::Csv(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for IngestError {
    fn from(e: std::io::Error) -> Self {
        IngestError::Io(e)
    }
}

impl From<csv::Error> for IngestError {
    fn from(e: csv::Error) -> Self {
        IngestError::Csv(e)
    }
}

#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Latitude", alias = "latitude", alias = "X")]
    x: f64,
    #[serde(alias = "Longitude", alias = "longitude", alias = "Y")]
    y: f64,
    #[serde(alias = "Weight", alias = "weight", alias = "Demand")]
    demand: f64,
}

/// One ingested location with its demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Location, already scaled if a block size was given.
    pub coordinate: Coordinate,
    /// Capacity consumed by visiting it.
    pub demand: f64,
}

/// How records are read.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IngestOptions {
    /// Keep at most this many rows.
    pub limit: Option<usize>,
    /// Scale every coordinate by this block size.
    pub block_size: Option<BlockSize>,
}

/// Reads records from CSV with a header row.
///
/// # Examples
///
/// ```
/// use u_cvrp::ingest::{read_records, IngestOptions};
///
/// let data = "GiftId,Latitude,Longitude,Weight\n1,16.3,6.8,1.5\n2,12.2,28.6,15.5\n";
/// let records = read_records(data.as_bytes(), &IngestOptions::default()).unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].demand, 15.5);
/// assert_eq!(records[0].coordinate.latitude(), 16.3);
/// ```
pub fn read_records<R: Read>(reader: R, options: &IngestOptions) -> Result<Vec<Record>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.deserialize::<CsvRecord>() {
        if options.limit.is_some_and(|limit| records.len() >= limit) {
            break;
        }
        let row = row?;
        let mut coordinate = Coordinate::new(row.x, row.y);
        if let Some(block) = options.block_size {
            coordinate = coordinate.scaled(block);
        }
        records.push(Record {
            coordinate,
            demand: row.demand,
        });
    }

    debug!(records = ?records, "records parsed");
    info!(records = records.len(), "loaded locations and demands");
    Ok(records)
}

/// Reads records from a CSV file.
pub fn read_records_from_path(
    path: impl AsRef<Path>,
    options: &IngestOptions,
) -> Result<Vec<Record>, IngestError> {
    let file = File::open(path)?;
    read_records(file, options)
}

/// Prepends the depot (with zero demand) to `records`, returning parallel
/// location and demand lists with the depot at index 0.
pub fn with_depot(depot: Coordinate, records: &[Record]) -> (Vec<Coordinate>, Vec<f64>) {
    let mut locations = Vec::with_capacity(records.len() + 1);
    let mut demands = Vec::with_capacity(records.len() + 1);
    locations.push(depot);
    demands.push(0.0);
    for r in records {
        locations.push(r.coordinate);
        demands.push(r.demand);
    }
    (locations, demands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planar_headers() {
        let data = "x,y,demand\n1,0,5\n2,0,5\n";
        let records = read_records(data.as_bytes(), &IngestOptions::default()).expect("valid");
        assert_eq!(
            records,
            vec![
                Record {
                    coordinate: Coordinate::new(1.0, 0.0),
                    demand: 5.0
                },
                Record {
                    coordinate: Coordinate::new(2.0, 0.0),
                    demand: 5.0
                },
            ]
        );
    }

    #[test]
    fn test_limit() {
        let data = "x,y,demand\n1,0,1\n2,0,1\n3,0,1\n";
        let options = IngestOptions {
            limit: Some(2),
            ..IngestOptions::default()
        };
        let records = read_records(data.as_bytes(), &options).expect("valid");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_block_size_applied_once() {
        let data = "x, y, demand\n2, 6, 2\n";
        let options = IngestOptions {
            block_size: Some(BlockSize::city_block()),
            ..IngestOptions::default()
        };
        let records = read_records(data.as_bytes(), &options).expect("valid");
        assert_eq!(records[0].coordinate, Coordinate::new(228.0, 480.0));
    }

    #[test]
    fn test_malformed_row() {
        let data = "x,y,demand\n1,zero,5\n";
        let err = read_records(data.as_bytes(), &IngestOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::Csv(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = read_records_from_path("/nonexistent/gifts.csv", &IngestOptions::default())
            .unwrap_err();
        assert!(matches!(err, IngestError::Io(_)));
    }

    #[test]
    fn test_with_depot() {
        let records = [Record {
            coordinate: Coordinate::new(1.0, 1.0),
            demand: 3.0,
        }];
        let (locations, demands) = with_depot(Coordinate::lat_lon(90.0, 0.0), &records);
        assert_eq!(locations, vec![Coordinate::new(90.0, 0.0), Coordinate::new(1.0, 1.0)]);
        assert_eq!(demands, vec![0.0, 3.0]);
    }
}
