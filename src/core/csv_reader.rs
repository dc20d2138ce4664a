//! CSV Reader
//!
//! Handles reading and parsing the source CSV into an in-memory dataset.
//! Isolated from the ingestion orchestration to enable testing and reuse.

use crate::core::Dataset;
use crate::IngestionError;
use std::path::Path;

/// Reads a tabular dataset from a CSV file
///
/// The first row is interpreted as the header; every following row becomes a
/// data row. Cell contents are kept as strings, nothing is validated.
///
/// # Arguments
/// * `csv_path` - Path to the CSV file to read
///
/// # Returns
/// * `Ok(Dataset)` - Successfully parsed dataset (possibly with zero rows)
/// * `Err(IngestionError)` - Failed to open, read or parse the file
///
/// # Failure Modes
/// - File does not exist or cannot be read (permission denied, etc.)
/// - CSV is malformed (ragged rows, invalid UTF-8)
pub fn read_dataset_from_csv(csv_path: &Path) -> Result<Dataset, IngestionError> {
    use tracing::{debug, error};

    debug!(path = ?csv_path, "Reading dataset from CSV file");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(csv_path)
        .map_err(|e| {
            error!(path = ?csv_path, error = %e, "Failed to open CSV file");
            IngestionError::DataLoad {
                path: csv_path.to_string_lossy().to_string(),
                source: e,
            }
        })?;

    let header = reader
        .headers()
        .map_err(|e| {
            error!(path = ?csv_path, error = %e, "Failed to read CSV header");
            IngestionError::DataLoad {
                path: csv_path.to_string_lossy().to_string(),
                source: e,
            }
        })?
        .clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) => rows.push(record),
            Err(e) => {
                error!(path = ?csv_path, error = %e, "Failed to parse CSV record");
                return Err(IngestionError::DataLoad {
                    path: csv_path.to_string_lossy().to_string(),
                    source: e,
                });
            }
        }
    }

    debug!(
        path = ?csv_path,
        row_count = rows.len(),
        column_count = header.len(),
        "Successfully loaded dataset from CSV"
    );

    Ok(Dataset::new(header, rows))
}
