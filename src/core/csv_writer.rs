//! CSV Writer
//!
//! Handles persisting in-memory datasets as CSV artifacts.
//! Isolated from the ingestion orchestration to enable testing and reuse.

use crate::core::Dataset;
use crate::IngestionError;
use std::path::Path;

/// Writes a dataset to a CSV file
///
/// The header row is written first, followed by every data row in order.
/// No index column is added; the default comma delimiter is used.
///
/// # Arguments
/// * `csv_path` - Path to the CSV file to create/overwrite
/// * `dataset` - Dataset to persist
///
/// # Returns
/// * `Ok(())` - Successfully wrote the CSV file
/// * `Err(IngestionError)` - Failed to create, write or flush the file
///
/// # Side Effects
/// - Creates or overwrites the file at `csv_path`
pub fn write_dataset_to_csv(csv_path: &Path, dataset: &Dataset) -> Result<(), IngestionError> {
    use tracing::{debug, error};

    debug!(
        path = ?csv_path,
        row_count = dataset.row_count(),
        "Writing dataset to CSV file"
    );

    let mut wtr = csv::WriterBuilder::new().from_path(csv_path).map_err(|e| {
        error!(path = ?csv_path, error = %e, "Failed to create CSV writer");
        IngestionError::DataWrite {
            path: csv_path.to_string_lossy().to_string(),
            source: e,
        }
    })?;

    wtr.write_record(&dataset.header).map_err(|e| {
        error!(path = ?csv_path, error = %e, "Failed to write CSV header");
        IngestionError::DataWrite {
            path: csv_path.to_string_lossy().to_string(),
            source: e,
        }
    })?;

    for row in &dataset.rows {
        wtr.write_record(row).map_err(|e| {
            error!(path = ?csv_path, error = %e, "Failed to write CSV record");
            IngestionError::DataWrite {
                path: csv_path.to_string_lossy().to_string(),
                source: e,
            }
        })?;
    }

    wtr.flush().map_err(|e| {
        error!(path = ?csv_path, error = %e, "Failed to flush CSV writer");
        IngestionError::Io {
            path: csv_path.to_string_lossy().to_string(),
            source: e,
        }
    })?;

    debug!(
        path = ?csv_path,
        row_count = dataset.row_count(),
        "Successfully wrote dataset to CSV"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::csv_reader::read_dataset_from_csv;
    use csv::StringRecord;
    use tempfile::TempDir;

    fn sample_dataset() -> Dataset {
        Dataset::new(
            StringRecord::from(vec!["a", "b"]),
            vec![
                StringRecord::from(vec!["1", "2"]),
                StringRecord::from(vec!["3", "4"]),
            ],
        )
    }

    #[test]
    fn test_write_dataset_success() {
        let temp_dir = TempDir::new().unwrap();
        let csv_path = temp_dir.path().join("out.csv");

        write_dataset_to_csv(&csv_path, &sample_dataset()).unwrap();

        let content = std::fs::read_to_string(&csv_path).unwrap();
        assert!(content.starts_with("a,b"));
        assert!(content.contains("1,2"));
        assert!(content.contains("3,4"));
    }

    #[test]
    fn test_write_empty_dataset_keeps_header() {
        let temp_dir = TempDir::new().unwrap();
        let csv_path = temp_dir.path().join("empty.csv");

        let ds = Dataset::new(StringRecord::from(vec!["a", "b"]), Vec::new());
        write_dataset_to_csv(&csv_path, &ds).unwrap();

        let content = std::fs::read_to_string(&csv_path).unwrap();
        assert_eq!(content.trim(), "a,b");
    }

    #[test]
    fn test_write_to_missing_directory_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let csv_path = temp_dir.path().join("no_such_dir").join("out.csv");

        let result = write_dataset_to_csv(&csv_path, &sample_dataset());
        assert!(matches!(result, Err(IngestionError::DataWrite { .. })));
    }

    #[test]
    fn test_written_file_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let csv_path = temp_dir.path().join("roundtrip.csv");

        let ds = Dataset::new(
            StringRecord::from(vec!["name", "notes"]),
            vec![StringRecord::from(vec!["alice", "likes, commas"])],
        );
        write_dataset_to_csv(&csv_path, &ds).unwrap();

        let reloaded = read_dataset_from_csv(&csv_path).unwrap();
        assert_eq!(reloaded, ds);
    }
}
