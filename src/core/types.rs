//! Core domain types for the data preparation pipeline

use csv::StringRecord;
use serde::{Deserialize, Serialize};

/// In-memory tabular dataset
///
/// Ordered rows under a named-column header, loaded from a CSV source.
/// Column names and cell contents are opaque to the pipeline: nothing is
/// validated or coerced, the table is passed through as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Header row with the column names
    pub header: StringRecord,
    /// Data rows, in source order
    pub rows: Vec<StringRecord>,
}

impl Dataset {
    /// Creates a dataset from a header and rows
    pub fn new(header: StringRecord, rows: Vec<StringRecord>) -> Self {
        Self { header, rows }
    }

    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// True when the dataset holds no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Machine-readable receipt of a completed ingestion run
///
/// Persisted as JSON next to the CSV artifacts so downstream stages can
/// verify what was produced without re-reading the data files.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IngestionManifest {
    /// Path the dataset was loaded from
    pub source: String,
    /// Path of the verbatim raw copy
    pub raw_data: String,
    /// Path of the train subset
    pub train_data: String,
    /// Path of the test subset
    pub test_data: String,
    /// Row count of the source dataset
    pub total_rows: usize,
    /// Row count of the train subset
    pub train_rows: usize,
    /// Row count of the test subset
    pub test_rows: usize,
    /// Fraction of rows routed to the test subset
    pub test_fraction: f64,
    /// Seed used for the deterministic shuffle
    pub seed: u64,
    /// ISO 8601 timestamp of run completion
    pub completed_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_dataset_counts() {
        let ds = Dataset::new(
            record(&["a", "b"]),
            vec![record(&["1", "2"]), record(&["3", "4"])],
        );
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.column_count(), 2);
        assert!(!ds.is_empty());
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::new(record(&["a", "b"]), Vec::new());
        assert_eq!(ds.row_count(), 0);
        assert!(ds.is_empty());
    }

    #[test]
    fn test_manifest_round_trips_as_json() {
        let manifest = IngestionManifest {
            source: "notebook/data/stud.csv".to_string(),
            raw_data: "artifact/data.csv".to_string(),
            train_data: "artifact/train.csv".to_string(),
            test_data: "artifact/test.csv".to_string(),
            total_rows: 10,
            train_rows: 8,
            test_rows: 2,
            test_fraction: 0.2,
            seed: 42,
            completed_at: "2026-01-01T00:00:00+00:00".to_string(),
        };

        let json = serde_json::to_string(&manifest).unwrap();
        let parsed: IngestionManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total_rows, 10);
        assert_eq!(parsed.train_rows, 8);
        assert_eq!(parsed.test_rows, 2);
        assert_eq!(parsed.seed, 42);
    }
}
