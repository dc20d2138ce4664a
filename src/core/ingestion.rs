//! Data ingestion - the data preparation entry point
//!
//! Loads the source dataset, persists a raw copy, partitions the rows into
//! train and test subsets with a seeded shuffle and writes the subsets as CSV
//! artifacts for the downstream transformation and training stages.

use crate::core::{csv_reader, csv_writer, split, Dataset, IngestionManifest};
use crate::infra::paths::{artifact_file, ensure_parent_dir, SOURCE_DATA_PATH};
use crate::IngestionError;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Default fraction of rows routed to the test subset
pub const DEFAULT_TEST_FRACTION: f64 = 0.20;

/// Default seed for the split shuffle
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for a data ingestion run
///
/// Paths, split fraction and RNG seed are explicit configuration values so
/// the operation can run against alternate locations in tests and other
/// pipelines. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct DataIngestionConfig {
    /// CSV file the dataset is loaded from
    pub source_data_path: PathBuf,
    /// Destination of the verbatim raw copy
    pub raw_data_path: PathBuf,
    /// Destination of the train subset
    pub train_data_path: PathBuf,
    /// Destination of the test subset
    pub test_data_path: PathBuf,
    /// Destination of the JSON run manifest
    pub manifest_path: PathBuf,
    /// Fraction of rows routed to the test subset, in (0, 1)
    pub test_fraction: f64,
    /// Seed for the split shuffle
    pub seed: u64,
}

impl Default for DataIngestionConfig {
    /// Defaults: `notebook/data/stud.csv` source, artifacts under `artifact/`,
    /// 80/20 split, seed 42
    fn default() -> Self {
        Self {
            source_data_path: PathBuf::from(SOURCE_DATA_PATH),
            raw_data_path: artifact_file("data.csv"),
            train_data_path: artifact_file("train.csv"),
            test_data_path: artifact_file("test.csv"),
            manifest_path: artifact_file("manifest.json"),
            test_fraction: DEFAULT_TEST_FRACTION,
            seed: DEFAULT_SEED,
        }
    }
}

impl DataIngestionConfig {
    /// Validates the configuration
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is usable
    /// * `Err(IngestionError)` - Test fraction outside (0, 1)
    pub fn validate(&self) -> Result<(), IngestionError> {
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(IngestionError::InvalidConfig {
                reason: format!(
                    "test fraction must be strictly between 0 and 1, got {}",
                    self.test_fraction
                ),
            });
        }
        Ok(())
    }
}

/// Data ingestion component
///
/// Holds the run configuration; the single operation
/// [`initiate_data_ingestion`](DataIngestion::initiate_data_ingestion)
/// produces the artifacts and returns the train/test paths.
#[derive(Debug, Default)]
pub struct DataIngestion {
    config: DataIngestionConfig,
}

impl DataIngestion {
    /// Creates an ingestor with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an ingestor with an explicit configuration
    pub fn with_config(config: DataIngestionConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration
    pub fn config(&self) -> &DataIngestionConfig {
        &self.config
    }

    /// Runs the ingestion: load, copy, split, persist
    ///
    /// Steps, in order:
    /// 1. Validate the configuration.
    /// 2. Load the source dataset; a missing or malformed file aborts before
    ///    anything is written.
    /// 3. Ensure the output directories exist.
    /// 4. Write the raw copy, then split and write the train and test
    ///    subsets, header included, no index column.
    /// 5. Write the JSON run manifest.
    ///
    /// # Returns
    /// * `Ok((train_path, test_path))` - Paths of the persisted subsets
    /// * `Err(IngestionError)` - First failure in the sequence. Files written
    ///   before the failure are left on disk; nothing is retried.
    pub fn initiate_data_ingestion(&self) -> Result<(PathBuf, PathBuf), IngestionError> {
        info!("Entered the data ingestion component");

        self.config.validate()?;

        let dataset = csv_reader::read_dataset_from_csv(&self.config.source_data_path)?;
        info!(
            row_count = dataset.row_count(),
            column_count = dataset.column_count(),
            "Read the source dataset"
        );

        for output in [
            &self.config.raw_data_path,
            &self.config.train_data_path,
            &self.config.test_data_path,
            &self.config.manifest_path,
        ] {
            ensure_parent_dir(output)?;
        }

        csv_writer::write_dataset_to_csv(&self.config.raw_data_path, &dataset)?;

        info!("Train test split initiated");
        let total_rows = dataset.row_count();
        let (train_set, test_set) =
            split::train_test_split(dataset, self.config.test_fraction, self.config.seed);

        csv_writer::write_dataset_to_csv(&self.config.train_data_path, &train_set)?;
        csv_writer::write_dataset_to_csv(&self.config.test_data_path, &test_set)?;

        self.write_manifest(total_rows, &train_set, &test_set)?;

        info!(
            train_path = ?self.config.train_data_path,
            test_path = ?self.config.test_data_path,
            "Ingestion of the data is completed"
        );

        Ok((
            self.config.train_data_path.clone(),
            self.config.test_data_path.clone(),
        ))
    }

    fn write_manifest(
        &self,
        total_rows: usize,
        train_set: &Dataset,
        test_set: &Dataset,
    ) -> Result<(), IngestionError> {
        let manifest = IngestionManifest {
            source: self.config.source_data_path.to_string_lossy().to_string(),
            raw_data: self.config.raw_data_path.to_string_lossy().to_string(),
            train_data: self.config.train_data_path.to_string_lossy().to_string(),
            test_data: self.config.test_data_path.to_string_lossy().to_string(),
            total_rows,
            train_rows: train_set.row_count(),
            test_rows: test_set.row_count(),
            test_fraction: self.config.test_fraction,
            seed: self.config.seed,
            completed_at: Local::now().to_rfc3339(),
        };

        let json = serde_json::to_string_pretty(&manifest).map_err(|e| {
            error!(error = %e, "Failed to serialize ingestion manifest");
            IngestionError::Manifest {
                path: self.config.manifest_path.to_string_lossy().to_string(),
                source: e,
            }
        })?;

        write_text_file(&self.config.manifest_path, &json)
    }
}

fn write_text_file(path: &Path, contents: &str) -> Result<(), IngestionError> {
    std::fs::write(path, contents).map_err(|e| {
        error!(path = ?path, error = %e, "Failed to write file");
        IngestionError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        }
    })
}
