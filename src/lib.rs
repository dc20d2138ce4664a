//! # mlprep
//!
//! Data preparation step for a machine-learning pipeline: loads a tabular CSV
//! dataset, persists a verbatim raw copy and writes a reproducible randomized
//! train/test split for the downstream transformation and training stages.
//!
//! ## Architecture
//!
//! The library is organized into modular components:
//!
//! - **core**: Domain types and ingestion logic (CSV I/O, splitting)
//! - **errors**: Unified error handling with IngestionError
//! - **infra**: Infrastructure concerns (logging, filesystem paths)
//!
//! ## Usage
//!
//! ```no_run
//! use mlprep::{init_tracing, DataIngestion, LoggingConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! init_tracing(&LoggingConfig::default())?;
//!
//! let ingestion = DataIngestion::new();
//! let (train_path, test_path) = ingestion.initiate_data_ingestion()?;
//! # Ok(())
//! # }
//! ```
//!
//! Re-running ingestion on the same input produces bit-identical splits: the
//! shuffle is driven by a fixed, configurable seed.

mod core;
mod errors;
mod infra;

// Re-export commonly used types
pub use crate::core::ingestion::{
    DataIngestion, DataIngestionConfig, DEFAULT_SEED, DEFAULT_TEST_FRACTION,
};
pub use crate::core::split::train_test_split;
pub use crate::core::{Dataset, IngestionManifest};
pub use crate::errors::IngestionError;
pub use crate::infra::{init_tracing, LoggingConfig};
