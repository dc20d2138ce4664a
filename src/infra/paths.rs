//! Path utilities for the data preparation pipeline
//!
//! Centralizes filesystem path defaults and directory creation, separate from
//! the core ingestion logic.

use crate::IngestionError;
use std::path::{Path, PathBuf};

/// Default directory for all files produced by the ingestion step
pub const ARTIFACT_DIR: &str = "artifact";

/// Default directory for per-run log files
pub const LOGS_DIR: &str = "logs";

/// Default location of the source dataset
pub const SOURCE_DATA_PATH: &str = "notebook/data/stud.csv";

/// Returns the path of a file inside the artifact directory
pub fn artifact_file(name: &str) -> PathBuf {
    Path::new(ARTIFACT_DIR).join(name)
}

/// Ensures a directory exists, creating it and any missing parents
///
/// # Returns
/// * `Ok(())` - Directory exists or was created
/// * `Err(IngestionError)` - Creation failed (permissions, disk full, or a
///   path component is an existing file)
pub fn ensure_dir(dir: &Path) -> Result<(), IngestionError> {
    std::fs::create_dir_all(dir).map_err(|e| IngestionError::DirectoryCreation {
        path: dir.to_string_lossy().to_string(),
        source: e,
    })
}

/// Ensures the parent directory of a file path exists
///
/// A path with no parent component (a bare file name) is a no-op.
pub fn ensure_parent_dir(file: &Path) -> Result<(), IngestionError> {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}
