//! Error types for mlprep
//!
//! This module defines a unified error type for the entire pipeline,
//! providing structured error handling with context and user-friendly messages.

use std::io;
use thiserror::Error;

/// Main error type for the data preparation pipeline
///
/// All functions across the core and infra layers return this error type
/// for consistent error handling and reporting.
///
/// # Architecture Notes
/// - Uses thiserror for automatic Display and Error trait implementations
/// - Each variant includes contextual information for debugging
/// - #[source] attribute enables error chain traversal
/// - Nothing is retried automatically; the caller decides whether to rerun
#[derive(Debug, Error)]
pub enum IngestionError {
    /// A required directory (logs or artifact) could not be created
    #[error("Failed to create directory: {path}")]
    DirectoryCreation {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Source dataset missing, unreadable or malformed as CSV
    #[error("Failed to load dataset from '{path}'")]
    DataLoad {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// An output CSV file could not be written
    #[error("Failed to write dataset to '{path}'")]
    DataWrite {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// File I/O error outside of CSV serialization (open, flush)
    #[error("File I/O error: {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Ingestion manifest could not be serialized
    #[error("Failed to write ingestion manifest: {path}")]
    Manifest {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Rejected ingestion configuration
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        reason: String,
    },

    /// Generic error with context
    #[error("{message}")]
    Other {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

impl IngestionError {
    /// Returns an error code for categorization
    pub fn code(&self) -> &'static str {
        match self {
            IngestionError::DirectoryCreation { .. } => "DIR_CREATE",
            IngestionError::DataLoad { .. } => "DATA_LOAD",
            IngestionError::DataWrite { .. } => "DATA_WRITE",
            IngestionError::Io { .. } => "IO_ERROR",
            IngestionError::Manifest { .. } => "MANIFEST",
            IngestionError::InvalidConfig { .. } => "INVALID_CONFIG",
            IngestionError::Other { .. } => "GENERAL",
        }
    }

    /// Returns a user-friendly error message suitable for display
    pub fn user_message(&self) -> String {
        match self {
            IngestionError::DirectoryCreation { path, .. } => {
                format!("Could not create directory '{}'", path)
            }
            IngestionError::DataLoad { path, .. } => {
                format!("Could not read the source dataset at '{}'", path)
            }
            IngestionError::DataWrite { path, .. } => {
                format!("Could not write output file '{}'", path)
            }
            IngestionError::Io { path, .. } => {
                format!("Failed to access file: {}", path)
            }
            IngestionError::Manifest { path, .. } => {
                format!("Could not record the ingestion manifest at '{}'", path)
            }
            IngestionError::InvalidConfig { reason } => {
                format!("Invalid ingestion configuration: {}", reason)
            }
            IngestionError::Other { message, .. } => message.clone(),
        }
    }

    /// Returns optional remediation steps for the error
    pub fn remediation(&self) -> Option<String> {
        match self {
            IngestionError::DirectoryCreation { .. } => Some(
                "Check filesystem permissions and that no file exists with the same name."
                    .to_string(),
            ),
            IngestionError::DataLoad { .. } => Some(
                "Verify the source path exists and contains a well-formed CSV with a header row."
                    .to_string(),
            ),
            IngestionError::DataWrite { .. } | IngestionError::Io { .. } => {
                Some("Check disk space and write permissions for the artifact directory.".to_string())
            }
            _ => None,
        }
    }
}

// Convenience conversions from common error types
impl From<io::Error> for IngestionError {
    fn from(err: io::Error) -> Self {
        IngestionError::Other {
            message: format!("I/O error: {}", err),
            source: Some(err.into()),
        }
    }
}

impl From<csv::Error> for IngestionError {
    fn from(err: csv::Error) -> Self {
        IngestionError::DataLoad {
            path: "<unknown>".to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for IngestionError {
    fn from(err: serde_json::Error) -> Self {
        IngestionError::Manifest {
            path: "<unknown>".to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = IngestionError::InvalidConfig {
            reason: "test fraction must be between 0 and 1".to_string(),
        };
        assert_eq!(err.code(), "INVALID_CONFIG");

        let err = IngestionError::DirectoryCreation {
            path: "artifact".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.code(), "DIR_CREATE");
    }

    #[test]
    fn test_user_message_includes_path() {
        let err = IngestionError::Io {
            path: "artifact/train.csv".to_string(),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        assert!(err.user_message().contains("artifact/train.csv"));
    }

    #[test]
    fn test_source_chain_preserved() {
        use std::error::Error;

        let err = IngestionError::DirectoryCreation {
            path: "logs".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let source = err.source().expect("source should be preserved");
        assert!(source.to_string().contains("denied"));
    }

    #[test]
    fn test_remediation_for_load_failures() {
        let err = IngestionError::DataLoad {
            path: "notebook/data/stud.csv".to_string(),
            source: csv::Error::from(io::Error::new(io::ErrorKind::NotFound, "missing")),
        };
        assert!(err.remediation().is_some());
    }
}
