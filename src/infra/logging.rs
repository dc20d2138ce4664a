//! Logging infrastructure for the data preparation pipeline
//!
//! Provides the process-wide tracing setup: one timestamped log file per run,
//! written through a non-blocking file appender. Initialization is explicit
//! and happens at most once per process; the first configuration wins.

use crate::infra::paths::{ensure_dir, LOGS_DIR};
use crate::IngestionError;
use chrono::Local;
use once_cell::sync::OnceCell;
use std::fmt;
use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing::{Event, Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Log path chosen by the first initialization, plus the appender guard that
/// keeps the background writer alive for the process lifetime.
static LOG_STATE: OnceCell<(PathBuf, WorkerGuard)> = OnceCell::new();

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directory the per-run log file is created in
    pub log_dir: PathBuf,
    /// Minimum level written to the log file
    pub level: Level,
}

impl Default for LoggingConfig {
    /// Defaults: `logs/` directory, INFO level
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(LOGS_DIR),
            level: Level::INFO,
        }
    }
}

/// Record layout: `[timestamp] line target - LEVEL - message`
struct RecordFormat;

impl<S, N> FormatEvent<S, N> for RecordFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "[{}] {} {} - {} - ",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            meta.line().unwrap_or(0),
            meta.target(),
            meta.level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Initializes the process-wide logging sink
///
/// Creates the log directory if absent, derives a file name from the current
/// local time (`MM_DD_YYYY_HH_MM_SS.log`) and installs a global tracing
/// subscriber writing to that file.
///
/// Only the first call configures anything; later calls return the path
/// chosen by the first call without rebinding the sink.
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the active log file
/// * `Err(IngestionError)` - Log directory or file could not be created, or
///   a conflicting global subscriber was already installed
pub fn init_tracing(config: &LoggingConfig) -> Result<PathBuf, IngestionError> {
    let state = LOG_STATE.get_or_try_init(|| {
        ensure_dir(&config.log_dir)?;

        let file_name = format!("{}.log", Local::now().format("%m_%d_%Y_%H_%M_%S"));
        let log_path = config.log_dir.join(file_name);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .map_err(|e| IngestionError::Io {
                path: log_path.to_string_lossy().to_string(),
                source: e,
            })?;

        let (writer, guard) = tracing_appender::non_blocking(file);

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(config.level)
            .event_format(RecordFormat)
            .with_writer(writer)
            .finish();

        tracing::subscriber::set_global_default(subscriber).map_err(|e| {
            IngestionError::Other {
                message: format!("Failed to install global logging subscriber: {}", e),
                source: None,
            }
        })?;

        Ok::<_, IngestionError>((log_path, guard))
    })?;

    Ok(state.0.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.level, Level::INFO);
    }

    #[test]
    fn test_init_creates_timestamped_file_and_first_call_wins() {
        let temp_dir = TempDir::new().unwrap();
        let config = LoggingConfig {
            log_dir: temp_dir.path().join("logs"),
            level: Level::INFO,
        };

        let first = init_tracing(&config).unwrap();
        assert!(first.exists());
        assert_eq!(first.extension().unwrap(), "log");
        // MM_DD_YYYY_HH_MM_SS.log
        assert_eq!(first.file_name().unwrap().to_string_lossy().len(), 23);

        // A second initialization, even with a different directory, returns
        // the path chosen by the first call.
        let other = LoggingConfig {
            log_dir: temp_dir.path().join("elsewhere"),
            level: Level::DEBUG,
        };
        let second = init_tracing(&other).unwrap();
        assert_eq!(first, second);
    }
}
