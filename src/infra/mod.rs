//! Infrastructure module - logging and filesystem paths

pub mod logging;
pub mod paths;

pub use logging::{init_tracing, LoggingConfig};
