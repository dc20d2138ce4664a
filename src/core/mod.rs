//! Core module - domain types and ingestion logic

pub mod csv_reader;
pub mod csv_writer;
pub mod ingestion;
pub mod split;
pub mod types;

pub use types::*;
