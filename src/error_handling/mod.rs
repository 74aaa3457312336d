//! Error type definitions.
//!
//! Probe failures are absorbed inside the probers (fail-closed) and never
//! appear here. The typed errors cover the places where a caller has to
//! discriminate: process startup and document persistence.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Error types for snapshot/history persistence.
///
/// Only write-side faults surface; read-side faults recover to empty
/// defaults in `storage` and never reach a caller.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A document could not be serialized.
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A document could not be written to its target path.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
