//! Error types for the monitor component

use thiserror::Error;

/// Errors that can occur in monitor operations
#[derive(Error, Debug)]
pub enum MonitorError {
    /// Ingestion across the host-page boundary failed
    #[error("ingestion failed: {0}")]
    Ingest(#[from] capture_ingest::IngestError),

    /// Export document could not be serialized
    #[error("export serialization failed: {0}")]
    Export(#[from] serde_json::Error),

    /// Other errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type for monitor operations
pub type Result<T> = std::result::Result<T, MonitorError>;
