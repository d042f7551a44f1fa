//! Error taxonomy for the service.
//!
//! Startup errors (`ConfigError`, a failed [`Database::connect`]) are fatal:
//! `main` logs them and exits, since every feature depends on a live store.
//! Runtime errors are surfaced to the caller and never terminate the process.
//!
//! [`Database::connect`]: crate::database::Database::connect

use thiserror::Error;

/// Configuration is missing or malformed. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {reason}")]
    InvalidVar { var: &'static str, reason: String },
}

/// A document-store failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached at startup (ping failed). Fatal.
    #[error("could not reach the document store: {0}")]
    Unreachable(#[source] mongodb::error::Error),

    /// An individual CRUD call failed after the connection was established.
    /// Surfaced to the caller, not retried.
    #[error("store operation failed: {0}")]
    Operation(#[from] mongodb::error::Error),
}

/// An outbound directory lookup failed.
///
/// Nothing is cached on failure, so the next request for the same key
/// retries the fetch.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("directory request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("directory returned status {0}")]
    Status(reqwest::StatusCode),
}
