//! Store error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a [`PersistentStore`](crate::PersistentStore)
///
/// These are structural failures (unreadable file, undecodable namespace),
/// never transient ones. Nothing retries them.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O failure on the backing file
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The backing file does not hold a string-valued JSON object
    #[error("store file {path} is not a string map: {message}")]
    Serialization {
        /// File being decoded
        path: PathBuf,
        /// Decoder message
        message: String,
    },
}

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
