//! Schema source error types.

use std::path::PathBuf;

use pbz_core::CoreError;
use thiserror::Error;

/// Errors that can occur while loading collection descriptors.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// PocketBase returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Admin authentication was rejected or returned no token.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// A local source file does not exist.
    #[error("file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// libSQL error while reading the `_collections` table.
    #[error("database error: {0}")]
    Database(#[from] libsql::Error),

    /// The raw document did not match the collection model.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
