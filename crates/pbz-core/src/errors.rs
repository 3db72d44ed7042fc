//! Cross-cutting error types for pocketbase-zod.
//!
//! Fetch and configuration errors live in their own crates. `CoreError` only
//! covers turning raw schema documents into descriptors.

use thiserror::Error;

/// Errors raised while interpreting a raw schema document.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The document did not have the expected shape.
    #[error("Invalid schema document: {0}")]
    InvalidSchema(String),

    /// The document was not valid JSON or did not match the descriptor types.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
