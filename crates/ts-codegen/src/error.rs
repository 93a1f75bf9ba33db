//! Error types for rendering.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Failed to serialize schema descriptor: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, CodegenError>;
