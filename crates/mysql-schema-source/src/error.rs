//! Error types for schema fetching.

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that abort a fetch. No partial schema is returned alongside them.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to list tables")]
    TableListing { source: BoxError },

    #[error("Unexpected result from `SHOW FULL TABLES`: {message}")]
    MalformedListing { message: String },

    #[error("Failed to run `{query}` for table '{table}'")]
    Query {
        table: String,
        query: String,
        source: BoxError,
    },

    #[error("Unexpected result from `{query}` for table '{table}': {message}")]
    MalformedRow {
        table: String,
        query: String,
        message: String,
    },
}

impl FetchError {
    /// The table the error is about, if any.
    pub fn table(&self) -> Option<&str> {
        match self {
            Self::TableListing { .. } | Self::MalformedListing { .. } => None,
            Self::Query { table, .. } | Self::MalformedRow { table, .. } => Some(table),
        }
    }
}

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
