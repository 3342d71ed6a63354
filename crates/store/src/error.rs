//! Typed error type for the content store.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The pool could not be created or the first connection was refused.
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("database did not answer within {0:?}")]
    ConnectTimeout(Duration),

    /// The schema or seed script was rejected by the database.
    #[error("schema error: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("cannot read SQL script {}: {source}", path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("query error: {0}")]
    Query(#[from] sqlx::Error),

    #[error("row not found")]
    NotFound,
}

impl StoreError {
    /// `true` for failures raised while opening the store.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::ConnectTimeout(_))
    }
}
