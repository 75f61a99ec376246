//! Common error types used throughout blogstore.
//!
//! Two failure classes matter to callers: schema errors raised while bringing
//! a database up to date (fatal at startup) and persistence errors raised by
//! individual store operations. Absence of a row on delete is not an error at
//! all and never shows up here.

use std::fmt;

/// Common error type for blogstore.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Applying schema migrations failed.
    #[error("Schema error: {source}")]
    Schema {
        /// The underlying migration error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A database operation failed (persistence error).
    #[error("Database error: {source}")]
    Database {
        /// The underlying database or pool error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The requested entity was not found.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity (e.g. "category", "post").
        entity: String,
        /// The identifier that was looked up.
        id: String,
    },

    /// Configuration or input data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a new Schema error.
    pub fn schema(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Schema {
            source: source.into(),
        }
    }

    /// Create a new Database error.
    pub fn database(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Database {
            source: source.into(),
        }
    }

    /// Create a new NotFound error.
    pub fn not_found(entity: impl Into<String>, id: impl fmt::Display) -> Self {
        Error::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Create a new Validation error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Error::Validation(msg.into())
    }

    /// Whether this error came from schema migration.
    pub fn is_schema(&self) -> bool {
        matches!(self, Error::Schema { .. })
    }

    /// Whether this error is a persistence failure of a store operation.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Error::Database { .. })
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
