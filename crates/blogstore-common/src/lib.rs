//! Blogstore-Common: Shared types and utilities.
//!
//! This crate provides common functionality used across blogstore:
//!
//! - **Typed IDs**: Integer row-id wrappers for categories and posts
//! - **Timestamps**: Offset-preserving timestamp parsing and storage helpers
//! - **Configuration**: Explicit database connection settings
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use blogstore_common::{parse_timestamp, CategoryId, DatabaseConfig, Error, Result};
//!
//! let id = CategoryId::new(1);
//! assert_eq!(id.get(), 1);
//!
//! let config = DatabaseConfig::in_memory();
//! assert!(config.validate().is_ok());
//!
//! let published = parse_timestamp("2024-03-01T10:00:00+03:00").unwrap();
//! assert_eq!(published.offset().local_minus_utc(), 3 * 3600);
//!
//! fn example() -> Result<()> {
//!     Err(Error::not_found("category", 1))
//! }
//! assert!(example().is_err());
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod timestamp;

pub use config::DatabaseConfig;
pub use error::{Error, Result};
pub use ids::*;
pub use timestamp::{parse_timestamp, Timestamp};
