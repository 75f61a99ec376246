//! Blogstore-DB: Database schema, migrations, and query operations
//!
//! This crate provides the data-access layer for blogstore using SQLite
//! with rusqlite and r2d2 connection pooling.
//!
//! # Modules
//!
//! - `migrations` - Database schema migrations
//! - `pool` - Connection pool management
//! - `entity` - Capabilities shared by every stored entity kind
//! - `models` - Rust models matching database schema
//! - `queries` - Database query operations
//!
//! # Example
//!
//! ```
//! use blogstore_common::{parse_timestamp, DatabaseConfig};
//! use blogstore_db::pool::{get_conn, init_pool};
//! use blogstore_db::queries::{categories, posts};
//!
//! let pool = init_pool(&DatabaseConfig::in_memory()).unwrap();
//! let conn = get_conn(&pool).unwrap();
//!
//! let category = categories::add_category(&conn, "Tech").unwrap();
//! assert!(categories::remove_category(&conn, category.id).unwrap());
//!
//! let published = parse_timestamp("2024-03-01T10:00:00+03:00").unwrap();
//! posts::add_post(&conn, "Hello", "First post", published).unwrap();
//! let found = posts::find_posts_in_date_range(&conn, published, published).unwrap();
//! assert_eq!(found.len(), 1);
//! ```

pub mod entity;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;

pub use entity::Entity;
pub use migrations::{ensure_schema, SchemaError};
pub use models::{Category, NewCategory, NewPost, Post};
