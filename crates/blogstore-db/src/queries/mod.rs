//! Database query modules.
//!
//! This module organizes all database operations into logical groups:
//! - store: generic add/get/remove/list over any entity kind
//! - categories: Category operations
//! - posts: Post operations and publication-date range queries

pub mod categories;
pub mod posts;
pub mod store;
