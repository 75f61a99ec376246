//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates an isolated in-memory database
//! (migrated) and hands out connections to it.

#![allow(dead_code)]

use blogstore_common::{parse_timestamp, Timestamp};
use blogstore_db::pool::{init_memory_pool, DbPool, PooledConnection};

/// Test harness wrapping a migrated in-memory database.
pub struct TestHarness {
    pub db: DbPool,
}

impl TestHarness {
    /// Create a new harness backed by a fresh in-memory database.
    pub fn new() -> Self {
        let db = init_memory_pool().expect("failed to create in-memory pool");
        Self { db }
    }

    /// Get a database connection from the pool.
    pub fn conn(&self) -> PooledConnection {
        blogstore_db::pool::get_conn(&self.db).expect("failed to get db connection")
    }
}

/// Parse an RFC 3339 literal.
pub fn ts(s: &str) -> Timestamp {
    parse_timestamp(s).expect("valid timestamp literal")
}
