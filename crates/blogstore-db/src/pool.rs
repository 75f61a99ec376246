//! Database connection pool management.
//!
//! This module provides connection pooling for SQLite using r2d2.
//! It handles pool initialization, connection customization, and running
//! migrations before the pool is handed to callers. A connection taken from
//! the pool goes back to it when dropped, on every exit path.

use std::path::Path;
use std::time::Duration;

use blogstore_common::{DatabaseConfig, Error, Result};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use tracing::{debug, info};

use crate::migrations;

/// Type alias for the database connection pool.
pub type DbPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled database connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Initialize a new database pool from explicit connection settings.
///
/// This function will:
/// - Create the SQLite database file and its parent directory if missing
/// - Open `pool_size` connections up front
/// - Enable foreign key constraints on all connections
/// - Bring the schema up to date
///
/// A parent directory that cannot be created maps to [`Error::Io`], pool
/// creation failures to [`Error::Database`], and migration failures to
/// [`Error::Schema`], which must stop startup.
///
/// # Example
///
/// ```
/// use blogstore_common::DatabaseConfig;
/// use blogstore_db::pool::{get_conn, init_pool};
///
/// let pool = init_pool(&DatabaseConfig::in_memory()).unwrap();
/// let conn = get_conn(&pool).unwrap();
/// ```
pub fn init_pool(config: &DatabaseConfig) -> Result<DbPool> {
    config.validate()?;

    let manager = if config.is_memory() {
        memory_manager()
    } else {
        ensure_parent_dir(Path::new(&config.url))?;
        SqliteConnectionManager::file(config.url.as_str())
    }
    .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));

    let pool = Pool::builder()
        .max_size(config.pool_size)
        .connection_timeout(Duration::from_secs(config.connect_timeout_secs))
        .build(manager)
        .map_err(|e| Error::database(format!("Failed to create connection pool: {e}")))?;

    info!(url = %config.url, pool_size = config.pool_size, "opened database");

    prepare(&pool)?;

    Ok(pool)
}

/// Initialize an in-memory database pool for testing.
///
/// Each call creates a uniquely-named shared-cache in-memory database so
/// that parallel tests do not interfere with each other, while all
/// connections within a single pool still share state.
///
/// # Example
///
/// ```
/// use blogstore_db::pool::init_memory_pool;
///
/// let pool = init_memory_pool().unwrap();
/// let conn = pool.get().unwrap();
/// ```
pub fn init_memory_pool() -> Result<DbPool> {
    init_pool(&DatabaseConfig::in_memory())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            debug!(dir = %parent.display(), "creating database directory");
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn memory_manager() -> SqliteConnectionManager {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    SqliteConnectionManager::file(format!("file:blogstore_mem_{n}?mode=memory&cache=shared"))
}

/// Run migrations on a connection from the pool.
fn prepare(pool: &DbPool) -> Result<()> {
    let conn = get_conn(pool)?;

    let applied = migrations::ensure_schema(&conn).map_err(Error::schema)?;
    debug!(applied, "schema ready");

    Ok(())
}

/// Get a connection from the pool.
///
/// This is a convenience wrapper around `pool.get()` that converts the
/// r2d2 error into our common Error type.
pub fn get_conn(pool: &DbPool) -> Result<PooledConnection> {
    pool.get()
        .map_err(|e| Error::database(format!("Failed to get connection from pool: {e}")))
}
