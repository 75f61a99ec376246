//! Database migrations module
//!
//! This module handles SQLite schema migrations for blogstore.
//! Migrations are embedded in the binary and executed in order. Applied
//! steps are recorded in the `schema_migrations` ledger; the ledger is
//! checked against this build's steps before anything is applied.

use rusqlite::{Connection, Result};
use thiserror::Error;
use tracing::{debug, info};

/// Migration error types
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Migration ledger references unknown migration {version} ({name})")]
    UnknownMigration { version: i64, name: String },

    #[error("Migration {version} is recorded as '{found}' but expected '{expected}'")]
    NameMismatch {
        version: i64,
        expected: &'static str,
        found: String,
    },

    #[error("Migration {version} failed: {message}")]
    Failed { version: i64, message: String },
}

/// A single migration with its SQL content
struct Migration {
    version: i64,
    name: &'static str,
    sql: &'static str,
}

/// All available migrations
const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "initial",
        sql: include_str!("001_initial.sql"),
    },
    Migration {
        version: 2,
        name: "post_publication_index",
        sql: include_str!("002_post_publication_index.sql"),
    },
    Migration {
        version: 3,
        name: "post_publication_offset",
        sql: include_str!("003_post_publication_offset.sql"),
    },
];

/// A row of the migration ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMigration {
    pub version: i64,
    pub name: String,
    pub applied_at: String,
}

/// Initialize the migrations table if it doesn't exist
fn init_migrations_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;
    Ok(())
}

/// Get the current schema version
fn get_current_version(conn: &Connection) -> Result<i64> {
    match conn.query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
        row.get::<_, Option<i64>>(0)
    }) {
        Ok(Some(version)) => Ok(version),
        Ok(None) => Ok(0),
        Err(e) => Err(e),
    }
}

fn read_ledger(conn: &Connection) -> Result<Vec<AppliedMigration>> {
    let mut stmt =
        conn.prepare("SELECT version, name, applied_at FROM schema_migrations ORDER BY version")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(AppliedMigration {
                version: row.get(0)?,
                name: row.get(1)?,
                applied_at: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;
    Ok(rows)
}

/// Every ledger entry must name a step this build knows, under the same name.
fn verify_ledger(applied: &[AppliedMigration]) -> Result<(), SchemaError> {
    for entry in applied {
        let known = MIGRATIONS.iter().find(|m| m.version == entry.version);
        match known {
            None => {
                return Err(SchemaError::UnknownMigration {
                    version: entry.version,
                    name: entry.name.clone(),
                })
            }
            Some(m) if m.name != entry.name => {
                return Err(SchemaError::NameMismatch {
                    version: entry.version,
                    expected: m.name,
                    found: entry.name.clone(),
                })
            }
            Some(_) => {}
        }
    }
    Ok(())
}

/// Apply a single migration
fn apply_migration(conn: &Connection, migration: &Migration) -> Result<(), SchemaError> {
    conn.execute_batch(migration.sql)
        .map_err(|e| SchemaError::Failed {
            version: migration.version,
            message: e.to_string(),
        })?;

    conn.execute(
        "INSERT INTO schema_migrations (version, name) VALUES (?1, ?2)",
        rusqlite::params![migration.version, migration.name],
    )
    .map_err(|e| SchemaError::Failed {
        version: migration.version,
        message: e.to_string(),
    })?;

    Ok(())
}

/// Bring the database up to the latest schema.
///
/// This function will:
/// 1. Create the ledger table if it doesn't exist
/// 2. Reject a ledger that references steps unknown to this build
/// 3. Apply each missing step in order, each inside its own transaction
///
/// Safe to call on every start. A step that fails is rolled back together
/// with its ledger row, so calling again after a failure resumes cleanly.
///
/// # Returns
///
/// * `Ok(usize)` - Number of migrations applied (0 when already current)
/// * `Err(SchemaError)` - If the ledger is corrupt or any step fails
pub fn ensure_schema(conn: &Connection) -> Result<usize, SchemaError> {
    init_migrations_table(conn)?;

    let applied = read_ledger(conn)?;
    verify_ledger(&applied)?;

    let pending: Vec<_> = MIGRATIONS
        .iter()
        .filter(|m| !applied.iter().any(|a| a.version == m.version))
        .collect();

    if pending.is_empty() {
        debug!(version = latest_version(), "schema is current");
        return Ok(0);
    }

    let mut applied_count = 0;
    for migration in pending {
        let tx = conn.unchecked_transaction()?;

        apply_migration(&tx, migration)?;

        tx.commit().map_err(|e| SchemaError::Failed {
            version: migration.version,
            message: e.to_string(),
        })?;

        applied_count += 1;

        info!(
            version = migration.version,
            name = migration.name,
            "applied migration"
        );
    }

    Ok(applied_count)
}

/// Get the current schema version without applying migrations
pub fn current_version(conn: &Connection) -> Result<i64, SchemaError> {
    init_migrations_table(conn)?;

    Ok(get_current_version(conn)?)
}

/// List the ledger entries in version order
pub fn applied_migrations(conn: &Connection) -> Result<Vec<AppliedMigration>, SchemaError> {
    init_migrations_table(conn)?;

    Ok(read_ledger(conn)?)
}

/// Get the latest available migration version
pub fn latest_version() -> i64 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}
