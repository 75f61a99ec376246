//! Generic CRUD over any [`Entity`] kind.
//!
//! Absence is a normal outcome: [`get_by_id`] yields `None` and
//! [`remove_by_id`] yields `false`. Only failures to reach or use the
//! database surface as [`Error::Database`].

use blogstore_common::{Error, Result};
use rusqlite::Connection;
use tracing::debug;

use crate::entity::{insert_sql, select_list, Entity};

/// Insert a new row and return it with its engine-assigned id.
pub fn add<E: Entity>(conn: &Connection, new: E::New) -> Result<E> {
    let new = E::normalize(new);

    conn.execute(
        &insert_sql::<E>(),
        rusqlite::params_from_iter(E::insert_values(&new)),
    )
    .map_err(|e| Error::database(e.to_string()))?;

    let id = E::Id::from(conn.last_insert_rowid());
    debug!(kind = E::KIND, %id, "inserted");

    Ok(E::with_id(id, new))
}

/// Get a row by id.
///
/// # Returns
///
/// * `Ok(Some(E))` - The entity if found
/// * `Ok(None)` - If no row has this id
/// * `Err(Error)` - If a database error occurs
pub fn get_by_id<E: Entity>(conn: &Connection, id: E::Id) -> Result<Option<E>> {
    let sql = format!("SELECT {} FROM {} WHERE id = ?1", select_list::<E>(), E::TABLE);
    let raw: i64 = id.into();

    match conn.query_row(&sql, [raw], E::from_row) {
        Ok(entity) => Ok(Some(entity)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Delete a row by id.
///
/// # Returns
///
/// * `Ok(true)` - If the row was deleted
/// * `Ok(false)` - If no row had this id
/// * `Err(Error)` - If a database error occurs
pub fn remove_by_id<E: Entity>(conn: &Connection, id: E::Id) -> Result<bool> {
    let raw: i64 = id.into();
    let n = conn
        .execute(&format!("DELETE FROM {} WHERE id = ?1", E::TABLE), [raw])
        .map_err(|e| Error::database(e.to_string()))?;

    debug!(kind = E::KIND, %id, removed = n > 0, "remove by id");
    Ok(n > 0)
}

/// List every row of this kind, in whatever order the engine returns them.
pub fn list_all<E: Entity>(conn: &Connection) -> Result<Vec<E>> {
    let sql = format!("SELECT {} FROM {}", select_list::<E>(), E::TABLE);
    query_list(conn, &sql, rusqlite::params![])
}

/// Count rows of this kind.
pub fn count<E: Entity>(conn: &Connection) -> Result<i64> {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", E::TABLE), [], |row| {
        row.get(0)
    })
    .map_err(|e| Error::database(e.to_string()))
}

/// Run a SELECT whose column list is [`select_list`] and collect entities.
pub(crate) fn query_list<E: Entity, P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Vec<E>> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map(params, E::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}
