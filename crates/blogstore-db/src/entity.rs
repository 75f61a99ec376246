//! Entity-kind capabilities shared by the generic store operations.
//!
//! An [`Entity`] describes one table: its name, the data columns written on
//! insert, how to bind insert fields, and how to read a row back. The
//! generic functions in [`crate::queries::store`] work for any implementor,
//! so adding a third entity kind means one more `impl`, not another copy of
//! the CRUD code.

use rusqlite::types::Value;
use rusqlite::Row;

/// A persisted record kind with an engine-assigned integer id.
pub trait Entity: Sized {
    /// Typed id wrapper.
    type Id: Copy + std::fmt::Display + From<i64> + Into<i64>;

    /// Field values supplied on insert (everything except the id).
    type New;

    /// Singular name used in logs and errors.
    const KIND: &'static str;

    /// Table holding this kind.
    const TABLE: &'static str;

    /// Data columns in insert order. The id column is always `id` and is
    /// never listed here.
    const COLUMNS: &'static [&'static str];

    /// Id of this entity.
    fn id(&self) -> Self::Id;

    /// Build from a row selected as `id, COLUMNS...`.
    fn from_row(row: &Row) -> rusqlite::Result<Self>;

    /// Normalize insert fields to what storage will hold.
    fn normalize(new: Self::New) -> Self::New {
        new
    }

    /// One value per entry of [`Entity::COLUMNS`].
    fn insert_values(new: &Self::New) -> Vec<Value>;

    /// Combine the assigned id with the inserted fields.
    fn with_id(id: Self::Id, new: Self::New) -> Self;
}

/// `id, col1, col2, ...` for a SELECT list.
pub(crate) fn select_list<E: Entity>() -> String {
    std::iter::once("id")
        .chain(E::COLUMNS.iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `INSERT INTO table (cols) VALUES (?1, ?2, ...)`.
pub(crate) fn insert_sql<E: Entity>() -> String {
    let placeholders = (1..=E::COLUMNS.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        E::TABLE,
        E::COLUMNS.join(", "),
        placeholders
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Post};

    #[test]
    fn category_sql() {
        assert_eq!(select_list::<Category>(), "id, name");
        assert_eq!(
            insert_sql::<Category>(),
            "INSERT INTO category (name) VALUES (?1)"
        );
    }

    #[test]
    fn post_sql() {
        assert_eq!(
            select_list::<Post>(),
            "id, title, content, publication_date, publication_utc, publication_offset"
        );
        assert_eq!(
            insert_sql::<Post>(),
            "INSERT INTO post (title, content, publication_date, publication_utc, publication_offset) VALUES (?1, ?2, ?3, ?4, ?5)"
        );
    }
}
