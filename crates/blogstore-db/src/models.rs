//! Rust structs mapping to database tables.
//!
//! Each model implements [`Entity`] so the generic store operations can
//! insert it and read it back from a `rusqlite::Row`.

use blogstore_common::timestamp::{micros_floor, to_storage_string, truncate_to_micros};
use blogstore_common::{CategoryId, PostId, Timestamp};
use chrono::{DateTime, FixedOffset};
use rusqlite::types::{Type, Value};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Rebuild a publication date from its UTC microseconds and offset seconds.
///
/// Both columns are plain integers, so every value `add` accepted reads
/// back exactly, including years outside 0..=9999 and offsets with seconds.
fn timestamp_from_columns(
    row: &rusqlite::Row,
    utc_idx: usize,
    offset_idx: usize,
) -> rusqlite::Result<Timestamp> {
    let micros: i64 = row.get(utc_idx)?;
    let offset_secs: i32 = row.get(offset_idx)?;

    let offset = FixedOffset::east_opt(offset_secs).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            offset_idx,
            Type::Integer,
            format!("UTC offset out of range: {offset_secs}s").into(),
        )
    })?;
    let utc = DateTime::from_timestamp_micros(micros).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            utc_idx,
            Type::Integer,
            format!("instant out of range: {micros}us").into(),
        )
    })?;

    Ok(utc.with_timezone(&offset))
}

/// A blog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Fields for inserting a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Entity for Category {
    type Id = CategoryId;
    type New = NewCategory;

    const KIND: &'static str = "category";
    const TABLE: &'static str = "category";
    const COLUMNS: &'static [&'static str] = &["name"];

    fn id(&self) -> CategoryId {
        self.id
    }

    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: CategoryId::new(row.get(0)?),
            name: row.get(1)?,
        })
    }

    fn insert_values(new: &NewCategory) -> Vec<Value> {
        vec![Value::Text(new.name.clone())]
    }

    fn with_id(id: CategoryId, new: NewCategory) -> Self {
        Self { id, name: new.name }
    }
}

/// A blog post. `publication_date` keeps the offset it was written with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub publication_date: Timestamp,
}

/// Fields for inserting a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub publication_date: Timestamp,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        publication_date: Timestamp,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            publication_date,
        }
    }
}

impl Entity for Post {
    type Id = PostId;
    type New = NewPost;

    const KIND: &'static str = "post";
    const TABLE: &'static str = "post";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "content",
        "publication_date",
        "publication_utc",
        "publication_offset",
    ];

    fn id(&self) -> PostId {
        self.id
    }

    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: PostId::new(row.get(0)?),
            title: row.get(1)?,
            content: row.get(2)?,
            publication_date: timestamp_from_columns(row, 4, 5)?,
        })
    }

    // Storage keeps microseconds; the caller gets back what a read returns.
    fn normalize(mut new: NewPost) -> NewPost {
        new.publication_date = truncate_to_micros(new.publication_date);
        new
    }

    fn insert_values(new: &NewPost) -> Vec<Value> {
        vec![
            Value::Text(new.title.clone()),
            Value::Text(new.content.clone()),
            Value::Text(to_storage_string(&new.publication_date)),
            Value::Integer(micros_floor(&new.publication_date)),
            Value::Integer(i64::from(new.publication_date.offset().local_minus_utc())),
        ]
    }

    fn with_id(id: PostId, new: NewPost) -> Self {
        Self {
            id,
            title: new.title,
            content: new.content,
            publication_date: new.publication_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogstore_common::parse_timestamp;

    #[test]
    fn post_insert_values_keep_offset_text() {
        let new = NewPost::new(
            "Hello",
            "World",
            parse_timestamp("2024-03-01T10:00:00+03:00").unwrap(),
        );
        let values = Post::insert_values(&new);
        assert_eq!(values.len(), Post::COLUMNS.len());
        assert_eq!(
            values[2],
            Value::Text("2024-03-01T10:00:00+03:00".to_string())
        );
        // 2024-03-01T07:00:00Z
        assert_eq!(values[3], Value::Integer(1_709_276_400_000_000));
        assert_eq!(values[4], Value::Integer(10_800));
    }

    #[test]
    fn post_normalize_truncates_below_micros() {
        let new = NewPost::new(
            "t",
            "c",
            parse_timestamp("2024-03-01T10:00:00.123456789+03:00").unwrap(),
        );
        let normalized = Post::normalize(new);
        assert_eq!(
            normalized.publication_date.timestamp_subsec_nanos(),
            123_456_000
        );
        assert_eq!(normalized.publication_date.offset().local_minus_utc(), 10_800);
    }

    #[test]
    fn category_values_match_columns() {
        let values = Category::insert_values(&NewCategory::new("Tech"));
        assert_eq!(values.len(), Category::COLUMNS.len());
        assert_eq!(values[0], Value::Text("Tech".to_string()));
    }

    #[test]
    fn post_serializes_with_offset() {
        let post = Post {
            id: PostId::new(1),
            title: "t".into(),
            content: "c".into(),
            publication_date: parse_timestamp("2024-03-01T10:00:00+03:00").unwrap(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["publication_date"], "2024-03-01T10:00:00+03:00");
    }
}
