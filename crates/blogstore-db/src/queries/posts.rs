//! Post CRUD operations and publication-date range queries.

use blogstore_common::timestamp::{micros_ceil, micros_floor};
use blogstore_common::{PostId, Result, Timestamp};
use rusqlite::Connection;
use tracing::debug;

use super::store;
use crate::entity::{select_list, Entity};
use crate::models::{NewPost, Post};

/// Create a new post.
///
/// The publication date is stored with its offset. Precision below one
/// microsecond is dropped, and the returned post reflects that.
pub fn add_post(
    conn: &Connection,
    title: &str,
    content: &str,
    publication_date: Timestamp,
) -> Result<Post> {
    store::add(conn, NewPost::new(title, content, publication_date))
}

/// Get a post by ID.
pub fn get_post(conn: &Connection, id: PostId) -> Result<Option<Post>> {
    store::get_by_id(conn, id)
}

/// Delete a post. Returns `false` if it did not exist.
pub fn remove_post(conn: &Connection, id: PostId) -> Result<bool> {
    store::remove_by_id::<Post>(conn, id)
}

/// List all posts.
pub fn list_posts(conn: &Connection) -> Result<Vec<Post>> {
    store::list_all(conn)
}

/// Posts published within `[start, end]`, both ends inclusive.
///
/// Bounds are compared as absolute instants, so offsets on the bounds and on
/// stored posts do not matter. A reversed range yields an empty list.
/// Results are ordered by publication instant, then id.
pub fn find_posts_in_date_range(
    conn: &Connection,
    start: Timestamp,
    end: Timestamp,
) -> Result<Vec<Post>> {
    if start > end {
        debug!(%start, %end, "reversed range");
        return Ok(Vec::new());
    }

    // Stored instants are whole microseconds; round the bounds inward.
    let lower = micros_ceil(&start);
    let upper = micros_floor(&end);

    let sql = format!(
        "SELECT {} FROM {} WHERE publication_utc BETWEEN ?1 AND ?2
         ORDER BY publication_utc, id",
        select_list::<Post>(),
        Post::TABLE
    );
    let posts: Vec<Post> = store::query_list(conn, &sql, rusqlite::params![lower, upper])?;

    debug!(%start, %end, found = posts.len(), "date range query");
    Ok(posts)
}
