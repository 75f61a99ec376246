//! Benchmark store queries with a 1000-post dataset.

use blogstore_common::{parse_timestamp, PostId};
use blogstore_db::models::Post;
use blogstore_db::pool::init_memory_pool;
use blogstore_db::queries::{categories, posts, store};
use chrono::{FixedOffset, TimeDelta};
use criterion::{criterion_group, criterion_main, Criterion};

fn setup() -> (
    r2d2::PooledConnection<r2d2_sqlite::SqliteConnectionManager>,
    PostId,
) {
    let pool = init_memory_pool().expect("pool");
    let conn = pool.get().expect("conn");

    // One post per hour starting at 2024-01-01, alternating offsets.
    let base = parse_timestamp("2024-01-01T00:00:00Z").unwrap();
    let offsets: Vec<FixedOffset> = [0, 3 * 3600, -8 * 3600, 9 * 3600 + 1800]
        .into_iter()
        .map(|secs| FixedOffset::east_opt(secs).unwrap())
        .collect();
    let mut first_id = None;
    for i in 0..1000 {
        let offset = offsets[i as usize % offsets.len()];
        let published = (base + TimeDelta::hours(i)).with_timezone(&offset);

        let post = posts::add_post(&conn, &format!("Post {i:04}"), "Body text", published).unwrap();
        if i == 0 {
            first_id = Some(post.id);
        }
    }

    for i in 0..100 {
        categories::add_category(&conn, &format!("Category {i}")).unwrap();
    }

    (conn, first_id.unwrap())
}

fn bench_db_queries(c: &mut Criterion) {
    let (conn, post_id) = setup();

    let start = parse_timestamp("2024-01-10T00:00:00+02:00").unwrap();
    let end = parse_timestamp("2024-01-20T00:00:00-05:00").unwrap();

    let mut group = c.benchmark_group("db_posts");

    group.bench_function("get_post_by_id", |b| {
        b.iter(|| {
            posts::get_post(&conn, post_id).unwrap();
        });
    });

    group.bench_function("list_posts", |b| {
        b.iter(|| {
            posts::list_posts(&conn).unwrap();
        });
    });

    group.bench_function("find_posts_in_date_range", |b| {
        b.iter(|| {
            posts::find_posts_in_date_range(&conn, start, end).unwrap();
        });
    });

    group.bench_function("list_categories", |b| {
        b.iter(|| {
            categories::list_categories(&conn).unwrap();
        });
    });

    group.bench_function("count_posts", |b| {
        b.iter(|| {
            store::count::<Post>(&conn).unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_db_queries);
criterion_main!(benches);
