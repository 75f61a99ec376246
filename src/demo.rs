//! Fixed demo sequence over the store.
//!
//! Adds a category, removes one by id, lists categories, then does the same
//! for posts and finishes with a publication-date range query. A failing
//! step is logged and recorded in the report; the remaining steps still run.

use blogstore_common::{CategoryId, PostId, Result, Timestamp};
use blogstore_db::models::{Category, Post};
use blogstore_db::queries::{categories, posts};
use rusqlite::Connection;
use std::fmt::Write;

use crate::config::DemoConfig;

/// Result of one demo step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Completed; output lines for the console
    Done(Vec<String>),
    /// Aborted with this error message
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoStep {
    pub name: &'static str,
    pub outcome: StepOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoReport {
    pub steps: Vec<DemoStep>,
}

impl DemoReport {
    /// Number of steps that failed
    pub fn failures(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, StepOutcome::Failed(_)))
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }

    /// Console text for the whole run
    pub fn render(&self) -> String {
        let mut out = String::new();
        for step in &self.steps {
            match &step.outcome {
                StepOutcome::Done(lines) => {
                    for line in lines {
                        let _ = writeln!(out, "{line}");
                    }
                }
                StepOutcome::Failed(message) => {
                    let _ = writeln!(out, "Step '{}' failed: {message}", step.name);
                }
            }
        }
        out
    }

    fn record(&mut self, name: &'static str, result: Result<Vec<String>>) {
        let outcome = match result {
            Ok(lines) => {
                tracing::debug!(step = name, "demo step finished");
                StepOutcome::Done(lines)
            }
            Err(e) => {
                tracing::error!(step = name, error = %e, "demo step failed");
                StepOutcome::Failed(e.to_string())
            }
        };
        self.steps.push(DemoStep { name, outcome });
    }
}

pub fn format_category(category: &Category) -> String {
    format!("Id: {}, Name: {}", category.id, category.name)
}

pub fn format_post(post: &Post) -> String {
    format!(
        "Id: {}, Title: {}, Content: {}, Publication Date: {}",
        post.id, post.title, post.content, post.publication_date
    )
}

/// Run the demo sequence. `now` is the publication date of the added post.
pub fn run_demo(conn: &Connection, config: &DemoConfig, now: Timestamp) -> DemoReport {
    let mut report = DemoReport::default();

    report.record(
        "add category",
        categories::add_category(conn, &config.category_name)
            .map(|c| vec![format!("Category added (id {}).", c.id)]),
    );

    let category_id = CategoryId::new(config.remove_category_id);
    report.record(
        "remove category",
        categories::remove_category(conn, category_id).map(|removed| {
            vec![if removed {
                format!("Category {category_id} removed.")
            } else {
                format!("Category {category_id} not found.")
            }]
        }),
    );

    report.record(
        "list categories",
        categories::list_categories(conn).map(|all| {
            std::iter::once("Categories:".to_string())
                .chain(all.iter().map(format_category))
                .collect()
        }),
    );

    report.record(
        "add post",
        posts::add_post(conn, &config.post_title, &config.post_content, now)
            .map(|p| vec![format!("Post added (id {}).", p.id)]),
    );

    let post_id = PostId::new(config.remove_post_id);
    report.record(
        "remove post",
        posts::remove_post(conn, post_id).map(|removed| {
            vec![if removed {
                format!("Post {post_id} removed.")
            } else {
                format!("Post {post_id} not found.")
            }]
        }),
    );

    report.record(
        "list posts",
        posts::list_posts(conn).map(|all| {
            std::iter::once("Posts:".to_string())
                .chain(all.iter().map(format_post))
                .collect()
        }),
    );

    report.record(
        "posts in range",
        posts::find_posts_in_date_range(conn, config.range_start, config.range_end).map(|found| {
            std::iter::once(format!(
                "Posts published from {} to {}:",
                config.range_start, config.range_end
            ))
            .chain(found.iter().map(format_post))
            .collect()
        }),
    );

    tracing::info!(
        steps = report.steps.len(),
        failures = report.failures(),
        "demo finished"
    );
    report
}
