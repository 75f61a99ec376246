use blogstore_common::{DatabaseConfig, Timestamp};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber` filter directives, used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "blogstore=info,blogstore_db=warn".to_string()
}

/// Inputs for the demo sequence. The ids are example values only.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DemoConfig {
    #[serde(default = "default_category_name")]
    pub category_name: String,

    #[serde(default = "default_remove_id")]
    pub remove_category_id: i64,

    #[serde(default = "default_post_title")]
    pub post_title: String,

    #[serde(default = "default_post_content")]
    pub post_content: String,

    #[serde(default = "default_remove_id")]
    pub remove_post_id: i64,

    /// Inclusive lower bound of the publication-date query
    #[serde(default = "default_range_start")]
    pub range_start: Timestamp,

    /// Inclusive upper bound of the publication-date query
    #[serde(default = "default_range_end")]
    pub range_end: Timestamp,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            category_name: default_category_name(),
            remove_category_id: default_remove_id(),
            post_title: default_post_title(),
            post_content: default_post_content(),
            remove_post_id: default_remove_id(),
            range_start: default_range_start(),
            range_end: default_range_end(),
        }
    }
}

fn default_category_name() -> String {
    "New Category".to_string()
}

fn default_post_title() -> String {
    "New Post Title".to_string()
}

fn default_post_content() -> String {
    "New Post Content".to_string()
}

fn default_remove_id() -> i64 {
    1
}

/// 2024-01-01T00:00:00+00:00
fn default_range_start() -> Timestamp {
    (DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(1_704_067_200)).fixed_offset()
}

/// 2024-05-31T23:59:59+00:00
fn default_range_end() -> Timestamp {
    (DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(1_717_199_999)).fixed_offset()
}
