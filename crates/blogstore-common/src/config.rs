//! Database connection configuration.
//!
//! [`DatabaseConfig`] is passed explicitly to the pool constructor; nothing in
//! the workspace reads connection settings from ambient state.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// In-memory SQLite target.
pub const MEMORY_URL: &str = ":memory:";

/// Connection settings for the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite target: a file path or `:memory:`.
    #[serde(default = "default_url")]
    pub url: String,

    /// Number of pooled connections. The store is used by a single caller,
    /// so one connection is the default.
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,

    /// Seconds to wait for a connection before giving up.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_url() -> String {
    "blog.db".to_string()
}

fn default_pool_size() -> u32 {
    1
}

fn default_connect_timeout_secs() -> u64 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            pool_size: default_pool_size(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl DatabaseConfig {
    /// Configuration targeting a private in-memory database.
    pub fn in_memory() -> Self {
        Self {
            url: MEMORY_URL.to_string(),
            ..Self::default()
        }
    }

    /// Configuration targeting a database file.
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            url: path.into(),
            ..Self::default()
        }
    }

    /// Whether this points at an in-memory database.
    pub fn is_memory(&self) -> bool {
        self.url == MEMORY_URL
    }

    /// Reject settings that cannot open a pool.
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(Error::validation("database.url cannot be empty"));
        }
        if self.pool_size == 0 {
            return Err(Error::validation("database.pool_size must be at least 1"));
        }
        if self.connect_timeout_secs == 0 {
            return Err(Error::validation(
                "database.connect_timeout_secs must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url, "blog.db");
        assert_eq!(config.pool_size, 1);
        assert_eq!(config.connect_timeout_secs, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_in_memory() {
        let config = DatabaseConfig::in_memory();
        assert!(config.is_memory());
        assert!(!DatabaseConfig::file("/tmp/blog.db").is_memory());
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let config = DatabaseConfig::file("  ");
        assert!(matches!(config.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_zero_pool() {
        let config = DatabaseConfig {
            pool_size: 0,
            ..DatabaseConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let config: DatabaseConfig = serde_json::from_str(r#"{"url": ":memory:"}"#).unwrap();
        assert!(config.is_memory());
        assert_eq!(config.pool_size, 1);
    }
}
