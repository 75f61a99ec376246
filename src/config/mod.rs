pub mod persist;
mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    resolve_paths(&mut config);

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./blogstore.toml",
        "~/.config/blogstore/config.toml",
        "/etc/blogstore/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    let mut config = Config::default();
    resolve_paths(&mut config);
    Ok(config)
}

/// Point the database at `url`, expanding `~` the same way file values are
pub fn override_database_url(config: &mut Config, url: &str) {
    config.database.url = url.to_string();
    resolve_paths(config);
}

fn resolve_paths(config: &mut Config) {
    if !config.database.is_memory() {
        config.database.url = shellexpand::tilde(&config.database.url).into_owned();
    }
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    config
        .database
        .validate()
        .context("Invalid [database] section")?;

    if config.logging.filter.trim().is_empty() {
        anyhow::bail!("logging.filter cannot be empty");
    }

    Ok(())
}

/// Non-fatal issues worth reporting once logging is up
pub fn config_warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.demo.range_start > config.demo.range_end {
        warnings.push(format!(
            "demo.range_start ({}) is after demo.range_end ({}); the range query will be empty",
            config.demo.range_start, config.demo.range_end
        ));
    }

    if config.database.pool_size > 1 {
        warnings.push(format!(
            "database.pool_size is {}; blogstore uses a single connection",
            config.database.pool_size
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_full_config() {
        let file = write_config(
            r#"
            [database]
            url = ":memory:"
            pool_size = 1
            connect_timeout_secs = 2

            [logging]
            filter = "blogstore=debug"

            [demo]
            category_name = "Tech"
            remove_category_id = 5
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert!(config.database.is_memory());
        assert_eq!(config.database.connect_timeout_secs, 2);
        assert_eq!(config.logging.filter, "blogstore=debug");
        assert_eq!(config.demo.category_name, "Tech");
        assert_eq!(config.demo.remove_category_id, 5);
        assert_eq!(config.demo.remove_post_id, 1);
    }

    #[test]
    fn load_rejects_empty_url() {
        let file = write_config("[database]\nurl = \"\"\n");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn load_rejects_bad_timestamp() {
        let file = write_config("[demo]\nrange_start = \"2024-01-01\"\n");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("nope.toml")).is_err());
    }

    #[test]
    fn tilde_is_expanded() {
        let file = write_config("[database]\nurl = \"~/blog.db\"\n");
        let config = load_config(file.path()).unwrap();
        if std::env::var_os("HOME").is_some() {
            assert!(!config.database.url.starts_with('~'));
        }
        assert!(config.database.url.ends_with("blog.db"));
    }

    #[test]
    fn override_keeps_memory_url() {
        let mut config = Config::default();
        override_database_url(&mut config, ":memory:");
        assert!(config.database.is_memory());
    }

    #[test]
    fn reversed_demo_range_warns() {
        let mut config = Config::default();
        std::mem::swap(&mut config.demo.range_start, &mut config.demo.range_end);

        let warnings = config_warnings(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("range query will be empty"));
    }

    #[test]
    fn default_config_has_no_warnings() {
        assert!(config_warnings(&Config::default()).is_empty());
    }
}
