//! Configuration persistence.

use anyhow::{Context, Result};
use std::path::Path;

/// Write the config to a TOML file, creating parent directories as needed.
///
/// Refuses to replace an existing file unless `overwrite` is set.
pub fn save_config(path: &Path, config: &super::Config, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        anyhow::bail!("Config file already exists: {:?}", path);
    }

    let content = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config, Config};

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("blogstore.toml");

        let mut config = Config::default();
        config.database.url = ":memory:".to_string();
        config.demo.category_name = "Tech".to_string();
        save_config(&path, &config, false).unwrap();

        let loaded = load_config(&path).unwrap();
        assert!(loaded.database.is_memory());
        assert_eq!(loaded.demo.category_name, "Tech");
        assert_eq!(loaded.demo.range_start, config.demo.range_start);
    }

    #[test]
    fn refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blogstore.toml");

        save_config(&path, &Config::default(), false).unwrap();
        assert!(save_config(&path, &Config::default(), false).is_err());
        assert!(save_config(&path, &Config::default(), true).is_ok());
    }
}
