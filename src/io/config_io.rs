use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Get the config file path, respecting XDG_CONFIG_HOME.
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join("voidstack").join("config.toml")
}

fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read the config from a specific path. A missing file yields defaults;
/// a malformed file logs a diagnostic and yields defaults.
pub fn read_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<Config>(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("could not parse {}: {}", path.display(), e);
                Config::default()
            }
        },
        Err(_) => Config::default(),
    }
}

/// Read the config from the default location.
pub fn read_config() -> Config {
    read_config_from(&config_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = read_config_from(&tmp.path().join("config.toml"));
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn reads_color_overrides() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[ui.colors]\naccent = \"#FF00FF\"\n").unwrap();
        let config = read_config_from(&path);
        assert_eq!(config.ui.colors.get("accent").unwrap(), "#FF00FF");
    }

    #[test]
    fn malformed_config_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "not valid toml [[[").unwrap();
        let config = read_config_from(&path);
        assert!(config.ui.colors.is_empty());
    }
}
