use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Document filename used when nothing else is configured.
const DEFAULT_LIBRARY_FILENAME: &str = "library.txt";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Default library document, used when neither the CLI flag nor the
    /// environment names one.
    pub library_path: Option<PathBuf>,
}

pub fn load_config() -> AppConfig {
    load_config_from(&config_path())
}

fn load_config_from(path: &Path) -> AppConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return AppConfig::default();
    };
    toml::from_str(&contents).unwrap_or_default()
}

pub fn save_config(config: &AppConfig) -> std::io::Result<()> {
    save_config_to(&config_path(), config)
}

fn save_config_to(path: &Path, config: &AppConfig) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config).unwrap_or_default();
    std::fs::write(path, contents)
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("BOOKSHELF_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bookshelf")
        .join("config.toml")
}

/// Where the library document lives. First match wins: the CLI
/// override, `BOOKSHELF_LIBRARY_PATH`, the config file, then
/// `library.txt` in the working directory.
pub fn resolve_library_path(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_override {
        return path;
    }
    if let Ok(path) = std::env::var("BOOKSHELF_LIBRARY_PATH") {
        return PathBuf::from(path);
    }
    if let Some(path) = load_config().library_path {
        return path;
    }
    PathBuf::from(DEFAULT_LIBRARY_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml"));
        assert!(config.library_path.is_none());
    }

    #[test]
    fn test_unparsable_config_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "library_path = [not toml").unwrap();
        assert!(load_config_from(&path).library_path.is_none());
    }

    #[test]
    fn test_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            library_path: Some(PathBuf::from("/tmp/books.txt")),
        };

        save_config_to(&path, &config).unwrap();
        let loaded = load_config_from(&path);
        assert_eq!(loaded.library_path, config.library_path);
    }

    #[test]
    fn test_cli_override_wins() {
        let path = resolve_library_path(Some(PathBuf::from("override.txt")));
        assert_eq!(path, PathBuf::from("override.txt"));
    }
}
