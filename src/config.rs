/// Optional TOML configuration file.
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::page::CARD_CLASS;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Class marker of the elements to color.
    pub class_name: String,
    pub title: String,
    /// Placeholder cards rendered when no labels are given.
    pub card_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            class_name: CARD_CLASS.to_string(),
            title: "cardtint preview".to_string(),
            card_count: 6,
        }
    }
}

impl Config {
    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Error::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the default config path inside the user's config directory.
/// Falls back to `./cardtint.toml` when no config dir is found.
pub fn default_config_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("cardtint").join("config.toml"),
        None => PathBuf::from("cardtint.toml"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.class_name, "card");
    }

    #[test]
    fn test_partial_file_merges_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "class_name = \"tile\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.class_name, "tile");
        assert_eq!(config.card_count, 6);
        assert_eq!(config.title, "cardtint preview");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "card_count = \"many\"").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_default_path_ends_with_file_name() {
        let path = default_config_path();
        assert!(path.ends_with("cardtint/config.toml") || path.ends_with("cardtint.toml"));
    }
}
