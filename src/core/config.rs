//! User configuration loaded from `<config dir>/gitgrep/config.json`.
//!
//! Every field has a default, so a missing file or a partial file is fine.
//! `GITGREP_CONFIG` points at an alternative file.

use crate::core::dirs::get_config_directory;
use crate::core::error::{GitGrepError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "GITGREP_CONFIG";
const CONFIG_FILE: &str = "config.json";
const FALLBACK_EDITOR: &str = "vi";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GrepConfig {
    /// Editor command used to open a confirmed match
    pub editor: Option<String>,
    pub open_in_editor: bool,
    pub ignore_case: bool,
    /// Passed to `git grep` ahead of the pattern
    pub extra_args: Vec<String>,
}

impl GrepConfig {
    pub fn config_path() -> Result<PathBuf> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(get_config_directory()?.join(CONFIG_FILE)),
        }
    }

    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(e) => {
                log::debug!("No config directory, using defaults: {e}");
                return Ok(Self::default());
            }
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| GitGrepError::config_read(path, e))?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| GitGrepError::config_parse(path, e))?;
        log::debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Configured editor, then `$VISUAL`, then `$EDITOR`, then `vi`
    pub fn editor_command(&self) -> String {
        self.editor
            .clone()
            .filter(|e| !e.trim().is_empty())
            .or_else(|| std::env::var("VISUAL").ok().filter(|e| !e.trim().is_empty()))
            .or_else(|| std::env::var("EDITOR").ok().filter(|e| !e.trim().is_empty()))
            .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = GrepConfig::load_from(&temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, GrepConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "ignore_case": true, "extra_args": ["-w"] }"#).unwrap();

        let config = GrepConfig::load_from(&path).unwrap();
        assert!(config.ignore_case);
        assert!(!config.open_in_editor);
        assert_eq!(config.extra_args, vec!["-w".to_string()]);
        assert_eq!(config.editor, None);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        match GrepConfig::load_from(&path) {
            Err(GitGrepError::ConfigParse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected ConfigParse error, got: {:?}", other),
        }
    }

    #[test]
    fn test_configured_editor_wins() {
        let config = GrepConfig {
            editor: Some("nvim".to_string()),
            ..GrepConfig::default()
        };
        assert_eq!(config.editor_command(), "nvim");
    }
}
