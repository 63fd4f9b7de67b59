//! UI configuration.
//!
//! Loaded from `<config dir>/cvsh/config.toml`. A missing file means
//! defaults; a malformed one is a real error so a typo does not
//! silently reset the owner's settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for the interactive session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Render the ID card on startup and after `clear`.
    pub show_card: bool,

    /// Total card width in columns.
    pub card_width: usize,

    /// Force color on or off; `None` means follow TTY detection.
    pub color: Option<bool>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_card: true,
            card_width: 46,
            color: None,
        }
    }
}

impl UiConfig {
    /// Default config file location.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cvsh")
            .join("config.toml")
    }

    /// Load from the default location, defaults when absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load from an explicit path, defaults when absent.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let config = UiConfig::load_from(&PathBuf::from("/nonexistent/cvsh.toml")).unwrap();
        assert!(config.show_card);
        assert_eq!(config.card_width, 46);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "card_width = 60").unwrap();
        let config = UiConfig::load_from(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.card_width, 60);
        assert!(config.show_card);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "card_width = \"wide\"").unwrap();
        assert!(UiConfig::load_from(&file.path().to_path_buf()).is_err());
    }
}
