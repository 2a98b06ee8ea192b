//! Runtime configuration.
//!
//! Settings come from an optional JSON file (`thodar.json` in the working
//! directory, or the path in `THODAR_CONFIG`). Every field has a default, so
//! a missing file or a partial one is fine. `THODAR_LOG_FILE` overrides the
//! log file location; an empty value disables logging.

use crate::observer::clamp_threshold;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "thodar.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Redraws per second while idle.
    pub framerate: f64,
    /// Rows scrolled per arrow key or wheel notch.
    pub scroll_step: u16,
    /// Share of a section that must be in view for it to become active.
    pub section_threshold: f32,
    /// Share of a block that must be in view before it is revealed.
    pub reveal_threshold: f32,
    /// Where tracing output goes. `None` disables logging.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            framerate: 30.0,
            scroll_step: 2,
            section_threshold: 0.5,
            reveal_threshold: 0.15,
            log_file: Some(PathBuf::from("thodar.log")),
        }
    }
}

impl Config {
    /// Loads the configuration file and applies environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os("THODAR_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        if let Some(log_file) = std::env::var_os("THODAR_LOG_FILE") {
            config.log_file = if log_file.is_empty() {
                None
            } else {
                Some(PathBuf::from(log_file))
            };
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw)?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        if !(self.framerate.is_finite() && self.framerate > 0.0) {
            self.framerate = Self::default().framerate;
        }
        self.scroll_step = self.scroll_step.max(1);
        self.section_threshold = clamp_threshold(self.section_threshold);
        self.reveal_threshold = clamp_threshold(self.reveal_threshold);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_overrides_named_fields() {
        let config = Config::from_json(r#"{ "scroll_step": 5, "log_file": null }"#).unwrap();
        assert_eq!(config.scroll_step, 5);
        assert_eq!(config.log_file, None);
        assert_eq!(config.section_threshold, 0.5);
    }

    #[test]
    fn out_of_range_values_are_normalized() {
        let config = Config::from_json(
            r#"{ "framerate": -1, "scroll_step": 0, "section_threshold": 4.0, "reveal_threshold": 0 }"#,
        )
        .unwrap();
        assert_eq!(config.framerate, 30.0);
        assert_eq!(config.scroll_step, 1);
        assert_eq!(config.section_threshold, 1.0);
        assert!(config.reveal_threshold > 0.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Config::from_json("{ scroll_step: }").is_err());
        assert!(Config::from_json(r#"{ "colour": "teal" }"#).is_err());
    }
}
