// Configuration loading module

use anyhow::{Context, Result};
use crate::core::AppConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Optional overrides read from a YAML file given with --config
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub key_width: Option<usize>,
    #[serde(default)]
    pub string_marker: Option<String>,
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub skip_blank_ignore_lines: Option<bool>,
}

impl ConfigFile {
    /// Overlay the fields that are set onto `base`
    pub fn apply(self, base: AppConfig) -> AppConfig {
        AppConfig {
            key_width: self.key_width.unwrap_or(base.key_width),
            string_marker: self.string_marker.unwrap_or(base.string_marker),
            log_level: self.log_level.unwrap_or(base.log_level),
            skip_blank_ignore_lines: self
                .skip_blank_ignore_lines
                .unwrap_or(base.skip_blank_ignore_lines),
        }
    }
}

pub fn parse_config(contents: &str) -> Result<ConfigFile> {
    // An empty YAML document deserializes as null
    if contents.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    let config = serde_yaml::from_str(contents).context("Failed to parse config YAML")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Invalid config: {}", path.display()))
}
