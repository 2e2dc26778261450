// Configuration validation module

use crate::config::load_config;
use anyhow::{bail, Result};
use crate::core::AppConfig;
use std::path::Path;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Load the optional config file over the compiled defaults and validate the result
pub fn load_and_validate_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => load_config(path)?.apply(AppConfig::default()),
        None => AppConfig::default(),
    };

    validate(&config)?;
    Ok(config)
}

pub fn validate(config: &AppConfig) -> Result<()> {
    if config.key_width == 0 {
        bail!("key_width must be at least 1");
    }
    if config.string_marker.is_empty() {
        bail!("string_marker must not be empty");
    }
    if !LOG_LEVELS.contains(&config.log_level.as_str()) {
        bail!(
            "log_level must be one of {}, got {:?}",
            LOG_LEVELS.join(", "),
            config.log_level
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_valid() {
        assert!(validate(&AppConfig::default()).is_ok());
        assert_eq!(load_and_validate_config(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_zero_width_rejected() {
        let config = AppConfig {
            key_width: 0,
            ..AppConfig::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_bad_level_rejected() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..AppConfig::default()
        };
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_file_is_validated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-strings.yaml");
        fs::write(&path, "string_marker: \"\"\n").unwrap();

        assert!(load_and_validate_config(Some(&path)).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_and_validate_config(Some(&dir.path().join("nope.yaml"))).is_err());
    }
}
