// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Settings for a single audit run
/// Values default to the ones compiled in from config.yaml
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Width the key column is padded to in the report
    pub key_width: usize,

    /// Substring that marks a line as a string declaration
    pub string_marker: String,

    /// Log level used when RUST_LOG and -v are absent
    pub log_level: String,

    /// Drop blank lines from the ignore file instead of treating them as keys
    pub skip_blank_ignore_lines: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            key_width: compiled::KEY_WIDTH,
            string_marker: compiled::STRING_MARKER.to_string(),
            log_level: compiled::LOG_LEVEL.to_string(),
            skip_blank_ignore_lines: compiled::SKIP_BLANK_IGNORE_LINES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.key_width, 60);
        assert_eq!(config.string_marker, "<string");
        assert_eq!(config.log_level, "warn");
        assert!(config.skip_blank_ignore_lines);
    }
}
