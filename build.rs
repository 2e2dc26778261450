// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const KEY_WIDTH: usize = {key_width};
pub const STRING_MARKER: &str = {string_marker:?};
pub const LOG_LEVEL: &str = {log_level:?};
pub const SKIP_BLANK_IGNORE_LINES: bool = {skip_blank_ignore_lines};
"#,
        key_width = config.key_width,
        string_marker = config.string_marker,
        log_level = config.log_level,
        skip_blank_ignore_lines = config.skip_blank_ignore_lines,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    key_width: usize,
    string_marker: String,
    log_level: String,
    skip_blank_ignore_lines: bool,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            key_width: 60,
            string_marker: "<string".to_string(),
            log_level: "warn".to_string(),
            skip_blank_ignore_lines: true,
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_report = false;
    let mut in_parser = false;
    let mut in_logging = false;
    let mut in_ignore = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // Track which section we're in
        if trimmed.starts_with("report:") {
            in_report = true;
            in_parser = false;
            in_logging = false;
            in_ignore = false;
            continue;
        } else if trimmed.starts_with("parser:") {
            in_report = false;
            in_parser = true;
            in_logging = false;
            in_ignore = false;
            continue;
        } else if trimmed.starts_with("logging:") {
            in_report = false;
            in_parser = false;
            in_logging = true;
            in_ignore = false;
            continue;
        } else if trimmed.starts_with("ignore:") {
            in_report = false;
            in_parser = false;
            in_logging = false;
            in_ignore = true;
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            if in_report {
                if key == "key_width" {
                    config.key_width = value.parse().unwrap_or(60);
                }
            } else if in_parser {
                if key == "string_marker" {
                    config.string_marker = unquote(value).to_string();
                }
            } else if in_logging && key == "level" {
                config.log_level = unquote(value).to_string();
            } else if in_ignore && key == "skip_blank_lines" {
                config.skip_blank_ignore_lines = parse_bool(value);
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    // Skip comments and empty lines
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}

fn unquote(s: &str) -> &str {
    s.trim().trim_matches('"').trim_matches('\'')
}
