// Resource Parsing
// Extracts key/value string declarations from line-oriented resource files

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::core::errors::{DiffError, ParseFailure, Result};

/// First double-quoted token on a line
static KEY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)""#).unwrap());

/// Text between the first `>` and the next `<`
static VALUE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r">([^<]*)<").unwrap());

/// A single string declaration read from a resource file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    /// 1-based line number in the source file
    pub line_number: usize,
    /// The declaration line with surrounding whitespace trimmed
    pub raw_line: String,
    /// Resource key (first quoted token)
    pub key: String,
    /// Inline text content
    pub value: String,
}

/// Pull the key and value out of a declaration line
pub fn parse_line(line: &str) -> std::result::Result<(&str, &str), ParseFailure> {
    let key = KEY_PATTERN
        .captures(line)
        .and_then(|c| c.get(1))
        .ok_or(ParseFailure::MissingKey)?;
    let value = VALUE_PATTERN
        .captures(line)
        .and_then(|c| c.get(1))
        .ok_or(ParseFailure::MissingValue)?;

    Ok((key.as_str(), value.as_str()))
}

/// Parse every line containing `marker` into a resource entry
///
/// `path` is only used to label errors.
pub fn parse_resource(content: &str, marker: &str, path: &Path) -> Result<Vec<ResourceEntry>> {
    let mut entries = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if !line.contains(marker) {
            continue;
        }

        let raw_line = line.trim();
        let (key, value) = parse_line(raw_line).map_err(|reason| DiffError::Parse {
            path: path.to_path_buf(),
            line_number: idx + 1,
            line: raw_line.to_string(),
            reason,
        })?;

        entries.push(ResourceEntry {
            line_number: idx + 1,
            raw_line: raw_line.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    Ok(entries)
}

/// Read a text file, replacing bytes that are not valid UTF-8 with U+FFFD
pub(crate) fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| DiffError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(path = %path.display(), "file is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    })
}

/// Read and parse a resource file
pub fn load_resource(path: &Path, marker: &str) -> Result<Vec<ResourceEntry>> {
    let content = read_lossy(path)?;

    let entries = parse_resource(&content, marker, path)?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "parsed resource file");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "<string";

    #[test]
    fn test_parse_line() {
        let line = r#"<string name="app_name">Sudoku</string>"#;
        assert_eq!(parse_line(line), Ok(("app_name", "Sudoku")));
    }

    #[test]
    fn test_value_stops_at_next_angle_bracket() {
        let line = r#"<string name="hint">Tap <b>here</b></string>"#;
        assert_eq!(parse_line(line), Ok(("hint", "Tap ")));
    }

    #[test]
    fn test_empty_value() {
        let line = r#"<string name="blank"></string>"#;
        assert_eq!(parse_line(line), Ok(("blank", "")));
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(parse_line("<string>oops</string>"), Err(ParseFailure::MissingKey));
        assert_eq!(
            parse_line(r#"<string name="half>oops</string>"#),
            Err(ParseFailure::MissingKey)
        );
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            parse_line(r#"<string name="open">"#),
            Err(ParseFailure::MissingValue)
        );
    }

    #[test]
    fn test_parse_resource_skips_unmarked_lines() {
        let content = r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <string name="a">Hello</string>
    <!-- comment -->
    <string name="b">World</string>
</resources>
"#;
        let entries = parse_resource(content, MARKER, Path::new("values/strings.xml")).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].line_number, 3);
        assert_eq!(entries[0].raw_line, r#"<string name="a">Hello</string>"#);
        assert_eq!(entries[0].key, "a");
        assert_eq!(entries[1].key, "b");
        assert_eq!(entries[1].value, "World");
    }

    #[test]
    fn test_parse_resource_reports_line() {
        let content = "<resources>\n  <string name=\"a\">ok</string>\n  <string>bad</string>\n";
        let err = parse_resource(content, MARKER, Path::new("strings.xml")).unwrap_err();

        match err {
            DiffError::Parse { line_number, line, reason, .. } => {
                assert_eq!(line_number, 3);
                assert_eq!(line, "<string>bad</string>");
                assert_eq!(reason, ParseFailure::MissingKey);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_custom_marker() {
        let content = "<item key=\"x\">1</item>\n<string name=\"y\">2</string>\n";
        let entries = parse_resource(content, "<item", Path::new("f")).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, "x");
    }

    #[test]
    fn test_load_latin1_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("strings.xml");
        std::fs::write(&path, b"<string name=\"cafe\">Caf\xe9</string>\n").unwrap();

        let entries = load_resource(&path, MARKER).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, "cafe");
        assert_eq!(entries[0].value, "Caf\u{fffd}");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_resource(Path::new("does/not/exist.xml"), MARKER).unwrap_err();
        assert!(matches!(err, DiffError::Io { .. }));
    }
}
