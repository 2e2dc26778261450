// Error Types
// Failures that abort an audit run

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a string declaration line could not be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// No `"..."` token on the line
    MissingKey,
    /// No `>...<` span on the line
    MissingValue,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFailure::MissingKey => f.write_str("no quoted key"),
            ParseFailure::MissingValue => f.write_str("no >value< span"),
        }
    }
}

/// Errors raised while loading or diffing resource files
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("{}:{line_number}: {reason}: {line}", path.display())]
    Parse {
        path: PathBuf,
        line_number: usize,
        line: String,
        reason: ParseFailure,
    },

    #[error("ignored key {key:?} from {} is not in the reference strings", path.display())]
    MissingKey { key: String, path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output")]
    Output(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, DiffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_location() {
        let err = DiffError::Parse {
            path: PathBuf::from("values-de/strings.xml"),
            line_number: 12,
            line: "<string>Hallo</string>".to_string(),
            reason: ParseFailure::MissingKey,
        };
        assert_eq!(
            err.to_string(),
            "values-de/strings.xml:12: no quoted key: <string>Hallo</string>"
        );
    }

    #[test]
    fn test_missing_key_message() {
        let err = DiffError::MissingKey {
            key: "q".to_string(),
            path: PathBuf::from("ignore.txt"),
        };
        assert_eq!(
            err.to_string(),
            "ignored key \"q\" from ignore.txt is not in the reference strings"
        );
    }
}
