// Ignore List
// Keys that are never translated (symbols, brand names)

use std::path::{Path, PathBuf};

use super::resource::read_lossy;
use crate::core::errors::Result;

/// Keys exempt from the translation check, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    /// File the keys came from, for error messages
    pub source: PathBuf,
    keys: Vec<String>,
}

impl IgnoreList {
    /// Parse one key per line with surrounding whitespace trimmed
    ///
    /// With `skip_blank` unset a blank line is kept as the empty key, which
    /// no reference declaration can match.
    pub fn parse(content: &str, source: &Path, skip_blank: bool) -> Self {
        let keys = content
            .lines()
            .map(str::trim)
            .filter(|line| !(skip_blank && line.is_empty()))
            .map(str::to_string)
            .collect();

        Self {
            source: source.to_path_buf(),
            keys,
        }
    }

    /// Read an ignore list from disk
    pub fn load(path: &Path, skip_blank: bool) -> Result<Self> {
        let content = read_lossy(path)?;
        Ok(Self::parse(&content, path, skip_blank))
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
