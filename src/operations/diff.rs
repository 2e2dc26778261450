// Diff Engine
// Reference strings minus translated keys minus ignored keys

use indexmap::IndexMap;

use super::ignore::IgnoreList;
use super::resource::ResourceEntry;
use crate::core::errors::{DiffError, Result};

/// A target entry whose key does not exist in the reference strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleEntry {
    /// Trimmed declaration line from the target file
    pub raw_line: String,
    /// The unknown key
    pub key: String,
    /// 1-based line number in the target file
    pub line_number: usize,
}

impl From<&ResourceEntry> for StaleEntry {
    fn from(entry: &ResourceEntry) -> Self {
        Self {
            raw_line: entry.raw_line.clone(),
            key: entry.key.clone(),
            line_number: entry.line_number,
        }
    }
}

/// Reference key -> value mapping that shrinks as keys are accounted for
///
/// Iteration order is the order keys first appeared in the reference file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringDiff {
    remaining: IndexMap<String, String>,
}

impl StringDiff {
    /// Build the mapping from reference entries; a repeated key keeps its
    /// first position and takes the last value
    pub fn from_reference(entries: &[ResourceEntry]) -> Self {
        let mut remaining = IndexMap::with_capacity(entries.len());
        for entry in entries {
            remaining.insert(entry.key.clone(), entry.value.clone());
        }
        Self { remaining }
    }

    /// Remove one translated key, returning a stale entry if it is unknown
    pub fn remove_translated(&mut self, entry: &ResourceEntry) -> Option<StaleEntry> {
        match self.remaining.shift_remove(&entry.key) {
            Some(_) => None,
            None => Some(StaleEntry::from(entry)),
        }
    }

    /// Remove every key of the target file in order, handing each stale entry
    /// to `on_stale` as soon as it is found
    ///
    /// Stops at the first error from `on_stale`. Returns the number of stale entries.
    pub fn remove_translated_with<E, F>(
        &mut self,
        target: &[ResourceEntry],
        mut on_stale: F,
    ) -> std::result::Result<usize, E>
    where
        F: FnMut(StaleEntry) -> std::result::Result<(), E>,
    {
        let mut stale = 0;
        for entry in target {
            if let Some(entry) = self.remove_translated(entry) {
                stale += 1;
                on_stale(entry)?;
            }
        }
        Ok(stale)
    }

    /// Remove every ignored key; a key that is not present is an error
    pub fn remove_ignored(&mut self, ignore: &IgnoreList) -> Result<()> {
        for key in ignore.keys() {
            if self.remaining.shift_remove(key).is_none() {
                return Err(DiffError::MissingKey {
                    key: key.clone(),
                    path: ignore.source.clone(),
                });
            }
            tracing::debug!(key = %key, "ignored key removed");
        }
        Ok(())
    }

    /// Untranslated (key, value) pairs in reference order
    pub fn untranslated(&self) -> impl Iterator<Item = (&str, &str)> {
        self.remaining.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}
