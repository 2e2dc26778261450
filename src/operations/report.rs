// Report Formatting
// Renders untranslated strings and stale-key diagnostics as plain text lines

use std::io::{self, Write};

use super::diff::{StaleEntry, StringDiff};

/// Formats report lines with a fixed-width key column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportFormatter {
    key_width: usize,
}

impl ReportFormatter {
    pub fn new(key_width: usize) -> Self {
        Self { key_width }
    }

    /// Key padded with spaces to the column width, then the value
    ///
    /// Width counts chars, and keys wider than the column are not cut.
    pub fn format_entry(&self, key: &str, value: &str) -> String {
        format!("{key:<width$}{value}", width = self.key_width)
    }

    /// The offending target line followed by the bare key
    pub fn format_stale(&self, stale: &StaleEntry) -> [String; 2] {
        [stale.raw_line.clone(), stale.key.clone()]
    }

    pub fn write_stale<W: Write>(&self, out: &mut W, stale: &StaleEntry) -> io::Result<()> {
        for line in self.format_stale(stale) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Write one line per untranslated key
    pub fn write_report<W: Write>(&self, out: &mut W, diff: &StringDiff) -> io::Result<()> {
        for (key, value) in diff.untranslated() {
            writeln!(out, "{}", self.format_entry(key, value))?;
        }
        Ok(())
    }
}
