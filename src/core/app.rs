// Application
// One audit run: reference file, target file, ignore list -> report

use std::io::Write;
use std::path::PathBuf;

use super::errors::{DiffError, Result};
use super::AppConfig;
use crate::operations::{load_resource, IgnoreList, ReportFormatter, StringDiff};

/// The three input files of an audit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditPaths {
    /// Reference (English) resource file
    pub reference: PathBuf,
    /// Translated resource file being audited
    pub target: PathBuf,
    /// Keys that are never translated
    pub ignore: PathBuf,
}

/// Counts gathered during a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Distinct keys in the reference file
    pub reference_keys: usize,
    /// Declarations in the target file
    pub target_keys: usize,
    /// Target keys unknown to the reference
    pub stale_keys: usize,
    /// Keys removed through the ignore list
    pub ignored_keys: usize,
    /// Keys reported as untranslated
    pub untranslated_keys: usize,
}

#[derive(Debug, Clone)]
pub struct App {
    /// Effective configuration (compiled defaults plus config file)
    pub config: AppConfig,

    pub paths: AuditPaths,
}

impl App {
    pub fn new(config: AppConfig, paths: AuditPaths) -> Self {
        Self { config, paths }
    }

    /// Run the audit, writing stale-key diagnostics and the report to `out`
    ///
    /// Diagnostics are written as they are found. The report is only written
    /// once every ignored key has been accounted for, so a failing run
    /// never prints a partial report.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let marker = self.config.string_marker.as_str();
        let formatter = ReportFormatter::new(self.config.key_width);

        let reference = load_resource(&self.paths.reference, marker)?;
        let mut diff = StringDiff::from_reference(&reference);
        let mut summary = RunSummary {
            reference_keys: diff.len(),
            ..RunSummary::default()
        };

        let target = load_resource(&self.paths.target, marker)?;
        summary.target_keys = target.len();
        summary.stale_keys = diff.remove_translated_with(&target, |stale| {
            tracing::warn!(
                key = %stale.key,
                line = stale.line_number,
                path = %self.paths.target.display(),
                "target key not found in reference strings"
            );
            formatter.write_stale(out, &stale).map_err(DiffError::Output)
        })?;

        let ignore = IgnoreList::load(&self.paths.ignore, self.config.skip_blank_ignore_lines)?;
        diff.remove_ignored(&ignore)?;
        summary.ignored_keys = ignore.len();

        formatter.write_report(out, &diff).map_err(DiffError::Output)?;
        out.flush().map_err(DiffError::Output)?;
        summary.untranslated_keys = diff.len();

        tracing::info!(
            reference = summary.reference_keys,
            target = summary.target_keys,
            stale = summary.stale_keys,
            ignored = summary.ignored_keys,
            untranslated = summary.untranslated_keys,
            "audit complete"
        );

        Ok(summary)
    }
}
