// Missing Strings Library
// Finds localization strings that a translated resource file is missing

// Core infrastructure - configuration, errors, logging, the audit run
pub mod core;

// Operations - parsing, diffing and reporting
pub mod operations;

// Runtime configuration file and its validation
pub mod config;
pub mod config_validation;

// Re-export commonly used items for convenience
pub use crate::core::{App, AppConfig, AuditPaths, DiffError, RunSummary};
pub use operations::{IgnoreList, ReportFormatter, ResourceEntry, StaleEntry, StringDiff};
