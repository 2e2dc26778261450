// Operations module
// Resource parsing, diff computation and report formatting

pub mod diff;
pub mod ignore;
pub mod report;
pub mod resource;

pub use diff::{StaleEntry, StringDiff};
pub use ignore::IgnoreList;
pub use report::ReportFormatter;
pub use resource::{load_resource, parse_line, parse_resource, ResourceEntry};
