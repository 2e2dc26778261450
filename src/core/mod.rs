// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod app;
pub mod app_config;
pub mod errors;
pub mod logging;

pub use app::{App, AuditPaths, RunSummary};
pub use app_config::AppConfig;
pub use errors::{DiffError, ParseFailure};
