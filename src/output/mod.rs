//! Output writers for frequency reports.
//!
//! This module handles writing data to disk in various formats:
//! - Tab-separated global and per-origin listings
//! - Optional JSON report

pub mod json;
pub mod schema;
pub mod text;

use crate::utils::error::OutputError;
use std::path::Path;

// Re-export main functions
pub use json::{read_report, write_report};
pub use schema::{to_report, MiningReport, OriginTransitions, RunStats, TransitionCount};
pub use text::{render_global_report, render_origin_report, write_reports, write_text, ReportPaths};

/// Validate that an output path is writable
///
/// **Public** - shared by all writers
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Refuse to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
