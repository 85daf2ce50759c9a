//! Flat text frequency reports.
//!
//! Two listings are produced per run, both `key<TAB>count` lines:
//! - Global: every transition in first-seen order
//! - Per origin: a header line per origin symbol, its transitions by
//!   descending count, then a blank separator line

use super::validate_path;
use crate::aggregator::FrequencyTables;
use crate::utils::config::{GLOBAL_REPORT_SUFFIX, ORIGIN_REPORT_SUFFIX};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Locations of the two reports written for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub global: PathBuf,
    pub by_origin: PathBuf,
}

impl ReportPaths {
    /// Report paths for `prefix` inside `dir`
    pub fn for_library(dir: impl AsRef<Path>, prefix: &str) -> Self {
        let dir = dir.as_ref();
        Self {
            global: dir.join(format!("{}{}", prefix, GLOBAL_REPORT_SUFFIX)),
            by_origin: dir.join(format!("{}{}", prefix, ORIGIN_REPORT_SUFFIX)),
        }
    }
}

/// Render the global listing
pub fn render_global_report(tables: &FrequencyTables) -> String {
    let mut out = String::new();
    for (transition, count) in tables.global().iter() {
        out.push_str(&format!("{}\t{}\n", transition, count));
    }
    out
}

/// Render the per-origin listing
///
/// Each entry carries its own count.
pub fn render_origin_report(tables: &FrequencyTables) -> String {
    let mut out = String::new();
    for (origin, table) in tables.origins() {
        out.push_str(origin);
        out.push('\n');
        for (transition, count) in table.sorted_by_count() {
            out.push_str(&format!("{}\t{}\n", transition, count));
        }
        out.push('\n');
    }
    out
}

/// Write both reports for `prefix` into `dir`
///
/// **Public** - main entry point for text output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - directory cannot be created or a target is a directory
pub fn write_reports(
    tables: &FrequencyTables,
    prefix: &str,
    dir: impl AsRef<Path>,
) -> Result<ReportPaths, OutputError> {
    let paths = ReportPaths::for_library(dir, prefix);

    write_text(&render_global_report(tables), &paths.global)?;
    write_text(&render_origin_report(tables), &paths.by_origin)?;

    Ok(paths)
}

/// Write text content to a file, creating parent directories
pub fn write_text(content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    debug!("Report written ({} bytes)", content.len());

    Ok(())
}
