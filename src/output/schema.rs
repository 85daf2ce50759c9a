//! JSON report schema definitions.
//!
//! This module defines the structure of the optional JSON report.
//! Schema is versioned to allow future evolution.

use crate::aggregator::{ChainStats, CountTable, FrequencyTables};
use crate::parser::ParseStats;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Library prefix the run was configured with
    pub library: String,

    /// Counters for the run
    pub stats: RunStats,

    /// Global transitions in first-seen order
    pub global: Vec<TransitionCount>,

    /// Per-origin transitions, each sorted by descending count
    pub by_origin: Vec<OriginTransitions>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Counters collected across parsing and reconstruction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub files: usize,
    pub edges: usize,
    pub dropped_lines: usize,
    pub transitions: usize,
}

impl RunStats {
    pub fn new(parse: ParseStats, chains: ChainStats) -> Self {
        Self {
            files: parse.files,
            edges: parse.edges,
            dropped_lines: parse.dropped_lines,
            transitions: chains.transitions,
        }
    }
}

/// A `"prev -> curr"` key with its count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionCount {
    pub transition: String,
    pub count: u64,
}

/// Transitions observed on chains of one origin symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginTransitions {
    pub origin: String,
    pub transitions: Vec<TransitionCount>,
}

fn to_counts<'a>(entries: impl IntoIterator<Item = (&'a str, u64)>) -> Vec<TransitionCount> {
    entries
        .into_iter()
        .map(|(transition, count)| TransitionCount {
            transition: transition.to_string(),
            count,
        })
        .collect()
}

fn origin_entry(origin: &str, table: &CountTable) -> OriginTransitions {
    OriginTransitions {
        origin: origin.to_string(),
        transitions: to_counts(table.sorted_by_count()),
    }
}

/// Build a report from the run's tables
///
/// **Public** - used by the mine command before writing JSON
pub fn to_report(library: &str, tables: &FrequencyTables, stats: RunStats) -> MiningReport {
    use chrono::Utc;

    MiningReport {
        version: REPORT_SCHEMA_VERSION.to_string(),
        library: library.to_string(),
        stats,
        global: to_counts(tables.global().iter()),
        by_origin: tables
            .origins()
            .map(|(origin, table)| origin_entry(origin, table))
            .collect(),
        generated_at: Utc::now().to_rfc3339(),
    }
}
