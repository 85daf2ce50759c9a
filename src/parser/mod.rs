//! Trace parsing and the library symbol oracle.
//!
//! This module handles:
//! - The edge record model
//! - Splitting raw trace text into per-file edge lists
//! - Loading the fixed symbol set for the analyzed library

pub mod edge;
pub mod symbols;
pub mod trace;

// Re-export main types
pub use edge::{Edge, Relation};
pub use symbols::SymbolSet;
pub use trace::{classify_line, parse_trace, read_trace, FileTrace, LineKind, ParseStats, TraceParser};
