//! Trace file parser.
//!
//! Splits the flat, line-oriented output of the trace extractor into one
//! edge list per analyzed source file. Parsing is lazy: `TraceParser` is an
//! iterator, and rerunning it over the same lines yields the same files.

use super::edge::{Edge, Relation};
use crate::utils::config::{FILENAME_SENTINEL, FOLDERNAME_SENTINEL, MIN_SEPARATOR_DASHES};
use crate::utils::error::LoadError;
use log::debug;
use std::mem;
use std::path::Path;

/// Edges recorded for one analyzed source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTrace {
    /// Name from the preceding `__FILENAME__` marker, if any
    pub name: Option<String>,

    /// Edges in arrival order (never empty)
    pub edges: Vec<Edge>,
}

/// Counters collected while parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Total lines read
    pub lines: usize,

    /// Blank lines and folder headers
    pub skipped_lines: usize,

    /// Lines with a wrong token count or unknown relation
    pub dropped_lines: usize,

    /// Non-empty files emitted
    pub files: usize,

    /// Edges emitted across all files
    pub edges: usize,
}

/// How a single trace line is interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Ignored without closing the current file
    Skip,
    /// Closes the current file; carries the name of the next file, if given
    Boundary(Option<String>),
    /// A well-formed interaction record
    Record(Edge),
    /// Malformed record, silently discarded
    Dropped,
}

/// Classify one raw trace line
///
/// **Public** - the per-line rules used by `TraceParser`
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();

    if trimmed.is_empty() || trimmed.starts_with(FOLDERNAME_SENTINEL) {
        return LineKind::Skip;
    }

    if let Some(rest) = trimmed.strip_prefix(FILENAME_SENTINEL) {
        let name = rest.trim_start_matches(':').trim();
        return LineKind::Boundary((!name.is_empty()).then(|| name.to_string()));
    }

    if is_separator(trimmed) {
        return LineKind::Boundary(None);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let (source, relation, target) = match tokens.as_slice() {
        [source, relation] => (*source, *relation, ""),
        [source, relation, target] => (*source, *relation, *target),
        _ => {
            debug!("Dropping line with {} tokens: {}", tokens.len(), trimmed);
            return LineKind::Dropped;
        }
    };

    match relation.parse::<Relation>() {
        Ok(relation) => LineKind::Record(Edge::new(source, relation, target)),
        Err(e) => {
            debug!("Dropping line ({}): {}", e, trimmed);
            LineKind::Dropped
        }
    }
}

/// A run of dashes long enough to act as a file separator
fn is_separator(line: &str) -> bool {
    line.len() >= MIN_SEPARATOR_DASHES && line.chars().all(|c| c == '-')
}

/// Lazy iterator of per-file edge lists over trace lines
pub struct TraceParser<I> {
    lines: I,
    current: Vec<Edge>,
    current_name: Option<String>,
    stats: ParseStats,
    finished: bool,
}

impl<I> TraceParser<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            current: Vec::new(),
            current_name: None,
            stats: ParseStats::default(),
            finished: false,
        }
    }

    /// Counters accumulated so far; complete once the iterator is exhausted
    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    /// Close the current file, emitting it if it holds any edges
    ///
    /// An unnamed boundary after an empty file keeps the pending name.
    fn close_file(&mut self, next_name: Option<String>) -> Option<FileTrace> {
        if self.current.is_empty() {
            if next_name.is_some() {
                self.current_name = next_name;
            }
            return None;
        }

        let name = mem::replace(&mut self.current_name, next_name);

        self.stats.files += 1;
        Some(FileTrace {
            name,
            edges: mem::take(&mut self.current),
        })
    }
}

impl<I> Iterator for TraceParser<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = FileTrace;

    fn next(&mut self) -> Option<FileTrace> {
        if self.finished {
            return None;
        }

        while let Some(line) = self.lines.next() {
            self.stats.lines += 1;

            match classify_line(line.as_ref()) {
                LineKind::Skip => self.stats.skipped_lines += 1,
                LineKind::Dropped => self.stats.dropped_lines += 1,
                LineKind::Record(edge) => {
                    self.stats.edges += 1;
                    self.current.push(edge);
                }
                LineKind::Boundary(next_name) => {
                    if let Some(file) = self.close_file(next_name) {
                        return Some(file);
                    }
                }
            }
        }

        self.finished = true;
        self.close_file(None)
    }
}

/// Parse a whole trace held in memory
///
/// **Public** - convenience wrapper collecting every file
pub fn parse_trace(content: &str) -> Vec<FileTrace> {
    TraceParser::new(content.lines()).collect()
}

/// Load a trace file into memory
///
/// # Errors
/// * `LoadError::ReadFailed` - file missing or unreadable
pub fn read_trace(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    debug!("Reading trace from: {}", path.display());

    std::fs::read_to_string(path).map_err(|source| LoadError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })
}
