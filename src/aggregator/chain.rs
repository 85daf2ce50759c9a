//! Call-chain reconstruction from per-file edge lists.
//!
//! The reconstructor is a small state machine over one file's edges:
//! - `BECOMES` from a library symbol binds a variable to that origin symbol
//! - `CALLS` through a bound variable extends the origin's chain
//! - `DIES` unbinds the variable
//!
//! Chains are keyed by origin symbol, not by variable. Every variable bound
//! to the same origin within a file extends one shared chain.

use super::frequency::{Transition, TransitionSink};
use crate::parser::{Edge, FileTrace, Relation, SymbolSet};
use log::debug;
use std::collections::HashMap;

/// Counters for a reconstruction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChainStats {
    /// Files reconstructed
    pub files: usize,

    /// Transitions emitted to the sink
    pub transitions: usize,
}

/// File-scoped binding and chain state
pub struct CallChainReconstructor<'a> {
    symbols: &'a SymbolSet,

    /// variable -> origin symbol
    bindings: HashMap<String, String>,

    /// origin symbol -> qualified calls in arrival order
    chains: HashMap<String, Vec<String>>,
}

impl<'a> CallChainReconstructor<'a> {
    pub fn new(symbols: &'a SymbolSet) -> Self {
        Self {
            symbols,
            bindings: HashMap::new(),
            chains: HashMap::new(),
        }
    }

    /// Clear bindings and chains at a file boundary
    pub fn reset(&mut self) {
        self.bindings.clear();
        self.chains.clear();
    }

    /// Reconstruct one file, emitting its transitions into `sink`
    ///
    /// **Public** - main entry point for a single file
    ///
    /// State from any previous file is discarded first. Returns the number
    /// of transitions emitted.
    pub fn reconstruct_file<S>(&mut self, edges: &[Edge], sink: &mut S) -> usize
    where
        S: TransitionSink + ?Sized,
    {
        self.reset();

        let mut emitted = 0;
        for edge in edges {
            if self.apply(edge, sink) {
                emitted += 1;
            }
        }
        emitted
    }

    /// Apply a single edge; returns true if a transition was emitted
    pub fn apply<S>(&mut self, edge: &Edge, sink: &mut S) -> bool
    where
        S: TransitionSink + ?Sized,
    {
        match edge.relation() {
            Relation::Becomes => {
                if self.symbols.contains(edge.source()) {
                    self.bindings
                        .insert(edge.target().to_string(), edge.source().to_string());
                }
                false
            }
            Relation::Dies => {
                self.bindings.remove(edge.source());
                false
            }
            Relation::Calls => {
                let Some(origin) = self.bindings.get(edge.source()).cloned() else {
                    return false;
                };
                let transition = self.extend_chain(origin, edge.target());
                sink.record(transition);
                true
            }
        }
    }

    /// Append a call to the origin's chain and build the transition for it
    fn extend_chain(&mut self, origin: String, method: &str) -> Transition {
        let current = self.symbols.qualify(method);
        let chain = self.chains.entry(origin.clone()).or_default();

        let previous = chain.last().cloned().unwrap_or_else(|| origin.clone());
        chain.push(current.clone());

        Transition::new(origin, previous, current)
    }

    /// Origin symbol a variable is currently bound to
    pub fn binding(&self, variable: &str) -> Option<&str> {
        self.bindings.get(variable).map(String::as_str)
    }

    /// Qualified calls recorded so far for an origin in the current file
    pub fn chain(&self, origin: &str) -> Option<&[String]> {
        self.chains.get(origin).map(Vec::as_slice)
    }
}

/// Reconstruct every file and feed all transitions into `sink`
///
/// **Public** - drives the reconstructor over a parsed trace
pub fn reconstruct_files<I, S>(files: I, symbols: &SymbolSet, sink: &mut S) -> ChainStats
where
    I: IntoIterator<Item = FileTrace>,
    S: TransitionSink + ?Sized,
{
    let mut reconstructor = CallChainReconstructor::new(symbols);
    let mut stats = ChainStats::default();

    for file in files {
        let emitted = reconstructor.reconstruct_file(&file.edges, sink);
        debug!(
            "File {}: {} edges, {} transitions",
            file.name.as_deref().unwrap_or("<unnamed>"),
            file.edges.len(),
            emitted
        );

        stats.files += 1;
        stats.transitions += emitted;
    }

    stats
}
