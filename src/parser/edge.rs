//! Interaction record model.
//!
//! One `Edge` is one line of the trace: a source symbol, how it relates to
//! the target, and the target (possibly empty).

use crate::utils::config::{BECOMES_TOKEN, CALLS_TOKEN, DIES_TOKEN};
use std::fmt;
use std::str::FromStr;

/// Kind of interaction between the two sides of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Library symbol result is bound to a variable
    Becomes,
    /// Variable is used to invoke a method
    Calls,
    /// Variable goes out of scope
    Dies,
}

impl Relation {
    /// Wire token for this relation (e.g. `--calls--`)
    pub fn as_token(&self) -> &'static str {
        match self {
            Relation::Becomes => BECOMES_TOKEN,
            Relation::Calls => CALLS_TOKEN,
            Relation::Dies => DIES_TOKEN,
        }
    }
}

impl FromStr for Relation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            BECOMES_TOKEN => Ok(Relation::Becomes),
            CALLS_TOKEN => Ok(Relation::Calls),
            DIES_TOKEN => Ok(Relation::Dies),
            other => Err(format!("unknown relation token: {}", other)),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// A single interaction record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: String,
    relation: Relation,
    target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, relation: Relation, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            relation,
            target: target.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    /// Target symbol; empty for two-token records
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.target.is_empty() {
            write!(f, "{} {}", self.source, self.relation)
        } else {
            write!(f, "{} {} {}", self.source, self.relation, self.target)
        }
    }
}
