//! Callchain Miner
//!
//! Mines API-usage patterns from object-interaction traces. Each trace
//! records, per analyzed source file, when a variable is bound to a library
//! call result, which methods are invoked through it, and when it goes out
//! of scope. From these events the crate rebuilds per-origin call chains and
//! counts consecutive-call ("bigram") frequencies.
//!
//! ## Getting Started
//!
//! ```bash
//! callchain-miner mine --trace corpus.trace --library os.path --symbols members.txt
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
