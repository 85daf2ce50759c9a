//! Call-chain reconstruction and bigram aggregation.
//!
//! This module transforms parsed per-file edge lists into:
//! - Call transitions per origin symbol
//! - Global and per-origin frequency tables
//! - Ranking and distribution metrics

pub mod chain;
pub mod frequency;
pub mod metrics;

// Re-export main types and functions
pub use chain::{reconstruct_files, CallChainReconstructor, ChainStats};
pub use frequency::{CountTable, FrequencyTables, Transition, TransitionSink};
pub use metrics::{
    calculate_distribution, format_top_transitions, top_transitions, RankedTransition,
    TransitionDistribution,
};
