//! Summary metrics over the frequency tables.
//!
//! The most frequent transitions are the dominant usage patterns of the
//! library, and the distribution shows how concentrated usage is.

use super::frequency::FrequencyTables;
use log::debug;

/// A transition key with its global count
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTransition {
    /// `"prev -> curr"` key
    pub transition: String,

    /// Occurrences across the corpus
    pub count: u64,

    /// Percentage of all recorded transitions
    pub percentage: f64,
}

/// Top transitions by global count
///
/// **Public** - main entry point for ranking
///
/// # Arguments
/// * `tables` - Aggregated frequency tables
/// * `top_n` - Number of transitions to return
///
/// # Returns
/// Transitions sorted by count (descending), ties in first-seen order
pub fn top_transitions(tables: &FrequencyTables, top_n: usize) -> Vec<RankedTransition> {
    let global = tables.global();
    let total = global.total();

    debug!("Ranking top {} of {} transitions", top_n, global.len());

    global
        .sorted_by_count()
        .into_iter()
        .take(top_n)
        .map(|(transition, count)| RankedTransition {
            transition: transition.to_string(),
            count,
            percentage: percentage_of(count, total),
        })
        .collect()
}

fn percentage_of(count: u64, total: u64) -> f64 {
    if total > 0 {
        (count as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

/// Distribution statistics for the global table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionDistribution {
    /// Total transitions recorded
    pub total_transitions: u64,

    /// Number of distinct `"prev -> curr"` pairs
    pub distinct_pairs: usize,

    /// Number of origin symbols with at least one transition
    pub origin_count: usize,

    /// Transitions held by the most frequent 10% of pairs
    pub top_10_percent_transitions: u64,

    /// Percentage of all transitions held by the top 10% of pairs
    pub top_10_percent_percentage: f64,
}

impl TransitionDistribution {
    /// Check if usage is dominated by a few patterns
    ///
    /// Returns true if the top 10% of pairs hold more than 80% of transitions
    pub fn is_highly_concentrated(&self) -> bool {
        self.top_10_percent_percentage > 80.0
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Transitions: {} | Distinct pairs: {} | Origins: {} | Top 10%: {:.1}%",
            self.total_transitions,
            self.distinct_pairs,
            self.origin_count,
            self.top_10_percent_percentage
        )
    }
}

/// Calculate how transitions are distributed over pairs
pub fn calculate_distribution(tables: &FrequencyTables) -> TransitionDistribution {
    let global = tables.global();
    if global.is_empty() {
        return TransitionDistribution::default();
    }

    let total = global.total();
    let distinct = global.len();
    let top_count = (distinct as f64 * 0.1).ceil() as usize;
    let top_transitions: u64 = global
        .sorted_by_count()
        .iter()
        .take(top_count)
        .map(|(_, count)| count)
        .sum();

    TransitionDistribution {
        total_transitions: total,
        distinct_pairs: distinct,
        origin_count: tables.origin_count(),
        top_10_percent_transitions: top_transitions,
        top_10_percent_percentage: percentage_of(top_transitions, total),
    }
}

/// Render ranked transitions as an aligned text table
pub fn format_top_transitions(ranked: &[RankedTransition]) -> String {
    if ranked.is_empty() {
        return "No transitions recorded".to_string();
    }

    let width = ranked
        .iter()
        .map(|r| r.transition.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (i, r) in ranked.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {:<width$}  {:>8}  {:>5.1}%\n",
            i + 1,
            r.transition,
            r.count,
            r.percentage,
            width = width
        ));
    }
    out
}
