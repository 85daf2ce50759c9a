//! Bigram frequency tables.
//!
//! Transitions are counted twice: once in a corpus-wide table keyed by
//! `"prev -> curr"`, and once in a table per origin symbol. Both tables keep
//! first-seen key order so reports are stable for a given input.

use crate::utils::config::TRANSITION_ARROW;
use std::collections::HashMap;

/// One observed call transition on an origin symbol's chain
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition {
    /// Qualified symbol the chain started from
    pub origin: String,

    /// Previous qualified call (the origin itself for the first call)
    pub previous: String,

    /// Qualified call just made
    pub current: String,
}

impl Transition {
    pub fn new(
        origin: impl Into<String>,
        previous: impl Into<String>,
        current: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            previous: previous.into(),
            current: current.into(),
        }
    }

    /// Table key: `"<previous> -> <current>"`
    pub fn key(&self) -> String {
        format!("{}{}{}", self.previous, TRANSITION_ARROW, self.current)
    }
}

/// Consumer of transitions emitted by the reconstructor
pub trait TransitionSink {
    fn record(&mut self, transition: Transition);
}

impl TransitionSink for Vec<Transition> {
    fn record(&mut self, transition: Transition) {
        self.push(transition);
    }
}

/// Counter map that remembers insertion order
#[derive(Debug, Clone, Default)]
pub struct CountTable {
    counts: HashMap<String, u64>,
    order: Vec<String>,
}

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `key`, inserting it at the end if unseen
    pub fn add(&mut self, key: &str, amount: u64) {
        if let Some(count) = self.counts.get_mut(key) {
            *count += amount;
        } else {
            self.order.push(key.to_string());
            self.counts.insert(key.to_string(), amount);
        }
    }

    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.counts.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.order
            .iter()
            .map(move |key| (key.as_str(), self.counts[key]))
    }

    /// Entries by descending count; equal counts keep insertion order
    pub fn sorted_by_count(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Add every entry of `other` into this table
    pub fn merge(&mut self, other: &CountTable) {
        for (key, count) in other.iter() {
            self.add(key, count);
        }
    }
}

/// Counts equal regardless of insertion order
impl PartialEq for CountTable {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl Eq for CountTable {}

/// Global and per-origin transition counts for a whole run
#[derive(Debug, Clone, Default)]
pub struct FrequencyTables {
    global: CountTable,
    by_origin: HashMap<String, CountTable>,
    origin_order: Vec<String>,
}

impl FrequencyTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Corpus-wide `"prev -> curr"` counts
    pub fn global(&self) -> &CountTable {
        &self.global
    }

    /// Counts for a single origin symbol
    pub fn origin(&self, origin: &str) -> Option<&CountTable> {
        self.by_origin.get(origin)
    }

    /// Origin tables in first-seen order
    pub fn origins(&self) -> impl Iterator<Item = (&str, &CountTable)> + '_ {
        self.origin_order
            .iter()
            .map(move |origin| (origin.as_str(), &self.by_origin[origin]))
    }

    pub fn origin_count(&self) -> usize {
        self.origin_order.len()
    }

    /// Total transitions recorded
    pub fn total_transitions(&self) -> u64 {
        self.global.total()
    }

    pub fn is_empty(&self) -> bool {
        self.global.is_empty()
    }

    /// Fold another run's tables into this one
    pub fn merge(&mut self, other: &FrequencyTables) {
        self.global.merge(&other.global);
        for (origin, table) in other.origins() {
            self.origin_table_mut(origin).merge(table);
        }
    }

    fn origin_table_mut(&mut self, origin: &str) -> &mut CountTable {
        if !self.by_origin.contains_key(origin) {
            self.origin_order.push(origin.to_string());
        }
        self.by_origin.entry(origin.to_string()).or_default()
    }
}

impl TransitionSink for FrequencyTables {
    fn record(&mut self, transition: Transition) {
        let key = transition.key();
        self.global.increment(&key);
        self.origin_table_mut(&transition.origin).increment(&key);
    }
}

/// Tables compare by counts only
impl PartialEq for FrequencyTables {
    fn eq(&self, other: &Self) -> bool {
        self.global == other.global && self.by_origin == other.by_origin
    }
}

impl Eq for FrequencyTables {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_key() {
        let t = Transition::new("lib.open", "lib.open", "lib.read");
        assert_eq!(t.key(), "lib.open -> lib.read");
    }

    #[test]
    fn test_count_table_keeps_insertion_order() {
        let mut table = CountTable::new();
        table.increment("b");
        table.increment("a");
        table.increment("b");

        let entries: Vec<(&str, u64)> = table.iter().collect();
        assert_eq!(entries, vec![("b", 2), ("a", 1)]);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_sorted_by_count_is_stable() {
        let mut table = CountTable::new();
        table.increment("x");
        table.increment("y");
        table.add("z", 5);
        table.increment("w");

        let sorted = table.sorted_by_count();
        assert_eq!(sorted, vec![("z", 5), ("x", 1), ("y", 1), ("w", 1)]);
    }

    #[test]
    fn test_record_updates_both_tables() {
        let mut tables = FrequencyTables::new();
        tables.record(Transition::new("lib.a", "lib.a", "lib.x"));
        tables.record(Transition::new("lib.b", "lib.a", "lib.x"));

        assert_eq!(tables.global().get("lib.a -> lib.x"), Some(2));
        assert_eq!(tables.origin("lib.a").unwrap().get("lib.a -> lib.x"), Some(1));
        assert_eq!(tables.origin("lib.b").unwrap().get("lib.a -> lib.x"), Some(1));
        assert_eq!(tables.origin_count(), 2);
        assert_eq!(tables.total_transitions(), 2);
    }

    #[test]
    fn test_merge_matches_single_pass() {
        let transitions = vec![
            Transition::new("lib.a", "lib.a", "lib.x"),
            Transition::new("lib.a", "lib.x", "lib.y"),
            Transition::new("lib.b", "lib.b", "lib.x"),
        ];

        let mut single = FrequencyTables::new();
        for t in transitions.iter().cloned() {
            single.record(t);
        }

        let mut left = FrequencyTables::new();
        left.record(transitions[2].clone());
        let mut right = FrequencyTables::new();
        right.record(transitions[0].clone());
        right.record(transitions[1].clone());
        left.merge(&right);

        assert_eq!(left, single);
    }
}
