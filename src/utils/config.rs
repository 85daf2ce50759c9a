//! Configuration and constants for the CLI.

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Trace block markers emitted by the upstream trace extractor
pub const FILENAME_SENTINEL: &str = "__FILENAME__";
pub const FOLDERNAME_SENTINEL: &str = "Foldername";
pub const MIN_SEPARATOR_DASHES: usize = 20;

// Relation tokens as they appear on the wire
pub const BECOMES_TOKEN: &str = "--becomes--";
pub const CALLS_TOKEN: &str = "--calls--";
pub const DIES_TOKEN: &str = "--dies--";

/// Separator between the two calls of a transition key
pub const TRANSITION_ARROW: &str = " -> ";

// Report file names are "<prefix><suffix>"
pub const GLOBAL_REPORT_SUFFIX: &str = "_bigram_frequencies.txt";
pub const ORIGIN_REPORT_SUFFIX: &str = "_bigram_frequencies_by_origin.txt";

/// Default number of transitions shown by `--summary`
pub const DEFAULT_SUMMARY_TOP: usize = 20;
pub const MAX_SUMMARY_TOP: usize = 1000;
