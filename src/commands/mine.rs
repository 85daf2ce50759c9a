//! Mine command implementation.
//!
//! The mine command:
//! 1. Loads the trace and the library symbol set
//! 2. Parses the trace into per-file edge lists
//! 3. Reconstructs call chains and aggregates bigram frequencies
//! 4. Writes the frequency reports

use crate::aggregator::{
    calculate_distribution, format_top_transitions, reconstruct_files, top_transitions,
    FrequencyTables,
};
use crate::output::{to_report, write_report, write_reports, RunStats};
use crate::parser::{read_trace, SymbolSet, TraceParser};
use crate::utils::config::{DEFAULT_SUMMARY_TOP, MAX_SUMMARY_TOP};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the mine command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct MineArgs {
    /// Trace file produced by the extractor
    pub trace: PathBuf,

    /// Library prefix used for qualification and report names
    pub library: String,

    /// File listing library members, one per line
    pub symbols_file: Option<PathBuf>,

    /// Members given directly on the command line
    pub members: Vec<String>,

    /// Directory for the text reports
    pub output_dir: PathBuf,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print the most frequent transitions to stdout
    pub print_summary: bool,

    /// Number of transitions in the summary
    pub top: usize,
}

impl Default for MineArgs {
    fn default() -> Self {
        Self {
            trace: PathBuf::new(),
            library: String::new(),
            symbols_file: None,
            members: Vec::new(),
            output_dir: PathBuf::from("."),
            output_json: None,
            print_summary: false,
            top: DEFAULT_SUMMARY_TOP,
        }
    }
}

/// Parse, reconstruct and aggregate an in-memory trace
///
/// **Public** - the whole pipeline short of writing reports
pub fn mine_trace(content: &str, symbols: &SymbolSet) -> (FrequencyTables, RunStats) {
    let mut tables = FrequencyTables::new();
    let mut parser = TraceParser::new(content.lines());

    let chain_stats = reconstruct_files(parser.by_ref(), symbols, &mut tables);
    let stats = RunStats::new(parser.stats(), chain_stats);

    (tables, stats)
}

/// Execute the mine command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Trace or symbol file missing/unreadable (before any processing)
/// * Report write failures
pub fn execute_mine(args: MineArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Mining call chains for library: {}", args.library);

    // Step 1: Load inputs
    info!("Step 1/4: Loading symbols and trace...");
    let symbols = load_symbols(&args)?;
    if symbols.is_empty() {
        warn!("Symbol set for '{}' is empty; no bindings will be recognized", args.library);
    }
    debug!("Loaded {} symbols", symbols.len());

    let content = read_trace(&args.trace)
        .with_context(|| format!("Failed to load trace {}", args.trace.display()))?;

    // Step 2+3: Parse and reconstruct
    info!("Step 2/4: Parsing trace and reconstructing call chains...");
    let (tables, stats) = mine_trace(&content, &symbols);

    info!(
        "Processed {} files, {} edges ({} malformed lines dropped)",
        stats.files, stats.edges, stats.dropped_lines
    );
    if stats.transitions == 0 {
        warn!("No transitions recorded for '{}'", args.library);
    }

    info!("Step 3/4: Summarizing frequencies...");
    let distribution = calculate_distribution(&tables);
    info!("Distribution: {}", distribution.summary());
    if distribution.is_highly_concentrated() {
        info!("Usage is highly concentrated: top 10% of pairs hold over 80% of transitions");
    }

    // Step 4: Write outputs
    info!("Step 4/4: Writing reports...");
    let paths = write_reports(&tables, symbols.prefix(), &args.output_dir)
        .context("Failed to write frequency reports")?;

    info!("✓ Global frequencies written to: {}", paths.global.display());
    info!("✓ Per-origin frequencies written to: {}", paths.by_origin.display());

    if let Some(json_path) = &args.output_json {
        let report = to_report(symbols.prefix(), &tables, stats);
        write_report(&report, json_path).context("Failed to write JSON report")?;
        info!("✓ JSON report written to: {}", json_path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("CALL CHAIN SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Library:      {}", symbols.prefix());
        println!("Files:        {}", stats.files);
        println!("Transitions:  {}", stats.transitions);
        println!("Origins:      {}", tables.origin_count());
        println!("\n{}", format_top_transitions(&top_transitions(&tables, args.top)));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Mining completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Build the symbol set from the file and/or explicit members
fn load_symbols(args: &MineArgs) -> Result<SymbolSet> {
    let mut symbols = match &args.symbols_file {
        Some(path) => SymbolSet::load(args.library.as_str(), path)
            .with_context(|| format!("Failed to load symbols from {}", path.display()))?,
        None => SymbolSet::new(args.library.as_str()).context("Invalid library prefix")?,
    };

    symbols.extend(&args.members);
    Ok(symbols)
}

/// Validate mine arguments
///
/// **Public** - can be called before execute_mine for early validation
pub fn validate_args(args: &MineArgs) -> Result<()> {
    if args.trace.as_os_str().is_empty() {
        anyhow::bail!("Trace path cannot be empty");
    }

    if args.library.is_empty() {
        anyhow::bail!("Library prefix cannot be empty");
    }

    if args.library.chars().any(char::is_whitespace) {
        anyhow::bail!("Library prefix cannot contain whitespace");
    }

    if args.symbols_file.is_none() && args.members.is_empty() {
        anyhow::bail!("Provide library members with --symbols or --member");
    }

    if args.top == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top > MAX_SUMMARY_TOP {
        anyhow::bail!("top is too large (max {})", MAX_SUMMARY_TOP);
    }

    Ok(())
}
