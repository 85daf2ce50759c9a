use crate::parser::{read_trace, ParseStats, TraceParser};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse a trace without reconstruction and report its structure
pub fn inspect_trace(trace_path: &Path) -> Result<ParseStats> {
    println!("Inspecting trace: {}", trace_path.display());

    let content = read_trace(trace_path)
        .with_context(|| format!("Failed to load trace {}", trace_path.display()))?;

    let mut parser = TraceParser::new(content.lines());
    let largest = parser.by_ref().map(|file| file.edges.len()).max().unwrap_or(0);
    let stats = parser.stats();

    println!("✓ Trace parsed");
    println!("  Lines:          {}", stats.lines);
    println!("  Skipped lines:  {}", stats.skipped_lines);
    println!("  Dropped lines:  {}", stats.dropped_lines);
    println!("  Files:          {}", stats.files);
    println!("  Edges:          {}", stats.edges);
    println!("  Largest file:   {} edges", largest);

    Ok(stats)
}

/// Display version information
pub fn display_version() {
    println!("Callchain Miner v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Mines API call-chain bigram frequencies from object-interaction traces.");
}
