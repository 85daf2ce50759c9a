//! Callchain Miner CLI
//!
//! Reconstructs library call chains from object-interaction traces and
//! writes bigram frequency reports.

use anyhow::Result;
use callchain_miner::commands::{
    display_version, execute_mine, inspect_trace, validate_args, MineArgs,
};
use callchain_miner::utils::config::DEFAULT_SUMMARY_TOP;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

/// Callchain Miner - API usage bigrams from interaction traces
#[derive(Parser, Debug)]
#[command(name = "callchain-miner")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Mine bigram frequencies for one library
    Mine {
        /// Trace file produced by the extractor
        #[arg(short, long)]
        trace: PathBuf,

        /// Library prefix (e.g. "os.path")
        #[arg(short, long, env = "CALLCHAIN_LIBRARY")]
        library: String,

        /// File listing library members, one per line
        #[arg(short, long)]
        symbols: Option<PathBuf>,

        /// Library member name (repeatable)
        #[arg(short, long = "member")]
        members: Vec<String>,

        /// Directory for the frequency reports
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Output path for a JSON report (optional)
        #[arg(long)]
        json: Option<PathBuf>,

        /// Print the most frequent transitions to stdout
        #[arg(long)]
        summary: bool,

        /// Number of transitions in the summary
        #[arg(long, default_value_t = DEFAULT_SUMMARY_TOP)]
        top: usize,
    },

    /// Parse a trace file and report its structure
    Inspect {
        /// Trace file to inspect
        #[arg(short, long)]
        trace: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Mine {
            trace,
            library,
            symbols,
            members,
            output_dir,
            json,
            summary,
            top,
        } => {
            let args = MineArgs {
                trace,
                library,
                symbols_file: symbols,
                members,
                output_dir,
                output_json: json,
                print_summary: summary,
                top,
            };

            validate_args(&args)?;
            execute_mine(args)?;
        }

        Commands::Inspect { trace } => {
            inspect_trace(&trace)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
