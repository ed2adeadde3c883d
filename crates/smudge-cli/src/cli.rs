//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Smudge: synthetic corruption of tabular datasets
#[derive(Parser)]
#[command(name = "smudge")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Corrupt a dataset, writing the corrupted copy plus its tracker
    Corrupt {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: <file>_corrupted.<ext>; tracker lands
        /// next to it with a _tracker suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Plan entry as COL:PCT, e.g. -c 2:5 -c 1:5 (repeatable)
        #[arg(short = 'c', long = "column", value_name = "COL:PCT", required = true)]
        columns: Vec<String>,

        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show inferred column kinds and statistics for a data file
    Inspect {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the profiles as JSON
        #[arg(long)]
        json: bool,
    },
}
