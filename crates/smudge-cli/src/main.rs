//! Smudge CLI - synthetic corruption of tabular datasets.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Corrupt {
            file,
            output,
            columns,
            seed,
            json,
        } => commands::corrupt::run(file, output, columns, seed, json, cli.verbose),

        Commands::Inspect { file, json } => commands::inspect::run(file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
