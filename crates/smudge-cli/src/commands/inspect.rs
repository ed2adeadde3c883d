//! Inspect command - show inferred column kinds and statistics.

use std::path::PathBuf;

use colored::Colorize;
use smudge::Smudge;

pub fn run(file: PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let smudge = Smudge::new();
    let (profiles, source) = smudge.profile(&file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
        return Ok(());
    }

    println!(
        "{} {} ({} rows, {} columns, {})",
        "Inspecting".cyan().bold(),
        source.file.white(),
        source.row_count.to_string().white().bold(),
        source.column_count.to_string().white().bold(),
        source.format
    );
    println!();
    println!(
        "{:>3}  {:20} {:8} {:>6}  {}",
        "#", "column", "kind", "nulls", "std"
    );

    for profile in &profiles {
        let std = profile
            .std
            .map(|s| format!("{:.3}", s))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>3}  {:20} {:8} {:>6}  {}",
            profile.position,
            profile.name,
            profile.kind.to_string(),
            profile.null_count,
            std
        );
    }

    Ok(())
}
