//! Corrupt command - apply a corruption plan and write both outputs.

use std::path::PathBuf;

use colored::Colorize;
use smudge::{CorruptionPlan, PlanEntry, Smudge, SmudgeConfig};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    columns: Vec<String>,
    seed: Option<u64>,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let plan: CorruptionPlan = columns
        .iter()
        .map(|spec| spec.parse::<PlanEntry>())
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect();

    // Determine output path
    let output_path = output.unwrap_or_else(|| {
        let stem = file.file_stem().unwrap_or_default().to_string_lossy();
        let name = match file.extension() {
            Some(ext) => format!("{}_corrupted.{}", stem, ext.to_string_lossy()),
            None => format!("{}_corrupted", stem),
        };
        file.with_file_name(name)
    });

    if !json {
        println!(
            "{} {} ({} plan entries)",
            "Corrupting".cyan().bold(),
            file.display().to_string().white(),
            plan.entries.len().to_string().white().bold()
        );
    }

    let smudge = Smudge::with_config(SmudgeConfig {
        seed,
        ..SmudgeConfig::default()
    });
    let report = smudge.run(&file, &plan, &output_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if verbose {
        println!();
        println!("{}", "Corrupted cells by column:".yellow().bold());
        for (name, counts) in &report.summary.columns {
            if counts.total() == 0 {
                continue;
            }
            println!(
                "  {:20} {:4} (edits: {}, nonsense: {}, nulls: {}, noise: {})",
                name,
                counts.total(),
                counts.char_edits,
                counts.nonsense,
                counts.nulls,
                counts.noise
            );
        }
    }

    println!(
        "Corrupted {} of {} cells",
        report.summary.cells_corrupted.to_string().white().bold(),
        report.source.row_count * report.source.column_count
    );
    println!();
    println!(
        "{} {}",
        "Saved to".green().bold(),
        report.output.display().to_string().white()
    );
    println!(
        "{} {}",
        "Tracker at".green().bold(),
        report.tracker_output.display().to_string().white()
    );

    Ok(())
}
