//! Smudge: synthetic corruption of tabular datasets.
//!
//! Smudge takes a clean delimited table and a per-column corruption plan and
//! produces two files: a corrupted copy of the table, and a parallel tracker
//! table recording, per cell, which corruption category (if any) was applied.
//! The pair serves as labeled training/evaluation data for data-cleaning and
//! anomaly-detection tools.
//!
//! # Core Principles
//!
//! - **Labeled output**: every mutated cell is tagged with its corruption code
//! - **Shape-preserving**: headers, column order, and row count survive intact
//! - **Reproducible on demand**: corruption is driven by an explicit seedable RNG
//!
//! # Example
//!
//! ```no_run
//! use smudge::{CorruptionPlan, PlanEntry, Smudge};
//!
//! let plan = CorruptionPlan::with_entries(vec![PlanEntry::new(0, 20.0)]);
//!
//! let smudge = Smudge::new();
//! let report = smudge.run("clean.csv", &plan, "dirty.csv").unwrap();
//!
//! println!("Cells corrupted: {}", report.summary.cells_corrupted);
//! println!("Tracker written to: {}", report.tracker_output.display());
//! ```

pub mod corrupt;
pub mod error;
pub mod input;
pub mod output;
pub mod schema;

mod smudge;

pub use crate::smudge::{RunReport, Smudge, SmudgeConfig};
pub use corrupt::{
    CodeCounts, CorruptionCode, CorruptionEngine, CorruptionPlan, PlanEntry, Tracker,
    TrackerSummary,
};
pub use error::{Result, SmudgeError};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use output::tracker_path;
pub use schema::{ColumnKind, ColumnProfile};
