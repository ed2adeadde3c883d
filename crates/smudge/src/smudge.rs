//! Main Smudge struct and public API.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::corrupt::{CorruptionEngine, CorruptionPlan, TrackerSummary};
use crate::error::Result;
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::output::write_outputs;
use crate::schema::{profile_table, ColumnProfile};

/// Configuration for a corruption run.
#[derive(Debug, Clone, Default)]
pub struct SmudgeConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// RNG seed (None = seed from the OS).
    pub seed: Option<u64>,
}

/// Result of a corruption run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Path of the corrupted table.
    pub output: PathBuf,
    /// Path of the tracker table.
    pub tracker_output: PathBuf,
    /// Per-column corruption counts.
    pub summary: TrackerSummary,
}

/// The main dataset corruption façade: load, corrupt, write, report.
pub struct Smudge {
    config: SmudgeConfig,
}

impl Smudge {
    /// Create a new instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(SmudgeConfig::default())
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: SmudgeConfig) -> Self {
        Self { config }
    }

    /// Corrupt `input` according to `plan` and write the corrupted table to
    /// `output`, with the tracker next to it (`_tracker` before the
    /// extension).
    ///
    /// The table is loaded fully, mutated in memory, then both outputs are
    /// written; nothing is written when corruption fails.
    pub fn run(
        &self,
        input: impl AsRef<Path>,
        plan: &CorruptionPlan,
        output: impl AsRef<Path>,
    ) -> Result<RunReport> {
        let output = output.as_ref();

        let parser = Parser::with_config(self.config.parser.clone());
        let (table, source) = parser.parse_file(input)?;

        let mut engine = match self.config.seed {
            Some(seed) => CorruptionEngine::with_seed(seed),
            None => CorruptionEngine::new(),
        };
        let (table, tracker) = engine.corrupt(table, plan)?;

        let tracker_output = write_outputs(&table, &tracker, output)?;

        Ok(RunReport {
            source,
            output: output.to_path_buf(),
            tracker_output,
            summary: tracker.summary(),
        })
    }

    /// Load a file and profile its columns without corrupting anything.
    /// The caller's way to pick plan columns.
    pub fn profile(&self, input: impl AsRef<Path>) -> Result<(Vec<ColumnProfile>, SourceMetadata)> {
        let parser = Parser::with_config(self.config.parser.clone());
        let (table, source) = parser.parse_file(input)?;
        Ok((profile_table(&table), source))
    }
}

impl Default for Smudge {
    fn default() -> Self {
        Self::new()
    }
}
