//! Corruption plans: which columns to corrupt, and how much of each.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SmudgeError};

/// One directive: corrupt `percentage` percent of the rows of one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    /// Zero-based column position.
    pub column: usize,
    /// Fraction of rows to corrupt, in percent. The number of rows selected
    /// is `floor(rows * percentage / 100)`, clamped so values above 100
    /// never select more rows than exist.
    pub percentage: f64,
}

impl PlanEntry {
    /// Create a new plan entry.
    pub fn new(column: usize, percentage: f64) -> Self {
        Self { column, percentage }
    }
}

impl FromStr for PlanEntry {
    type Err = SmudgeError;

    /// Parse `COL:PCT`, e.g. `2:5` or `0:12.5`.
    fn from_str(s: &str) -> Result<Self> {
        let (col, pct) = s
            .split_once(':')
            .ok_or_else(|| SmudgeError::InvalidPlan(format!("'{}' is not COL:PCT", s)))?;

        let column: usize = col
            .trim()
            .parse()
            .map_err(|_| SmudgeError::InvalidPlan(format!("'{}' is not a column index", col)))?;
        let percentage: f64 = pct
            .trim()
            .parse()
            .map_err(|_| SmudgeError::InvalidPlan(format!("'{}' is not a percentage", pct)))?;

        Ok(Self { column, percentage })
    }
}

/// An ordered list of plan entries.
///
/// Entries are applied in order and may target the same column more than
/// once; a cell hit twice keeps the last corruption code written to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorruptionPlan {
    pub entries: Vec<PlanEntry>,
}

impl CorruptionPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a plan from a list of entries.
    pub fn with_entries(entries: Vec<PlanEntry>) -> Self {
        Self { entries }
    }

    /// Append an entry.
    pub fn push(&mut self, entry: PlanEntry) {
        self.entries.push(entry);
    }

    /// Whether the plan has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every column position against a table width.
    pub fn validate(&self, column_count: usize) -> Result<()> {
        for entry in &self.entries {
            if entry.column >= column_count {
                return Err(SmudgeError::ColumnOutOfRange {
                    index: entry.column,
                    column_count,
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<PlanEntry> for CorruptionPlan {
    fn from_iter<T: IntoIterator<Item = PlanEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
