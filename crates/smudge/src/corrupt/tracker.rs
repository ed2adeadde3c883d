//! Cell-level record of which corruption was applied where.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Category of corruption applied to a single cell.
///
/// Serialized as an integer code in the tracker file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorruptionCode {
    /// Cell was not modified.
    Untouched,
    /// One character inserted or removed.
    CharEdit,
    /// Value replaced with a random alphanumeric string.
    Nonsense,
    /// Value replaced with a missing-value marker.
    Null,
    /// Gaussian noise added to a numeric value.
    Noise,
}

impl CorruptionCode {
    /// Integer code written to the tracker file.
    pub fn as_int(&self) -> u8 {
        match self {
            CorruptionCode::Untouched => 1,
            CorruptionCode::CharEdit => 2,
            CorruptionCode::Nonsense => 3,
            CorruptionCode::Null => 4,
            CorruptionCode::Noise => 5,
        }
    }
}

/// Parallel table of corruption codes, same shape as the data table.
///
/// Starts all [`CorruptionCode::Untouched`] and is mutated in lockstep with
/// the table. A cell revisited by a later plan entry keeps the last code.
#[derive(Debug, Clone, PartialEq)]
pub struct Tracker {
    /// Column headers, identical to the data table's.
    pub headers: Vec<String>,
    /// Codes in row-major order.
    pub codes: Vec<Vec<CorruptionCode>>,
}

impl Tracker {
    /// Create an all-untouched tracker for a table of the given shape.
    pub fn new(headers: Vec<String>, row_count: usize) -> Self {
        let width = headers.len();
        Self {
            headers,
            codes: vec![vec![CorruptionCode::Untouched; width]; row_count],
        }
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.codes.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the code for a cell.
    pub fn get(&self, row: usize, col: usize) -> Option<CorruptionCode> {
        self.codes.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Record the corruption applied to a cell, overwriting any earlier code.
    pub fn mark(&mut self, row: usize, col: usize, code: CorruptionCode) {
        if let Some(cell) = self.codes.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = code;
        }
    }

    /// Per-column corruption counts, column order preserved.
    pub fn summary(&self) -> TrackerSummary {
        let mut columns: IndexMap<String, CodeCounts> = self
            .headers
            .iter()
            .map(|h| (h.clone(), CodeCounts::default()))
            .collect();

        for row in &self.codes {
            for (col, code) in row.iter().enumerate() {
                // Duplicate header names share one entry
                let Some(counts) = columns.get_mut(&self.headers[col]) else {
                    continue;
                };
                match code {
                    CorruptionCode::Untouched => {}
                    CorruptionCode::CharEdit => counts.char_edits += 1,
                    CorruptionCode::Nonsense => counts.nonsense += 1,
                    CorruptionCode::Null => counts.nulls += 1,
                    CorruptionCode::Noise => counts.noise += 1,
                }
            }
        }

        let cells_corrupted = columns.values().map(|c| c.total()).sum();
        TrackerSummary {
            columns,
            cells_corrupted,
        }
    }
}

/// Per-column counts of applied corruption categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeCounts {
    pub char_edits: usize,
    pub nonsense: usize,
    pub nulls: usize,
    pub noise: usize,
}

impl CodeCounts {
    /// Total corrupted cells in the column.
    pub fn total(&self) -> usize {
        self.char_edits + self.nonsense + self.nulls + self.noise
    }
}

/// Corruption counts for a whole run, keyed by column name in table order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerSummary {
    pub columns: IndexMap<String, CodeCounts>,
    pub cells_corrupted: usize,
}
