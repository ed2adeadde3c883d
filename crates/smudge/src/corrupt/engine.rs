//! The corruption engine: applies a plan to a loaded table.

use fastrand::Rng;

use crate::error::Result;
use crate::input::DataTable;
use crate::schema::{profile_table, ColumnKind, ColumnProfile};

use super::actions;
use super::plan::CorruptionPlan;
use super::tracker::{CorruptionCode, Tracker};

/// Mutation chosen for one corruption site.
#[derive(Debug, Clone, Copy)]
enum Action {
    Noise,
    Null,
    AddRemove,
    Nonsense,
}

/// Applies a [`CorruptionPlan`] to a table, producing the corrupted table
/// and its tracker.
///
/// The engine owns its random source. The default constructor seeds from
/// the OS; [`CorruptionEngine::with_seed`] gives reproducible runs.
pub struct CorruptionEngine {
    rng: Rng,
}

impl CorruptionEngine {
    /// Create an engine with an OS-seeded random source.
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }

    /// Create an engine with a fixed seed. Identical inputs then produce
    /// identical outputs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }

    /// Apply `plan` to `table`. Consumes the table so the uncorrupted
    /// original is unrecoverable from the outputs.
    ///
    /// Every plan entry selects `floor(rows * percentage / 100)` distinct
    /// rows of its column uniformly at random and mutates each with an
    /// action drawn from the column kind's action set. A zero-row table
    /// passes through untouched.
    pub fn corrupt(&mut self, table: DataTable, plan: &CorruptionPlan) -> Result<(DataTable, Tracker)> {
        plan.validate(table.column_count())?;

        let mut table = table;
        let mut tracker = Tracker::new(table.headers.clone(), table.row_count());

        // Kinds and spreads come from the pristine table, so a column hit by
        // several entries keeps its original noise scale.
        let profiles = profile_table(&table);

        for entry in &plan.entries {
            let profile = &profiles[entry.column];
            for row in self.sample_rows(table.row_count(), entry.percentage) {
                self.corrupt_cell(&mut table, &mut tracker, row, profile);
            }
        }

        Ok((table, tracker))
    }

    /// Draw `floor(row_count * percentage / 100)` distinct row indices,
    /// clamped to the row count.
    fn sample_rows(&mut self, row_count: usize, percentage: f64) -> Vec<usize> {
        let want = (row_count as f64 * percentage / 100.0).floor().max(0.0) as usize;
        let want = want.min(row_count);

        let mut indices: Vec<usize> = (0..row_count).collect();
        self.rng.shuffle(&mut indices);
        indices.truncate(want);
        indices
    }

    fn corrupt_cell(
        &mut self,
        table: &mut DataTable,
        tracker: &mut Tracker,
        row: usize,
        profile: &ColumnProfile,
    ) {
        let col = profile.position;

        match self.pick_action(profile.kind) {
            Action::Noise => {
                // Degenerate spread or an unparseable cell leaves the site
                // unmodified, tracker included
                let Some(sigma) = profile.noise_sigma() else {
                    return;
                };
                let original = table.get(row, col).unwrap_or_default().to_string();
                if let Some(mutated) =
                    actions::add_noise(&mut self.rng, &original, sigma, profile.kind)
                {
                    table.set(row, col, mutated);
                    tracker.mark(row, col, CorruptionCode::Noise);
                }
            }
            Action::Null => {
                table.set(row, col, String::new());
                tracker.mark(row, col, CorruptionCode::Null);
            }
            Action::AddRemove => {
                let original = table.get(row, col).unwrap_or_default().to_string();
                table.set(row, col, actions::add_remove_char(&mut self.rng, &original));
                tracker.mark(row, col, CorruptionCode::CharEdit);
            }
            Action::Nonsense => {
                table.set(row, col, actions::nonsense(&mut self.rng));
                tracker.mark(row, col, CorruptionCode::Nonsense);
            }
        }
    }

    /// Choose uniformly from the action set for the column's kind.
    fn pick_action(&mut self, kind: ColumnKind) -> Action {
        if kind.is_numeric() {
            if self.rng.bool() {
                Action::Noise
            } else {
                Action::Null
            }
        } else {
            match self.rng.usize(0..3) {
                0 => Action::AddRemove,
                1 => Action::Nonsense,
                _ => Action::Null,
            }
        }
    }
}

impl Default for CorruptionEngine {
    fn default() -> Self {
        Self::new()
    }
}
