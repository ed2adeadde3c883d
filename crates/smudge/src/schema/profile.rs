//! Per-column profiles: kind inference and pristine statistics.
//!
//! Profiles are computed once from the untouched table so that noise scales
//! never drift when several plan entries hit the same column.

use serde::{Deserialize, Serialize};

use super::types::ColumnKind;
use crate::input::DataTable;

/// Profile of a single column, computed before any corruption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name.
    pub name: String,
    /// Zero-based position in the table.
    pub position: usize,
    /// Inferred storage kind.
    pub kind: ColumnKind,
    /// Number of null/missing values.
    pub null_count: usize,
    /// Sample standard deviation of the parseable values.
    /// None for text columns and for columns with fewer than two values.
    pub std: Option<f64>,
}

impl ColumnProfile {
    /// Standard deviation of the additive noise for this column, scaled to
    /// ten times the column's own spread. Integer columns truncate the
    /// scaled value. None when noise cannot be computed (text column,
    /// undefined or zero spread).
    pub fn noise_sigma(&self) -> Option<f64> {
        let std = self.std?;
        let sigma = match self.kind {
            ColumnKind::Integer => (10.0 * std).trunc(),
            ColumnKind::Float => 10.0 * std,
            ColumnKind::Text => return None,
        };
        (sigma > 0.0).then_some(sigma)
    }
}

/// Profile every column of a table.
pub fn profile_table(table: &DataTable) -> Vec<ColumnProfile> {
    (0..table.column_count())
        .map(|position| profile_column(table, position))
        .collect()
}

fn profile_column(table: &DataTable, position: usize) -> ColumnProfile {
    let values: Vec<&str> = table.column_values(position).collect();
    let non_null: Vec<&str> = values
        .iter()
        .copied()
        .filter(|v| !DataTable::is_null_value(v))
        .collect();
    let null_count = values.len() - non_null.len();

    let kind = infer_kind(&non_null);

    let std = if kind.is_numeric() {
        let mut acc = StdAccumulator::new();
        for v in &non_null {
            if let Ok(x) = v.trim().parse::<f64>() {
                acc.add(x);
            }
        }
        acc.std()
    } else {
        None
    };

    ColumnProfile {
        name: table.headers[position].clone(),
        position,
        kind,
        null_count,
        std,
    }
}

/// Infer a column's kind from its non-null values.
///
/// All integers make an integer column; any float among numbers promotes the
/// column to float; a single non-numeric value makes it text. A column with
/// no non-null values loads as float, the way numeric loaders type an
/// all-missing column.
fn infer_kind(non_null: &[&str]) -> ColumnKind {
    if non_null.is_empty() {
        return ColumnKind::Float;
    }

    let mut saw_float = false;
    for v in non_null {
        let trimmed = v.trim();
        if trimmed.parse::<i64>().is_ok() {
            continue;
        }
        if trimmed.parse::<f64>().is_ok() {
            saw_float = true;
            continue;
        }
        return ColumnKind::Text;
    }

    if saw_float {
        ColumnKind::Float
    } else {
        ColumnKind::Integer
    }
}

/// Streaming accumulator for the sample standard deviation.
/// Welford's online algorithm: single pass, O(1) memory.
#[derive(Debug, Clone, Default)]
struct StdAccumulator {
    count: usize,
    mean: f64,
    m2: f64,
}

impl StdAccumulator {
    fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    /// Sample standard deviation (n − 1 denominator), None below two values.
    fn std(&self) -> Option<f64> {
        if self.count < 2 {
            return None;
        }
        Some((self.m2 / (self.count - 1) as f64).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table(header: &str, values: Vec<&str>) -> DataTable {
        DataTable::new(
            vec![header.to_string()],
            values
                .into_iter()
                .map(|v| vec![v.to_string()])
                .collect(),
            b',',
        )
    }

    #[test]
    fn test_infer_integer() {
        let table = make_table("count", vec!["1", "2", "3", "100"]);
        let profile = &profile_table(&table)[0];
        assert_eq!(profile.kind, ColumnKind::Integer);
    }

    #[test]
    fn test_infer_float() {
        let table = make_table("value", vec!["1.5", "2.7", "3.14"]);
        let profile = &profile_table(&table)[0];
        assert_eq!(profile.kind, ColumnKind::Float);
    }

    #[test]
    fn test_mixed_numbers_promote_to_float() {
        let table = make_table("value", vec!["1", "2.5", "3"]);
        assert_eq!(profile_table(&table)[0].kind, ColumnKind::Float);
    }

    #[test]
    fn test_infer_text() {
        let table = make_table("name", vec!["Alice", "Bob", "2024-01-01"]);
        let profile = &profile_table(&table)[0];
        assert_eq!(profile.kind, ColumnKind::Text);
        assert_eq!(profile.std, None);
    }

    #[test]
    fn test_all_null_column_is_float() {
        let table = make_table("value", vec!["", "NA", ""]);
        let profile = &profile_table(&table)[0];
        assert_eq!(profile.kind, ColumnKind::Float);
        assert_eq!(profile.null_count, 3);
        assert_eq!(profile.std, None);
        assert_eq!(profile.noise_sigma(), None);
    }

    #[test]
    fn test_sample_std() {
        // 1..=100 has a sample standard deviation of sqrt(100*9999/12/99)
        let values: Vec<String> = (1..=100).map(|i| i.to_string()).collect();
        let table = make_table(
            "value",
            values.iter().map(|s| s.as_str()).collect(),
        );
        let profile = &profile_table(&table)[0];

        let std = profile.std.unwrap();
        assert!((std - 29.011_491_975_882).abs() < 1e-6);
    }

    #[test]
    fn test_constant_column_has_no_noise_sigma() {
        let table = make_table("value", vec!["5", "5", "5"]);
        let profile = &profile_table(&table)[0];
        assert_eq!(profile.std, Some(0.0));
        assert_eq!(profile.noise_sigma(), None);
    }

    #[test]
    fn test_integer_sigma_is_truncated() {
        // std of {0, 10} is ~7.071, so 10x is 70.71, truncated to 70
        let table = make_table("value", vec!["0", "10"]);
        let profile = &profile_table(&table)[0];
        assert_eq!(profile.noise_sigma(), Some(70.0));
    }
}
