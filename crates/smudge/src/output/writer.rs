//! Writes the corrupted table and tracker as delimited files.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::corrupt::Tracker;
use crate::error::{Result, SmudgeError};
use crate::input::DataTable;

/// Tracker file path for an output path: `_tracker` inserted before the
/// extension.
///
/// # Example
///
/// ```
/// use smudge::tracker_path;
///
/// let path = tracker_path("data/dirty.csv".as_ref());
/// assert_eq!(path.to_string_lossy(), "data/dirty_tracker.csv");
/// ```
pub fn tracker_path(output: &Path) -> PathBuf {
    let stem = output.file_stem().unwrap_or_default().to_string_lossy();
    let name = match output.extension() {
        Some(ext) => format!("{}_tracker.{}", stem, ext.to_string_lossy()),
        None => format!("{}_tracker", stem),
    };
    output.with_file_name(name)
}

/// Write the corrupted table to `output` and its tracker alongside it.
///
/// Both files are staged as temp files in the destination directory and
/// renamed into place only after both serialize cleanly, so a failure
/// cannot leave a partial output behind. Returns the tracker path.
pub fn write_outputs(table: &DataTable, tracker: &Tracker, output: &Path) -> Result<PathBuf> {
    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| SmudgeError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }

    let mut table_tmp = stage_in(dir, output)?;
    write_table(&mut table_tmp, table, output)?;

    let tracker_file = tracker_path(output);
    let mut tracker_tmp = stage_in(dir, &tracker_file)?;
    write_tracker(&mut tracker_tmp, table.delimiter, tracker, &tracker_file)?;

    persist(table_tmp, output)?;
    persist(tracker_tmp, &tracker_file)?;

    Ok(tracker_file)
}

fn stage_in(dir: &Path, target: &Path) -> Result<NamedTempFile> {
    NamedTempFile::new_in(dir).map_err(|e| SmudgeError::Io {
        path: target.to_path_buf(),
        source: e,
    })
}

fn persist(tmp: NamedTempFile, target: &Path) -> Result<()> {
    tmp.persist(target).map_err(|e| SmudgeError::Io {
        path: target.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

fn write_table<W: Write>(writer: W, table: &DataTable, path: &Path) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(table.delimiter)
        .from_writer(writer);

    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }

    wtr.flush().map_err(|e| SmudgeError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_tracker<W: Write>(writer: W, delimiter: u8, tracker: &Tracker, path: &Path) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    wtr.write_record(&tracker.headers)?;
    for row in &tracker.codes {
        wtr.write_record(row.iter().map(|code| code.as_int().to_string()))?;
    }

    wtr.flush().map_err(|e| SmudgeError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_path_with_extension() {
        assert_eq!(
            tracker_path(Path::new("out.csv")).to_string_lossy(),
            "out_tracker.csv"
        );
        assert_eq!(
            tracker_path(Path::new("data/test_num1.csv")).to_string_lossy(),
            "data/test_num1_tracker.csv"
        );
    }

    #[test]
    fn test_tracker_path_without_extension() {
        assert_eq!(
            tracker_path(Path::new("out")).to_string_lossy(),
            "out_tracker"
        );
    }

    #[test]
    fn test_write_outputs_round_trip() {
        use crate::corrupt::CorruptionCode;
        use crate::input::Parser;

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("dirty.csv");

        let table = DataTable::new(
            vec!["id".to_string(), "name".to_string()],
            vec![
                vec!["1".to_string(), "Alice".to_string()],
                vec!["2".to_string(), String::new()],
            ],
            b',',
        );
        let mut tracker = Tracker::new(table.headers.clone(), 2);
        tracker.mark(1, 1, CorruptionCode::Null);

        let tracker_file = write_outputs(&table, &tracker, &output).unwrap();
        assert!(output.exists());
        assert_eq!(tracker_file, dir.path().join("dirty_tracker.csv"));

        let (read_back, _) = Parser::new().parse_file(&output).unwrap();
        assert_eq!(read_back.headers, table.headers);
        assert_eq!(read_back.rows, table.rows);

        let (codes, _) = Parser::new().parse_file(&tracker_file).unwrap();
        assert_eq!(codes.get(0, 0), Some("1"));
        assert_eq!(codes.get(1, 1), Some("4"));
    }
}
