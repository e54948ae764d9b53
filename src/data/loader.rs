//! CSV loading with schema validation for the spice table.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::data::model::{Dimension, SpiceRecord, SpiceTable};

/// Header of the column holding spice names.
pub const NAME_COLUMN: &str = "Spice Name";

/// The column headers every spice table must provide, in schema order.
pub fn required_columns() -> Vec<&'static str> {
    let mut cols = vec![NAME_COLUMN];
    cols.extend(Dimension::ALL.iter().map(|d| d.label()));
    cols
}

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Why a spice table failed to load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("missing required column(s): {}", .missing.join(", "))]
    Schema { missing: Vec<String> },
    #[error("malformed record at line {row}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load a spice table from a CSV file.
///
/// The header row must contain every required column; anything extra is
/// ignored. Row order becomes table order. A header-only file loads as an
/// empty table.
pub fn load_spice_table(path: &Path) -> Result<SpiceTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| LoadError::Row { row: 1, source })?
        .clone();
    let missing: Vec<String> = required_columns()
        .into_iter()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::Schema { missing });
    }

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<SpiceRecord>().enumerate() {
        let record = result.map_err(|source| {
            // The parser's position counts file lines, blank lines included;
            // fall back to record counting only when it carries none.
            let row = source
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(i + 2);
            LoadError::Row { row, source }
        })?;
        records.push(record);
    }

    Ok(SpiceTable::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("spices.csv");
        std::fs::write(&path, contents).unwrap();
        path
    }

    const GOOD_CSV: &str = "\
Spice Name,Sweetness,Sourness,Saltiness,Spiciness,Bitterness,Umami
Cinnamon,80,10,20,50,5,30
Sumac,20,70,10,30,40,10
";

    #[test]
    fn loads_a_well_formed_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, GOOD_CSV);

        let table = load_spice_table(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].name, "Cinnamon");
        assert_eq!(table.records[0].sweetness, 80.0);
        assert_eq!(table.records[1].umami, 10.0);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "\
Spice Name,Origin,Sweetness,Sourness,Saltiness,Spiciness,Bitterness,Umami
Cumin,India,5,10,15,40,35,25
",
        );

        let table = load_spice_table(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records[0].spiciness, 40.0);
    }

    #[test]
    fn header_only_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "Spice Name,Sweetness,Sourness,Saltiness,Spiciness,Bitterness,Umami\n",
        );

        let table = load_spice_table(&path).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn missing_columns_are_all_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "\
Spice Name,Sweetness,Sourness,Spiciness,Bitterness
Cumin,5,10,40,35
",
        );

        match load_spice_table(&path) {
            Err(LoadError::Schema { missing }) => {
                assert_eq!(missing, ["Saltiness", "Umami"]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_value_reports_its_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "\
Spice Name,Sweetness,Sourness,Saltiness,Spiciness,Bitterness,Umami
Cinnamon,80,10,20,50,5,30
Sumac,20,hot,10,30,40,10
",
        );

        match load_spice_table(&path) {
            Err(LoadError::Row { row, .. }) => assert_eq!(row, 3),
            other => panic!("expected row error, got {other:?}"),
        }
    }

    #[test]
    fn blank_lines_do_not_shift_the_reported_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "\
Spice Name,Sweetness,Sourness,Saltiness,Spiciness,Bitterness,Umami
Cinnamon,80,10,20,50,5,30

Sumac,20,hot,10,30,40,10
",
        );

        // The reader skips the blank line, so the bad record is the second
        // one but sits on file line 4.
        match load_spice_table(&path) {
            Err(LoadError::Row { row, .. }) => assert_eq!(row, 4),
            other => panic!("expected row error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_reports_io() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");

        match load_spice_table(&path) {
            Err(LoadError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
