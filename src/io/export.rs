//! Export the current dataset to CSV.
//!
//! The export is the canonical two-column `x,y` form, one row per pair in
//! insertion order, so a later `load_from_file` round-trips it losslessly.

use std::path::Path;

use serde::Serialize;

use crate::domain::Dataset;
use crate::error::AppError;

/// One exported measurement row. Field names become the CSV header.
#[derive(Debug, Clone, Copy, Serialize)]
struct PairRecord {
    x: f64,
    y: f64,
}

/// Write the dataset to `path` as a two-column CSV.
pub fn export_csv(dataset: &Dataset, path: &Path) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::Io(format!("Failed to create '{}': {e}", path.display())))?;

    for (x, y) in dataset.points() {
        writer
            .serialize(PairRecord { x, y })
            .map_err(|e| AppError::Io(format!("Failed to write '{}': {e}", path.display())))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::Io(format!("Failed to write '{}': {e}", path.display())))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ingest::load_from_file;

    fn dataset(x: &[f64], y: &[f64]) -> Dataset {
        Dataset::new(x.to_vec(), y.to_vec(), "x", "y").unwrap()
    }

    #[test]
    fn export_writes_two_column_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let ds = dataset(&[1.0, 2.5], &[3.0, -4.25]);

        export_csv(&ds, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("x,y"));
        assert_eq!(lines.next(), Some("1.0,3.0"));
        assert_eq!(lines.next(), Some("2.5,-4.25"));
    }

    #[test]
    fn export_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round.csv");
        let ds = dataset(&[0.1, 0.2, 0.3], &[10.0, 20.5, 29.9]);

        export_csv(&ds, &path).unwrap();
        let reloaded = load_from_file(&path).unwrap();

        assert_eq!(reloaded.x(), ds.x());
        assert_eq!(reloaded.y(), ds.y());
        assert_eq!(reloaded.x_label(), "x");
        assert_eq!(reloaded.y_label(), "y");
    }

    #[test]
    fn export_to_unwritable_path_is_io_error() {
        let ds = dataset(&[1.0, 2.0], &[3.0, 4.0]);
        let err = export_csv(&ds, Path::new("/no-such-dir/out.csv")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
