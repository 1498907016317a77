//! Read scan grid JSON files.
//!
//! Two layouts are accepted:
//! - `{"columns": [[[x, y, events], ...], ...]}`: points already grouped by x-mass
//! - `{"points": [[x, y, events], ...]}`: a flat list, grouped on load
//!
//! Event counts are in thousands.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{Grid, MassPoint};
use crate::error::ScanError;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GridFile {
    Columns { columns: Vec<Vec<MassPoint>> },
    Points { points: Vec<MassPoint> },
}

impl From<GridFile> for Grid {
    fn from(file: GridFile) -> Self {
        match file {
            GridFile::Columns { columns } => Grid::new(columns),
            GridFile::Points { points } => Grid::from_points(points),
        }
    }
}

/// Read a grid JSON file.
pub fn read_grid(path: &Path) -> Result<Grid, ScanError> {
    let file = File::open(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: GridFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| ScanError::InvalidMassPoint(format!("'{}': {e}", path.display())))?;
    let grid = Grid::from(parsed);
    log::debug!(
        "read {} points in {} columns from {}",
        grid.point_count(),
        grid.columns().len(),
        path.display()
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    fn temp_json(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_column_layout() {
        let file = temp_json(r#"{"columns": [[[600, 0, 10], [600, 100, 20]], [[700, 0, 5]]]}"#);
        let grid = read_grid(file.path()).unwrap();
        assert_eq!(grid.columns().len(), 2);
        assert_eq!(grid.point_count(), 3);
        assert_eq!(grid.total_events(), 35.0);
    }

    #[test]
    fn flat_points_are_grouped_by_x() {
        let file = temp_json(r#"{"points": [[600, 0, 10], [700, 0, 5], [600, 100, 20]]}"#);
        let grid = read_grid(file.path()).unwrap();
        assert_eq!(grid.columns().len(), 2);
        assert_eq!(grid.columns()[0].len(), 2);
    }

    #[test]
    fn negative_event_count_is_rejected() {
        let file = temp_json(r#"{"points": [[600, 0, -10]]}"#);
        let err = read_grid(file.path()).unwrap_err();
        assert!(matches!(err, ScanError::InvalidMassPoint(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_grid(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ScanError::Io { .. }));
    }
}
