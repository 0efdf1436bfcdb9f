//! Per-day scaffold directories
//!
//! `setup` materializes `years/<year>/days/<day>/` with the fetched input and
//! a boilerplate solution file. Directory creation is idempotent and both
//! files are overwritten on every run, so re-running `setup` refreshes a day.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::models::Coordinate;
use crate::constants::files;
use crate::errors::ScaffoldResult;

/// Directory for one puzzle's scaffold under the given root
pub fn day_dir(root: &Path, coordinate: Coordinate) -> PathBuf {
    root.join(coordinate.year.to_string())
        .join(files::DAYS_DIR)
        .join(coordinate.day.to_string())
}

/// Path of the solution file `solve` expects for a coordinate
pub fn solution_path(root: &Path, coordinate: Coordinate) -> PathBuf {
    day_dir(root, coordinate).join(files::SOLUTION_FILE)
}

/// Write a day's scaffold: directory, `input.txt`, and the solution template
///
/// The input is written verbatim, whatever the site returned. Existing files
/// are overwritten; a directory left over from an earlier run is reused.
pub fn write_scaffold(root: &Path, coordinate: Coordinate, input: &str) -> ScaffoldResult<PathBuf> {
    let dir = day_dir(root, coordinate);
    fs::create_dir_all(&dir)?;

    fs::write(dir.join(files::INPUT_FILE), input)?;
    fs::write(
        dir.join(files::SOLUTION_FILE),
        crate::constants::scaffold::SOLUTION_TEMPLATE,
    )?;

    info!("Scaffolded {} at {}", coordinate, dir.display());
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_day_dir_layout() {
        let dir = day_dir(Path::new("years"), Coordinate::new(2023, 5));
        assert_eq!(dir, PathBuf::from("years/2023/days/5"));
    }

    #[test]
    fn test_write_scaffold_creates_both_files() {
        let root = TempDir::new().unwrap();
        let coordinate = Coordinate::new(2023, 5);

        let dir = write_scaffold(root.path(), coordinate, "1 2 3\n").unwrap();

        assert_eq!(
            fs::read_to_string(dir.join(files::INPUT_FILE)).unwrap(),
            "1 2 3\n"
        );
        let solution = fs::read_to_string(dir.join(files::SOLUTION_FILE)).unwrap();
        assert!(solution.contains("fn step_one"));
        assert!(solution.contains("fn step_two"));
    }

    #[test]
    fn test_write_scaffold_is_idempotent_and_overwrites() {
        let root = TempDir::new().unwrap();
        let coordinate = Coordinate::new(2024, 1);

        write_scaffold(root.path(), coordinate, "first fetch\n").unwrap();
        let dir = write_scaffold(root.path(), coordinate, "second fetch\n").unwrap();

        assert_eq!(
            fs::read_to_string(dir.join(files::INPUT_FILE)).unwrap(),
            "second fetch\n"
        );
    }

    #[test]
    fn test_solution_path_points_into_day_dir() {
        let path = solution_path(Path::new("years"), Coordinate::new(2023, 5));
        assert_eq!(path, PathBuf::from("years/2023/days/5/main.rs"));
    }
}
