//! Solution dispatch for scaffolded days
//!
//! Scaffolded solutions are compiled into the binary and registered against
//! their coordinate rather than loaded dynamically: each day implements the
//! [`Solution`] contract and `solve` resolves it from a [`SolutionRegistry`].
//! The scaffold file on disk still gates the command, so `solve` for a day
//! that was never set up fails before touching the registry.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::app::models::{Coordinate, Part};
use crate::app::scaffold;
use crate::errors::{SolveError, SolveResult};

/// Contract every scaffolded day fulfils: two zero-argument entry points
pub trait Solution {
    /// First half of the day's puzzle
    fn step_one(&self);

    /// Second half of the day's puzzle
    fn step_two(&self);
}

/// Maps coordinates to their registered solutions
#[derive(Default)]
pub struct SolutionRegistry {
    entries: HashMap<Coordinate, Box<dyn Solution>>,
}

impl SolutionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a day's solution, replacing any previous registration
    pub fn register(&mut self, coordinate: Coordinate, solution: Box<dyn Solution>) {
        self.entries.insert(coordinate, solution);
    }

    /// Look up the solution for a coordinate
    pub fn resolve(&self, coordinate: Coordinate) -> Option<&dyn Solution> {
        self.entries.get(&coordinate).map(|boxed| boxed.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Run the requested part(s) of a day's solution
///
/// Requires the scaffold file written by `setup` to exist under `root`; a
/// missing file is fatal. With no part selected both entry points run in
/// order, otherwise exactly the selected one.
pub fn solve(
    registry: &SolutionRegistry,
    root: &Path,
    coordinate: Coordinate,
    part: Option<Part>,
) -> SolveResult<()> {
    let path = scaffold::solution_path(root, coordinate);
    if !path.exists() {
        return Err(SolveError::MissingScaffold { path });
    }

    let solution = registry
        .resolve(coordinate)
        .ok_or(SolveError::NotRegistered { coordinate })?;

    if part.is_none() || part == Some(Part::One) {
        info!("Running step one for {}", coordinate);
        solution.step_one();
    }
    if part.is_none() || part == Some(Part::Two) {
        info!("Running step two for {}", coordinate);
        solution.step_two();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    struct Recorder {
        calls: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Solution for Recorder {
        fn step_one(&self) {
            self.calls.borrow_mut().push("one");
        }

        fn step_two(&self) {
            self.calls.borrow_mut().push("two");
        }
    }

    fn registry_with_recorder(coordinate: Coordinate) -> (SolutionRegistry, Rc<RefCell<Vec<&'static str>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut registry = SolutionRegistry::new();
        registry.register(
            coordinate,
            Box::new(Recorder {
                calls: Rc::clone(&calls),
            }),
        );
        (registry, calls)
    }

    fn scaffolded_root(coordinate: Coordinate) -> TempDir {
        let root = TempDir::new().unwrap();
        crate::app::scaffold::write_scaffold(root.path(), coordinate, "input\n").unwrap();
        root
    }

    #[test]
    fn test_missing_scaffold_is_fatal() {
        let coordinate = Coordinate::new(2023, 5);
        let (registry, _calls) = registry_with_recorder(coordinate);
        let root = TempDir::new().unwrap();

        let result = solve(&registry, root.path(), coordinate, None);
        assert!(matches!(result, Err(SolveError::MissingScaffold { .. })));
    }

    #[test]
    fn test_unregistered_coordinate_is_fatal() {
        let coordinate = Coordinate::new(2023, 5);
        let root = scaffolded_root(coordinate);
        let registry = SolutionRegistry::new();

        let result = solve(&registry, root.path(), coordinate, None);
        assert!(matches!(result, Err(SolveError::NotRegistered { .. })));
    }

    #[test]
    fn test_no_part_runs_both_in_order() {
        let coordinate = Coordinate::new(2023, 5);
        let root = scaffolded_root(coordinate);
        let (registry, calls) = registry_with_recorder(coordinate);

        solve(&registry, root.path(), coordinate, None).unwrap();
        assert_eq!(*calls.borrow(), vec!["one", "two"]);
    }

    #[test]
    fn test_part_two_runs_only_step_two() {
        let coordinate = Coordinate::new(2023, 5);
        let root = scaffolded_root(coordinate);
        let (registry, calls) = registry_with_recorder(coordinate);

        solve(&registry, root.path(), coordinate, Some(Part::Two)).unwrap();
        assert_eq!(*calls.borrow(), vec!["two"]);
    }

    #[test]
    fn test_part_one_runs_only_step_one() {
        let coordinate = Coordinate::new(2023, 5);
        let root = scaffolded_root(coordinate);
        let (registry, calls) = registry_with_recorder(coordinate);

        solve(&registry, root.path(), coordinate, Some(Part::One)).unwrap();
        assert_eq!(*calls.borrow(), vec!["one"]);
    }
}
