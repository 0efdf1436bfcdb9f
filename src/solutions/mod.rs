//! Registered puzzle solutions
//!
//! Scaffolded days live under `years/<year>/days/<day>/main.rs` and are wired
//! in here once written: declare the module with a `#[path]` attribute and
//! register it against its coordinate, e.g.
//!
//! ```rust,ignore
//! #[path = "../../years/2023/days/5/main.rs"]
//! mod year2023_day5;
//!
//! registry.register(Coordinate::new(2023, 5), Box::new(year2023_day5::Day));
//! ```

use crate::app::SolutionRegistry;

// Byte-for-byte copy of the scaffold template, compiled the same way a wired
// scaffold is. Keeps the template honest: if it stops compiling inside this
// crate, the test build breaks here.
#[cfg(test)]
mod template_day;

/// Build the registry of all compiled-in day solutions
pub fn registry() -> SolutionRegistry {
    // Scaffolded days get registered here after `aoc setup`.
    SolutionRegistry::new()
}
