//! Application constants for the aoc helper
//!
//! Centralizes the URLs, file names, selectors, and the solution template
//! used throughout the application, organized by functional domain.

/// Advent of Code service URLs and endpoints
pub mod aoc {
    /// Puzzle site base URL
    pub const BASE_URL: &str = "https://adventofcode.com/";

    /// Name of the cookie carrying the session token
    pub const SESSION_COOKIE: &str = "session";
}

/// File and directory names for persisted state
pub mod files {
    /// Session token file, resolved against the working directory
    pub const SESSION_FILE: &str = "session.txt";

    /// Root directory for per-day scaffolds
    pub const SCAFFOLD_ROOT: &str = "years";

    /// Per-year subdirectory holding the day directories
    pub const DAYS_DIR: &str = "days";

    /// Raw puzzle input file inside a scaffold directory
    pub const INPUT_FILE: &str = "input.txt";

    /// Generated solution file inside a scaffold directory
    pub const SOLUTION_FILE: &str = "main.rs";
}

/// HTML selectors and fallbacks for puzzle page rendering
pub mod subject {
    /// CSS selector for the puzzle description element
    pub const ARTICLE_SELECTOR: &str = "article";

    /// Substituted for the article content when the page has none
    pub const FALLBACK: &str = "Could not find the subject. Sorry";
}

/// Solution scaffolding
pub mod scaffold {
    /// Boilerplate written to every scaffolded solution file. Identical for
    /// every day; `setup` substitutes nothing. Scaffolds are wired into this
    /// crate as `#[path]` modules, so the import is by `crate` path.
    pub const SOLUTION_TEMPLATE: &str = r#"use crate::app::Solution;

pub struct Day;

impl Solution for Day {
    fn step_one(&self) {
        let input = include_str!("input.txt");
        let _ = input;
        println!("step one: not solved yet");
    }

    fn step_two(&self) {
        let input = include_str!("input.txt");
        let _ = input;
        println!("step two: not solved yet");
    }
}
"#;
}

// Re-export commonly used constants for convenience
pub use aoc::{BASE_URL, SESSION_COOKIE};
pub use files::{INPUT_FILE, SCAFFOLD_ROOT, SESSION_FILE, SOLUTION_FILE};
pub use scaffold::SOLUTION_TEMPLATE;
pub use subject::{ARTICLE_SELECTOR, FALLBACK as SUBJECT_FALLBACK};
