//! Command-line argument parsing for the aoc helper
//!
//! Defines the CLI structure with clap derive macros: five subcommands, a
//! shared (year, day) coordinate for everything except `login`, and an
//! optional part selector for `solve`.

use clap::{Args, Parser, Subcommand};

use crate::app::models::{Coordinate, Part};

/// aoc - personal Advent of Code helper
#[derive(Parser, Debug)]
#[command(
    name = "aoc",
    version,
    about = "Fetch, render, scaffold, and run Advent of Code puzzles",
    long_about = "A personal command-line helper for adventofcode.com.
Paste your browser session cookie once with `aoc login`, then fetch inputs,
read puzzle descriptions in the terminal, and scaffold per-day solutions."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Trim surrounding whitespace from the stored session token when reading
    #[arg(long, global = true)]
    pub trim_session: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store the adventofcode.com session cookie for later commands
    Login,

    /// Fetch a day's puzzle input and print it
    Fetch(PuzzleArgs),

    /// Fetch a day's puzzle description and render it as text
    Subject(PuzzleArgs),

    /// Create the day's scaffold directory with input and solution template
    Setup(PuzzleArgs),

    /// Run a scaffolded day's solution parts
    Solve(SolveArgs),
}

/// The (year, day) coordinate shared by every network command
#[derive(Args, Debug, Clone, Copy)]
pub struct PuzzleArgs {
    /// Puzzle year, e.g. 2023
    #[arg(short = 'y', long)]
    pub year: u32,

    /// Puzzle day, 1 through 25
    #[arg(short = 'd', long)]
    pub day: u32,
}

impl PuzzleArgs {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.year, self.day)
    }
}

/// Arguments for the solve command
#[derive(Args, Debug, Clone, Copy)]
pub struct SolveArgs {
    #[command(flatten)]
    pub puzzle: PuzzleArgs,

    /// Which part to run; both run in order when omitted
    #[arg(short = 'p', long)]
    pub part: Option<Part>,
}

impl Cli {
    /// Get the logging level based on global arguments
    pub fn log_level(&self) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::DEBUG
        } else if self.global.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        }
    }
}
