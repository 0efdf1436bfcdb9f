//! Command-line interface components
//!
//! CLI-specific code for the aoc helper: argument parsing and the five
//! command handlers.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, GlobalArgs, PuzzleArgs, SolveArgs};
pub use commands::{handle_fetch, handle_login, handle_setup, handle_solve, handle_subject};
