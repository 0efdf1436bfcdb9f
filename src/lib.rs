//! aoc helper library
//!
//! A personal Advent of Code companion: store the browser session cookie,
//! fetch puzzle inputs, render descriptions as terminal text, scaffold
//! per-day solution files, and run their two parts.

pub mod app;
pub mod cli;
pub mod constants;
pub mod errors;
pub mod session;
pub mod solutions;

// Re-export commonly used types for convenience
pub use app::{Coordinate, Part, Solution};
pub use errors::{AppError, Result};
