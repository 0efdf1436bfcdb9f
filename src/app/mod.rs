//! Core application logic for the aoc helper
//!
//! The HTTP client for the puzzle site, the data model, the plain-text page
//! renderer, the per-day scaffolder, and the solution dispatch.
//!
//! # Examples
//!
//! ```rust,no_run
//! use aoc_helper::app::{AocClient, Coordinate};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new("token".to_string())?;
//! let input = client.fetch_input(Coordinate::new(2023, 5)).await?;
//! print!("{input}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod models;
pub mod scaffold;
pub mod solver;
pub mod subject;

// Re-export main public API
pub use client::AocClient;
pub use models::{Coordinate, Part};
pub use scaffold::{day_dir, solution_path, write_scaffold};
pub use solver::{solve, Solution, SolutionRegistry};
pub use subject::render_subject;
