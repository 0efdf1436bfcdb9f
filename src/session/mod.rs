//! Session management for the puzzle-site cookie
//!
//! The site authenticates every request with a `session` cookie the user
//! pastes once from their browser. This module stores it on disk and provides
//! the interactive `login` flow around it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use aoc_helper::session::SessionStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SessionStore::new();
//! store.ensure_exists()?;
//! let token = store.read()?;
//! # Ok(())
//! # }
//! ```

pub mod store;

// Re-export main public API
pub use store::{print_login_instructions, prompt_token, SessionStore};
