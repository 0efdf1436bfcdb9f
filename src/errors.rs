//! Error types for the aoc helper
//!
//! Per-domain error enums with a transparent top-level `AppError`. Every
//! command handler returns one of these; the single exit-code mapper in
//! `main.rs` is the only place that turns them into a process status.

use std::path::PathBuf;

use thiserror::Error;

use crate::app::models::Coordinate;

/// Session store errors
#[derive(Error, Debug)]
pub enum SessionError {
    /// Session file absent when a network command needs it
    #[error("Run `aoc login` to get a session cookie value")]
    Missing,

    /// User submitted an empty token during login
    #[error("Failed to write session.txt. Try again.")]
    EmptyToken,

    /// File I/O error reading or writing the session file
    #[error("Session file I/O error")]
    Io(#[from] std::io::Error),
}

/// HTTP fetch errors
///
/// Non-success HTTP statuses are deliberately not represented here: the
/// response body is passed through verbatim whatever the status, so only
/// transport-level failures surface as errors.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    /// Endpoint URL could not be constructed
    #[error("Invalid URL for {coordinate}")]
    InvalidUrl {
        coordinate: Coordinate,
        #[source]
        source: url::ParseError,
    },
}

/// Scaffold creation errors
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// File I/O error creating the scaffold directory or its files
    #[error("Scaffold I/O error")]
    Io(#[from] std::io::Error),

    /// Input fetch failed while populating the scaffold
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Solution invocation errors
#[derive(Error, Debug)]
pub enum SolveError {
    /// No scaffold file at the expected path; fatal, nothing to run
    #[error("No solution file at {path}. Run `aoc setup` for this day first")]
    MissingScaffold { path: PathBuf },

    /// Scaffold exists on disk but no compiled solution is registered
    #[error("No solution registered for {coordinate}. Register the scaffolded day in `src/solutions`")]
    NotRegistered { coordinate: Coordinate },
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Session store error
    #[error(transparent)]
    Session(#[from] SessionError),

    /// HTTP fetch error
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Scaffold error
    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),

    /// Solution invocation error
    #[error(transparent)]
    Solve(#[from] SolveError),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit status for this error
    ///
    /// Every failure path exits 1; the mapping lives here so the CLI has a
    /// single place to extend if statuses ever diverge.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Session(_) => "session",
            AppError::Fetch(_) => "fetch",
            AppError::Scaffold(_) => "scaffold",
            AppError::Solve(_) => "solve",
            AppError::Io(_) => "io",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Session result type alias
pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Fetch result type alias
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Scaffold result type alias
pub type ScaffoldResult<T> = std::result::Result<T, ScaffoldError>;

/// Solve result type alias
pub type SolveResult<T> = std::result::Result<T, SolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_and_categories() {
        let err = AppError::Session(SessionError::Missing);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.category(), "session");

        let err = AppError::Solve(SolveError::MissingScaffold {
            path: PathBuf::from("years/2023/days/5/main.rs"),
        });
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.category(), "solve");
    }

    #[test]
    fn test_missing_session_message_names_login() {
        let message = SessionError::Missing.to_string();
        assert!(message.contains("aoc login"));
    }
}
