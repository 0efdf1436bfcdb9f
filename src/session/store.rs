//! Session token storage and the interactive login flow
//!
//! The session cookie is pasted by the user once and persisted as the entire
//! contents of `session.txt` in the working directory. It is replayed
//! verbatim on every request; the website is the only authority on whether it
//! is still valid.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::files;
use crate::errors::{SessionError, SessionResult};

/// On-disk store for the session token
///
/// Reads are verbatim by default, including any stray whitespace from the
/// paste; `trim` opts into stripping it for users whose terminal appends some.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
    trim: bool,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Store backed by `session.txt` in the working directory
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(files::SESSION_FILE),
            trim: false,
        }
    }

    /// Store backed by an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            trim: false,
        }
    }

    /// Enable or disable trimming of surrounding whitespace on read
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a session has been stored
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Fail fast when no session is stored
    ///
    /// Checked at the start of every command that talks to the network,
    /// before any request is attempted.
    pub fn ensure_exists(&self) -> SessionResult<()> {
        if self.exists() {
            Ok(())
        } else {
            Err(SessionError::Missing)
        }
    }

    /// Read the stored token
    pub fn read(&self) -> SessionResult<String> {
        if !self.exists() {
            return Err(SessionError::Missing);
        }
        let token = fs::read_to_string(&self.path)?;
        debug!("Read session token ({} bytes)", token.len());
        if self.trim {
            Ok(token.trim().to_string())
        } else {
            Ok(token)
        }
    }

    /// Overwrite the store with exactly the provided token
    ///
    /// An empty token is rejected and the file is left untouched.
    pub fn write(&self, token: &str) -> SessionResult<()> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        fs::write(&self.path, token)?;
        debug!("Wrote session token to {}", self.path.display());
        Ok(())
    }
}

/// Print the cookie-extraction walkthrough shown by `aoc login`
pub fn print_login_instructions() {
    println!("Follow these steps to get the \"session\" cookie");
    println!("Go to https://adventofcode.com");
    println!("Login to your account if it is not done already");
    println!("Inspect the page, go to the Network tab");
    println!("Find the current page \"document\" request");
    println!("Copy the \"session\" cookie in the Cookie request headers");
    println!("Cookie: \"session=xxx;other=yyy;bar=zzz\"");
}

/// Prompt for the pasted session value and read one line from stdin
///
/// Only the line terminator is stripped; whatever the user pasted is kept
/// as-is, trailing whitespace included.
pub fn prompt_token() -> SessionResult<String> {
    print!("Paste session value here: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
