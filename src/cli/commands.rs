//! Command handlers for the aoc CLI
//!
//! Each handler is one short, blocking pipeline: session gate, a single
//! authenticated GET where needed, then print or write. Handlers never exit
//! the process themselves; they return a `Result` for the top-level mapper.

use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::app::{render_subject, solver, AocClient};
use crate::cli::{PuzzleArgs, SolveArgs};
use crate::constants::files;
use crate::errors::{Result, ScaffoldError, SessionError};
use crate::session::{print_login_instructions, prompt_token, SessionStore};
use crate::solutions;

/// Handle the login command
///
/// Shows the cookie-extraction walkthrough, prompts for the pasted value, and
/// stores it verbatim. An empty paste reports failure without writing, but is
/// not an error exit; the user just runs login again.
pub async fn handle_login(store: &SessionStore) -> Result<()> {
    print_login_instructions();

    let token = prompt_token()?;
    match store.write(&token) {
        Ok(()) => {
            info!("Session token stored at {}", store.path().display());
            println!("Done !");
            Ok(())
        }
        Err(SessionError::EmptyToken) => {
            println!("{}", SessionError::EmptyToken);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Handle the fetch command: print a day's raw input
pub async fn handle_fetch(store: &SessionStore, args: PuzzleArgs) -> Result<()> {
    store.ensure_exists()?;
    let client = AocClient::new(store.read()?)?;

    let input = client.fetch_input(args.coordinate()).await?;
    print!("{input}");
    io::stdout().flush()?;
    Ok(())
}

/// Handle the subject command: render a day's description as text
pub async fn handle_subject(store: &SessionStore, args: PuzzleArgs) -> Result<()> {
    store.ensure_exists()?;
    let client = AocClient::new(store.read()?)?;

    let html = client.fetch_page(args.coordinate()).await?;
    println!("{}", render_subject(&html));
    Ok(())
}

/// Handle the setup command: scaffold the day's directory
pub async fn handle_setup(store: &SessionStore, args: PuzzleArgs) -> Result<()> {
    store.ensure_exists()?;
    let client = AocClient::new(store.read()?)?;

    let coordinate = args.coordinate();
    let input = client
        .fetch_input(coordinate)
        .await
        .map_err(ScaffoldError::from)?;
    let dir = crate::app::write_scaffold(Path::new(files::SCAFFOLD_ROOT), coordinate, &input)?;
    println!("Scaffolded {} in {}", coordinate, dir.display());
    Ok(())
}

/// Handle the solve command: run the day's registered solution part(s)
pub async fn handle_solve(store: &SessionStore, args: SolveArgs) -> Result<()> {
    store.ensure_exists()?;

    let registry = solutions::registry();
    info!("{} solution(s) registered", registry.len());
    solver::solve(
        &registry,
        Path::new(files::SCAFFOLD_ROOT),
        args.puzzle.coordinate(),
        args.part,
    )?;
    Ok(())
}
