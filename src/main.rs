//! aoc CLI application
//!
//! Thin binary around the library: parse arguments, initialize logging,
//! dispatch to the command handler, and map the single discriminated result
//! to a process exit status. No other code path terminates the process.

use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use aoc_helper::cli::{
    handle_fetch, handle_login, handle_setup, handle_solve, handle_subject, Cli, Commands,
};
use aoc_helper::session::SessionStore;

#[tokio::main]
async fn main() {
    process::exit(run().await);
}

/// Main application logic, returning the process exit status
async fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors, unknown commands, and --help all print their text
            // and share a non-zero status.
            let _ = err.print();
            return 1;
        }
    };

    init_logging(&cli);
    info!("aoc helper v{} starting", env!("CARGO_PKG_VERSION"));

    let store = SessionStore::new().with_trim(cli.global.trim_session);

    let result = match cli.command {
        Commands::Login => handle_login(&store).await,
        Commands::Fetch(args) => handle_fetch(&store, args).await,
        Commands::Subject(args) => handle_subject(&store, args).await,
        Commands::Setup(args) => handle_setup(&store, args).await,
        Commands::Solve(args) => handle_solve(&store, args).await,
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("Command failed ({})", e.category());
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Initialize logging based on CLI verbosity settings
fn init_logging(cli: &Cli) {
    let log_level = cli.log_level();

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("aoc_helper={}", log_level).parse().unwrap());

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
