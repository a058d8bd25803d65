// snowcheck/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> miette::Result<()> {
    // Credentials may live in a local .env, a missing file is fine.
    dotenvy::dotenv().ok();

    // 1. Setup Logging (Tracing) on stderr, stdout is reserved for the result.
    // RUST_LOG=debug snowcheck check ... to see the details
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { connection } => commands::check::execute(connection).await?,
        Commands::Config { connection } => commands::config::execute(connection)?,
    }

    Ok(())
}
