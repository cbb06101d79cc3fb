mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use resub_config::FileSettingsStore;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = match cli.config {
        Some(path) => FileSettingsStore::new(path),
        None => FileSettingsStore::open_default(),
    };

    match cli.command {
        cli::Commands::Replace(args) => {
            let mut session = commands::open_session(store)?;
            commands::replace::handle(args, &mut session)
        }
        cli::Commands::History(cmd) => {
            let mut session = commands::open_session(store)?;
            commands::history::handle(cmd, &mut session)
        }
        cli::Commands::Config(cmd) => commands::config::handle(cmd, store),
    }
}
