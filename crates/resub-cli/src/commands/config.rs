use anyhow::Result;
use resub_config::FileSettingsStore;
use std::process::ExitCode;

use crate::cli::ConfigCommands;
use crate::commands::{finish, open_session};

pub fn handle(cmd: ConfigCommands, store: FileSettingsStore) -> Result<ExitCode> {
    match cmd {
        // Needs no loaded settings, so it works even when the file is broken
        ConfigCommands::Path => {
            println!("{}", store.path().display());
            Ok(ExitCode::SUCCESS)
        }
        ConfigCommands::Show => show(store),
        ConfigCommands::SetMaxRecent { value } => set_max_recent(store, &value),
    }
}

fn show(store: FileSettingsStore) -> Result<ExitCode> {
    let session = open_session(store)?;
    let settings = session.settings();

    println!("Settings: {}", session.store().path().display());
    println!("  Max recent: {}", settings.max_recent);
    println!("  Recent expressions: {}", settings.recent_expressions.len());

    Ok(ExitCode::SUCCESS)
}

fn set_max_recent(store: FileSettingsStore, value: &str) -> Result<ExitCode> {
    let mut session = open_session(store)?;

    let result = session.set_max_recent(value);
    if let Ok(max_recent) = &result {
        tracing::debug!(input = value, max_recent = max_recent.get(), "max_recent updated");
        println!("✓ Max recent expressions: {}", max_recent);

        let stored = session.history().len();
        if stored > max_recent.get() {
            println!(
                "  {} stored entries kept; older ones drop as new expressions are added",
                stored
            );
        }
    }
    finish(result)
}
