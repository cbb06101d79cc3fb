pub mod config;
pub mod history;
pub mod replace;

use anyhow::Result;
use resub_config::FileSettingsStore;
use resub_core::{Notifier, Session};
use std::process::ExitCode;

pub type CliSession = Session<FileSettingsStore, StderrNotifier>;

/// Prints notifications to stderr
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, message: &str) {
        eprintln!("✗ {}", message);
    }
}

pub fn open_session(store: FileSettingsStore) -> Result<CliSession> {
    Ok(Session::open(store, StderrNotifier)?)
}

/// Map a session result to an exit code.
///
/// User-input errors were already shown by the notifier, so they only turn
/// into a failing exit code. Anything else propagates.
pub fn finish<T>(result: resub_core::Result<T>) -> Result<ExitCode> {
    match result {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) if err.is_user_input() => Ok(ExitCode::FAILURE),
        Err(err) => Err(err.into()),
    }
}
