use anyhow::Result;
use std::process::ExitCode;

use crate::cli::HistoryCommands;
use crate::commands::{CliSession, finish};

pub fn handle(cmd: HistoryCommands, session: &mut CliSession) -> Result<ExitCode> {
    match cmd {
        HistoryCommands::List { json } => list(session, json),
        HistoryCommands::Remove { index } => remove(session, index),
    }
}

fn list(session: &CliSession, json: bool) -> Result<ExitCode> {
    let history = session.history();

    if json {
        println!("{}", serde_json::to_string_pretty(&history.snapshot())?);
        return Ok(ExitCode::SUCCESS);
    }

    if history.is_empty() {
        println!("No recent expressions.");
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "Recent expressions ({}/{}):",
        history.len(),
        history.max_recent()
    );
    for (index, pair) in history.iter().enumerate() {
        println!("  [{}] {}", index, pair);
    }

    Ok(ExitCode::SUCCESS)
}

fn remove(session: &mut CliSession, index: usize) -> Result<ExitCode> {
    // Only indices from the current listing are valid
    if session.recall(index).is_none() {
        tracing::debug!(index, len = session.history().len(), "no history entry at index");
        eprintln!("✗ No recent expression at index {}", index);
        return Ok(ExitCode::FAILURE);
    }

    let result = session.remove_recent(index);
    if let Ok(removed) = &result {
        println!("✓ Removed: {}", removed);
    }
    finish(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::open_session;
    use resub_config::FileSettingsStore;
    use resub_core::{PatternReplacementPair, Settings, SettingsStore};
    use std::num::NonZeroUsize;

    fn seeded(dir: &tempfile::TempDir) -> FileSettingsStore {
        let store = FileSettingsStore::new(dir.path().join("settings.toml"));
        store
            .save(&Settings {
                max_recent: NonZeroUsize::new(5).unwrap(),
                recent_expressions: vec![
                    PatternReplacementPair::new("a", "1"),
                    PatternReplacementPair::new("b", "2"),
                    PatternReplacementPair::new("c", "3"),
                ],
            })
            .unwrap();
        store
    }

    #[test]
    fn test_remove_persists_remaining_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = open_session(seeded(&dir)).unwrap();

        let code = handle(HistoryCommands::Remove { index: 1 }, &mut session).unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        let saved = session.store().load().unwrap().unwrap();
        assert_eq!(
            saved.recent_expressions,
            vec![
                PatternReplacementPair::new("a", "1"),
                PatternReplacementPair::new("c", "3"),
            ]
        );
    }

    #[test]
    fn test_remove_out_of_range_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = open_session(seeded(&dir)).unwrap();
        let before = std::fs::read_to_string(session.store().path()).unwrap();

        let code = handle(HistoryCommands::Remove { index: 3 }, &mut session).unwrap();

        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(session.history().len(), 3);
        assert_eq!(std::fs::read_to_string(session.store().path()).unwrap(), before);
    }

    #[test]
    fn test_list_handles_empty_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut empty =
            open_session(FileSettingsStore::new(dir.path().join("empty.toml"))).unwrap();
        assert_eq!(
            handle(HistoryCommands::List { json: false }, &mut empty).unwrap(),
            ExitCode::SUCCESS
        );

        let mut session = open_session(seeded(&dir)).unwrap();
        assert_eq!(
            handle(HistoryCommands::List { json: true }, &mut session).unwrap(),
            ExitCode::SUCCESS
        );
    }
}
