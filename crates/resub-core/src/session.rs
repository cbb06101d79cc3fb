//! Session - sole owner of the settings for one host
//!
//! Loads once at start, routes every user action through the engine and the
//! history, turns user-input errors into a single notification, and saves
//! after each mutation.

use std::num::NonZeroUsize;

use crate::host::{Buffer, Notifier, SettingsStore};
use crate::settings::parse_max_recent;
use crate::{Error, HistoryStore, PatternReplacementPair, Result, Settings, SubstitutionEngine};

pub const EMPTY_PATTERN_MESSAGE: &str = "Please enter a valid search pattern.";
pub const INVALID_MAX_RECENT_MESSAGE: &str = "Please enter a valid positive number.";

/// What a successful [`Session::execute`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Number of matches replaced in the buffer
    pub replacements: usize,
    /// Whether the pair was new to the history
    pub recorded: bool,
}

pub struct Session<S, N> {
    engine: SubstitutionEngine,
    history: HistoryStore,
    store: S,
    notifier: N,
}

impl<S: SettingsStore, N: Notifier> Session<S, N> {
    /// Load persisted settings, merged over defaults.
    pub fn open(store: S, notifier: N) -> Result<Self> {
        let settings = store.load()?.unwrap_or_default();
        tracing::debug!(
            entries = settings.recent_expressions.len(),
            max_recent = settings.max_recent.get(),
            "loaded settings"
        );

        let mut history = HistoryStore::new(settings.max_recent);
        history.restore(settings.recent_expressions, settings.max_recent);

        Ok(Self {
            engine: SubstitutionEngine::new(),
            history,
            store,
            notifier,
        })
    }

    /// Run `request` against `buffer`.
    ///
    /// The buffer is only written on success: value first, then the cursor it
    /// had before the substitution.
    pub fn execute<B: Buffer>(
        &mut self,
        buffer: &mut B,
        request: &PatternReplacementPair,
    ) -> Result<Outcome> {
        if request.pattern.is_empty() {
            self.notifier.notify(EMPTY_PATTERN_MESSAGE);
            return Err(Error::EmptyPattern);
        }

        let substitution = match self.engine.compile(&request.pattern) {
            Ok(substitution) => substitution,
            Err(err) => {
                self.notifier.notify(&err.to_string());
                return Err(err);
            }
        };

        let cursor = buffer.cursor();
        let applied = substitution.apply(&request.replacement, &buffer.value());

        let recorded = self.history.insert(request.clone());
        if recorded {
            self.persist();
        }

        buffer.set_value(applied.text);
        buffer.set_cursor(cursor);

        tracing::info!(
            pattern = %request.pattern,
            replacements = applied.replacements,
            "substitution applied"
        );

        Ok(Outcome {
            replacements: applied.replacements,
            recorded,
        })
    }

    /// The history entry at `index`, ready to execute
    pub fn recall(&self, index: usize) -> Option<PatternReplacementPair> {
        self.history.get(index).cloned()
    }

    pub fn remove_recent(&mut self, index: usize) -> Result<PatternReplacementPair> {
        match self.history.remove_at(index) {
            Ok(removed) => {
                self.persist();
                Ok(removed)
            }
            Err(err) => {
                tracing::error!(error = %err, "history removal out of sync with caller");
                Err(err)
            }
        }
    }

    /// Apply a user-edited `max_recent` value.
    ///
    /// Invalid input is reported and leaves the setting untouched. A lower
    /// limit does not truncate the existing history.
    pub fn set_max_recent(&mut self, input: &str) -> Result<NonZeroUsize> {
        let max_recent = match parse_max_recent(input) {
            Ok(value) => value,
            Err(err) => {
                self.notifier.notify(INVALID_MAX_RECENT_MESSAGE);
                return Err(err);
            }
        };

        self.history.set_max_recent(max_recent);
        self.persist();
        Ok(max_recent)
    }

    pub fn settings(&self) -> Settings {
        Settings {
            max_recent: self.history.max_recent(),
            recent_expressions: self.history.snapshot(),
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.settings()) {
            tracing::warn!(error = %err, "failed to save settings");
        }
    }
}
