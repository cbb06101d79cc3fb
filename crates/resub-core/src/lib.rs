//! Core logic for resub
//!
//! This crate contains:
//! - Substitution engine (regex compile + replace-all)
//! - Recent-expression history (bounded, deduplicated)
//! - Settings model and the collaborator traits a host implements
//! - Session, the single owner wiring them together

pub mod engine;
pub mod error;
pub mod history;
pub mod host;
pub mod pair;
pub mod session;
pub mod settings;

pub use engine::{Applied, Substitution, SubstitutionEngine};
pub use error::{Error, Result};
pub use history::HistoryStore;
pub use host::{Buffer, Cursor, MemoryBuffer, MemorySettingsStore, Notifier, SettingsStore};
pub use pair::PatternReplacementPair;
pub use session::{Outcome, Session};
pub use settings::{Settings, parse_max_recent};
