//! Persisted settings model

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

use crate::{Error, PatternReplacementPair, Result};

/// Everything that survives a restart.
///
/// Missing fields fall back to their defaults, so a partial file is merged
/// over [`Settings::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_max_recent")]
    pub max_recent: NonZeroUsize,

    #[serde(default)]
    pub recent_expressions: Vec<PatternReplacementPair>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_recent: default_max_recent(),
            recent_expressions: Vec::new(),
        }
    }
}

fn default_max_recent() -> NonZeroUsize {
    NonZeroUsize::new(5).unwrap_or(NonZeroUsize::MIN)
}

/// Parse a user-edited `max_recent` value.
///
/// Reads the leading integer after trimming and an optional `+`, ignoring any
/// trailing text (`"3abc"` is 3, `"2.5"` is 2). Input without leading digits,
/// negative input, and `0` are rejected with [`Error::InvalidSettingsValue`].
pub fn parse_max_recent(input: &str) -> Result<NonZeroUsize> {
    let trimmed = input.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..digits_end]
        .parse::<NonZeroUsize>()
        .map_err(|_| Error::InvalidSettingsValue(input.to_string()))
}
