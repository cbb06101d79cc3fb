//! Substitution engine - compile a pattern, replace every match
//!
//! Patterns use the `regex` crate dialect. Replacement strings follow the same
//! crate's expansion rules:
//! - `$1` / `${1}` insert a numbered capture group, `$0` the whole match
//! - `${name}` inserts a named group
//! - `$$` is a literal dollar sign
//!
//! A reference such as `$1a` is read as the group named `1a`; write `${1}a`
//! when a group number is followed by word characters.
//!
//! The engine holds no state. The same (pattern, replacement, text) always
//! yields the same output.

use crate::{Error, Result};
use regex::{Captures, Regex};

/// Stateless pattern-replace executor
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstitutionEngine;

impl SubstitutionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compile `pattern` into a matcher that replaces all matches.
    pub fn compile(&self, pattern: &str) -> Result<Substitution> {
        match Regex::new(pattern) {
            Ok(regex) => Ok(Substitution { regex }),
            Err(err) => {
                tracing::debug!(pattern, error = %err, "pattern failed to compile");
                Err(Error::InvalidPattern(err.to_string()))
            }
        }
    }

    /// Replace every non-overlapping match of `pattern` in `text`.
    ///
    /// Zero matches is a success and returns `text` unchanged. A malformed
    /// pattern fails with [`Error::InvalidPattern`] before anything is touched.
    pub fn compile_and_apply(&self, pattern: &str, replacement: &str, text: &str) -> Result<String> {
        Ok(self.compile(pattern)?.apply(replacement, text).text)
    }
}

/// A compiled, global pattern
#[derive(Debug, Clone)]
pub struct Substitution {
    regex: Regex,
}

/// Result of applying a [`Substitution`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub text: String,
    pub replacements: usize,
}

impl Applied {
    pub fn is_unchanged(&self) -> bool {
        self.replacements == 0
    }
}

impl Substitution {
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn apply(&self, replacement: &str, text: &str) -> Applied {
        let mut replacements = 0;
        let replaced = self.regex.replace_all(text, |caps: &Captures<'_>| {
            replacements += 1;
            let mut expanded = String::new();
            caps.expand(replacement, &mut expanded);
            expanded
        });

        Applied {
            text: replaced.into_owned(),
            replacements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_capture_groups() {
        let engine = SubstitutionEngine::new();
        let out = engine
            .compile_and_apply(r"(\w+)@(\w+)", "$2@$1", "user@host")
            .unwrap();
        assert_eq!(out, "host@user");
    }

    #[test]
    fn test_empty_replacement_deletes_every_match() {
        let engine = SubstitutionEngine::new();
        let out = engine.compile_and_apply("x", "", "xaxbx").unwrap();
        assert_eq!(out, "ab");
    }

    #[test]
    fn test_zero_matches_returns_input() {
        let engine = SubstitutionEngine::new();
        let text = "nothing to see here";
        let out = engine.compile_and_apply("zzz", "y", text).unwrap();
        assert_eq!(out, text);

        let applied = engine.compile("zzz").unwrap().apply("y", text);
        assert!(applied.is_unchanged());
    }

    #[test]
    fn test_empty_text() {
        let engine = SubstitutionEngine::new();
        assert_eq!(engine.compile_and_apply("a", "b", "").unwrap(), "");
    }

    #[test]
    fn test_invalid_pattern_carries_diagnostic() {
        let engine = SubstitutionEngine::new();
        let err = engine.compile_and_apply("(unclosed", "x", "text").unwrap_err();
        match err {
            Error::InvalidPattern(msg) => assert!(!msg.is_empty()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_replacement_count() {
        let engine = SubstitutionEngine::new();
        let applied = engine.compile("o").unwrap().apply("0", "foo boo");
        assert_eq!(applied.text, "f00 b00");
        assert_eq!(applied.replacements, 4);
    }

    #[test]
    fn test_named_groups_and_literal_dollar() {
        let engine = SubstitutionEngine::new();
        let out = engine
            .compile_and_apply(r"(?P<amount>\d+) USD", "$$${amount}", "cost: 42 USD")
            .unwrap();
        assert_eq!(out, "cost: $42");
    }

    #[test]
    fn test_braced_group_before_word_chars() {
        let engine = SubstitutionEngine::new();
        let out = engine.compile_and_apply(r"(\d)", "${1}a", "1 2").unwrap();
        assert_eq!(out, "1a 2a");
    }

    #[test]
    fn test_reapplying_is_not_idempotent() {
        let engine = SubstitutionEngine::new();
        let once = engine.compile_and_apply("a", "aa", "a").unwrap();
        let twice = engine.compile_and_apply("a", "aa", &once).unwrap();
        assert_eq!(once, "aa");
        assert_eq!(twice, "aaaa");
    }

    #[test]
    fn test_deterministic() {
        let engine = SubstitutionEngine::new();
        let first = engine.compile_and_apply(r"\s+", " ", "a  b\t\tc").unwrap();
        let second = engine.compile_and_apply(r"\s+", " ", "a  b\t\tc").unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "a b c");
    }
}
