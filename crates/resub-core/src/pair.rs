//! Pattern/replacement pair domain model

use serde::{Deserialize, Serialize};
use std::fmt;

/// A search pattern together with the replacement applied to its matches.
///
/// Two pairs are duplicates only when both strings are byte-for-byte equal.
/// No normalization happens, so `a|b` and `b|a` are distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternReplacementPair {
    pub pattern: String,
    pub replacement: String,
}

impl PatternReplacementPair {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

impl fmt::Display for PatternReplacementPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.pattern, self.replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_equality() {
        let a = PatternReplacementPair::new("a|b", "x");
        assert_eq!(a, PatternReplacementPair::new("a|b", "x"));
        assert_ne!(a, PatternReplacementPair::new("b|a", "x"));
        assert_ne!(a, PatternReplacementPair::new("a|b", "x "));
    }

    #[test]
    fn test_display_label() {
        let pair = PatternReplacementPair::new(r"(\w+)@(\w+)", "$2@$1");
        assert_eq!(pair.to_string(), r"(\w+)@(\w+) -> $2@$1");
    }

    #[test]
    fn test_json_shape() {
        let pair = PatternReplacementPair::new("x", "");
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json, serde_json::json!({ "pattern": "x", "replacement": "" }));
    }
}
