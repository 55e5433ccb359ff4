//! Data structures for reporting why a name is not a safe filename.

use serde::{Deserialize, Serialize};

/// Rule name used for names that exceed the byte budget.
pub const TOO_LONG_RULE: &str = "too_long";

/// A single rule match found in a candidate name.
///
/// `start` and `end` are byte offsets into the name that was checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleViolation {
    pub rule_name: String,
    pub matched: String,
    pub start: usize,
    pub end: usize,
}

impl RuleViolation {
    pub fn new(rule_name: impl Into<String>, name: &str, start: usize, end: usize) -> Self {
        Self {
            rule_name: rule_name.into(),
            matched: name[start..end].to_string(),
            start,
            end,
        }
    }

    /// The overflow past `max_bytes`, starting at the first byte that would be cut.
    pub fn too_long(name: &str, cut_at: usize) -> Self {
        Self::new(TOO_LONG_RULE, name, cut_at, name.len())
    }
}
