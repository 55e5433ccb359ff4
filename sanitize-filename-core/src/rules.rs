//! rules.rs - The ordered table of filename rules.
//!
//! Every rule describes one way a name can be rejected by some filesystem or
//! operating system. The table order is significant: each rule is applied to
//! the output of the rule before it.
//!
//! License: MIT OR APACHE 2.0

use serde::Serialize;
use std::fmt;

/// Where in the candidate string a rule is allowed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleScope {
    /// Any span of the string, possibly many times.
    Anywhere,
    /// Only the string as a whole.
    WholeName,
    /// Only the end of the string.
    Suffix,
}

impl RuleScope {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleScope::Anywhere => "anywhere",
            RuleScope::WholeName => "whole_name",
            RuleScope::Suffix => "suffix",
        }
    }
}

impl fmt::Display for RuleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single, uncompiled filename rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilenameRule {
    /// Stable identifier used in logs and violation reports.
    pub name: &'static str,
    /// Human-readable description of what the rule rejects.
    pub description: &'static str,
    /// The regex pattern source.
    pub pattern: &'static str,
    pub scope: RuleScope,
}

/// Characters that are separators or wildcards on Windows and/or POSIX.
pub const ILLEGAL_CHARACTERS: FilenameRule = FilenameRule {
    name: "illegal_characters",
    description: "Path separators, wildcards and shell metacharacters: / ? < > \\ : * | \"",
    pattern: r#"[/?<>\\:*|"]"#,
    scope: RuleScope::Anywhere,
};

/// C0 and C1 control characters.
pub const CONTROL_CHARACTERS: FilenameRule = FilenameRule {
    name: "control_characters",
    description: "Non-printable control characters (U+0000-U+001F, U+0080-U+009F)",
    pattern: r"[\x00-\x1f\x{80}-\x{9f}]",
    scope: RuleScope::Anywhere,
};

/// `.`, `..` and any longer run of dots.
pub const RELATIVE_PATH: FilenameRule = FilenameRule {
    name: "relative_path",
    description: "Names made only of dots (., .., ...)",
    pattern: r"^\.+$",
    scope: RuleScope::WholeName,
};

/// Device names reserved by Windows, with or without an extension.
pub const WINDOWS_RESERVED: FilenameRule = FilenameRule {
    name: "windows_reserved",
    description: "Windows device names (CON, PRN, AUX, NUL, COM1-9, LPT1-9) with any extension",
    pattern: r"(?is)^(con|prn|aux|nul|com[1-9]|lpt[1-9])(\..*)?$",
    scope: RuleScope::WholeName,
};

/// Windows strips trailing dots and spaces, so such names never round-trip.
pub const WINDOWS_TRAILING: FilenameRule = FilenameRule {
    name: "windows_trailing",
    description: "Trailing dots and spaces",
    pattern: r"[. ]+$",
    scope: RuleScope::Suffix,
};

/// The built-in rule table, in application order.
pub const BUILTIN_RULES: [FilenameRule; 5] = [
    ILLEGAL_CHARACTERS,
    CONTROL_CHARACTERS,
    RELATIVE_PATH,
    WINDOWS_RESERVED,
    WINDOWS_TRAILING,
];

/// Largest name, in UTF-8 bytes, that ext4, APFS and friends accept.
pub const MAX_FILENAME_BYTES: usize = 255;
