// sanitize-filename-core/src/lib.rs
//! # sanitize-filename core library
//!
//! `sanitize-filename-core` converts arbitrary, possibly hostile text into a
//! name that every major filesystem accepts: no separators, wildcards or
//! control characters, no `.`/`..`, no Windows device names (with or without
//! an extension), no trailing dots or spaces, and at most 255 UTF-8 bytes.
//!
//! The library is pure and stateless. It performs no I/O beyond the optional
//! loading of a YAML options file.
//!
//! ## Modules
//!
//! * `rules`: The ordered table of filename rules.
//! * `sanitizers`: Compiles and caches the rule table.
//! * `engine`: The `RewriteEngine` trait, one rewrite pass over a name.
//! * `engines`: Concrete engines (`RegexEngine`).
//! * `sanitizer`: The pass driver and the public entry points.
//! * `truncate`: Byte-budget truncation on character boundaries.
//! * `config`: `SanitizeOptions` and YAML loading.
//! * `violation`: Reporting types for `check`-style use.
//! * `errors`: The `SanitizeError` enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use sanitize_filename_core::{sanitize, sanitize_with_replacement, SanitizeOptions, Sanitizer};
//!
//! assert_eq!(sanitize("the quick brown fox.mp3"), "the quick brown fox.mp3");
//! assert_eq!(sanitize("../etc/passwd"), "..etcpasswd");
//! assert_eq!(sanitize_with_replacement("h?w", "_"), "h_w");
//!
//! let sanitizer = Sanitizer::new(SanitizeOptions::with_replacement("-")).unwrap();
//! assert_eq!(sanitizer.sanitize("a:b"), "a-b");
//! assert!(!sanitizer.is_valid("COM1.log"));
//! ```
//!
//! ## Error Handling
//!
//! Sanitizing never fails and may return an empty string; picking a fallback
//! name is the caller's job. `SanitizeError` covers option validation and
//! options-file loading only.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod rules;
pub mod sanitizer;
pub mod sanitizers;
pub mod truncate;
pub mod violation;

/// Re-exports the options type and its override layer.
pub use config::{OptionOverrides, SanitizeOptions};

pub use errors::SanitizeError;

pub use engine::RewriteEngine;
pub use engines::regex_engine::RegexEngine;

pub use rules::{FilenameRule, RuleScope, BUILTIN_RULES, MAX_FILENAME_BYTES};

/// Re-exports the one-shot entry points and the reusable `Sanitizer`.
pub use sanitizer::{is_valid, sanitize, sanitize_bytes, sanitize_utf16, sanitize_with_replacement, Sanitizer};

pub use sanitizers::compiler::{compile_rules, CompiledRule, CompiledRules};

pub use truncate::truncate;

pub use violation::{RuleViolation, TOO_LONG_RULE};
