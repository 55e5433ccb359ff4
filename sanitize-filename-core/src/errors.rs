//! errors.rs - Custom error types for the sanitize-filename-core library.
//!
//! Sanitizing a name never fails. The variants here cover the layers around it:
//! compiling the rule table, validating options and loading them from disk.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by `sanitize-filename-core`.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SanitizeError {
    #[error("Failed to compile filename rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Filename rule '{0}' matches the empty string")]
    EmptyMatchRule(String),

    #[error("max_bytes ({0}) exceeds the filesystem name limit of {1} bytes")]
    MaxBytesOutOfRange(usize, usize),

    #[error("Failed to read options file: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Failed to parse options file: {0}")]
    ConfigParse(#[from] serde_yml::Error),
}
