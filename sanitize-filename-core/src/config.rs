//! Configuration management for `sanitize-filename-core`.
//!
//! `SanitizeOptions` carries the two knobs a caller can turn: the replacement
//! token used in the first rewrite pass and the byte budget for the final name.
//! Options can be built in code or loaded from a YAML file, and CLI flags can be
//! layered over a loaded file with [`SanitizeOptions::merge`].
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::SanitizeError;
use crate::rules::MAX_FILENAME_BYTES;

/// Options for a `Sanitizer`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SanitizeOptions {
    /// Text substituted for every rule match in the first pass. Any value is
    /// accepted, including one the rules themselves reject.
    pub replacement: String,
    /// Maximum UTF-8 length of the result. Must not exceed 255.
    pub max_bytes: usize,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            replacement: String::new(),
            max_bytes: MAX_FILENAME_BYTES,
        }
    }
}

/// Per-field overrides, typically sourced from command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub replacement: Option<String>,
    pub max_bytes: Option<usize>,
}

impl SanitizeOptions {
    pub fn with_replacement(replacement: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
            ..Self::default()
        }
    }

    /// Checks that the options can uphold the output guarantees.
    pub fn validate(&self) -> Result<(), SanitizeError> {
        if self.max_bytes > MAX_FILENAME_BYTES {
            return Err(SanitizeError::MaxBytesOutOfRange(self.max_bytes, MAX_FILENAME_BYTES));
        }
        if self.max_bytes == 0 {
            warn!("max_bytes is 0; every sanitized name will be empty.");
        }
        Ok(())
    }

    /// Parses options from a YAML string and validates them.
    pub fn from_yaml_str(text: &str) -> Result<Self, SanitizeError> {
        let options: SanitizeOptions = serde_yml::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading sanitize options from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .map_err(SanitizeError::from)
            .with_context(|| format!("Failed to read options file {}", path.display()))?;
        let options = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse options file {}", path.display()))?;
        debug!(
            "Loaded options from {}: replacement={:?}, max_bytes={}",
            path.display(),
            options.replacement,
            options.max_bytes
        );
        Ok(options)
    }

    /// Layers overrides on top of `self`. Fields left as `None` keep their value.
    pub fn merge(mut self, overrides: OptionOverrides) -> Result<Self, SanitizeError> {
        if let Some(replacement) = overrides.replacement {
            debug!("Overriding replacement with {:?}", replacement);
            self.replacement = replacement;
        }
        if let Some(max_bytes) = overrides.max_bytes {
            debug!("Overriding max_bytes with {}", max_bytes);
            self.max_bytes = max_bytes;
        }
        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SanitizeOptions::default();
        assert_eq!(options.replacement, "");
        assert_eq!(options.max_bytes, 255);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let options = SanitizeOptions::from_yaml_str("replacement: \"_\"\n").unwrap();
        assert_eq!(options.replacement, "_");
        assert_eq!(options.max_bytes, 255);
    }

    #[test]
    fn test_oversized_budget_is_rejected() {
        let err = SanitizeOptions::from_yaml_str("max_bytes: 256\n").unwrap_err();
        assert!(matches!(err, SanitizeError::MaxBytesOutOfRange(256, 255)));
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let err = SanitizeOptions::from_yaml_str("max_bytes: [1, 2").unwrap_err();
        assert!(matches!(err, SanitizeError::ConfigParse(_)));
    }

    #[test]
    fn test_merge_overrides_only_given_fields() {
        let base = SanitizeOptions {
            replacement: "-".to_string(),
            max_bytes: 100,
        };
        let merged = base
            .merge(OptionOverrides {
                replacement: None,
                max_bytes: Some(64),
            })
            .unwrap();
        assert_eq!(merged.replacement, "-");
        assert_eq!(merged.max_bytes, 64);
    }

    #[test]
    fn test_merge_validates_result() {
        let result = SanitizeOptions::default().merge(OptionOverrides {
            replacement: None,
            max_bytes: Some(1024),
        });
        assert!(result.is_err());
    }
}
