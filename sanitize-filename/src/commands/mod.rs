//! Command implementations and the helpers they share.

pub mod check;
pub mod rules;
pub mod sanitize;

use anyhow::{Context, Result};
use log::debug;
use std::io::BufRead;

use sanitize_filename_core::{OptionOverrides, SanitizeOptions, Sanitizer};

use crate::cli::OptionArgs;

/// Builds a `Sanitizer` from an optional options file plus flag overrides.
pub fn build_sanitizer(args: &OptionArgs) -> Result<Sanitizer> {
    let base = match &args.config {
        Some(path) => SanitizeOptions::load_from_file(path)?,
        None => SanitizeOptions::default(),
    };
    let options = base
        .merge(OptionOverrides {
            replacement: args.replacement.clone(),
            max_bytes: args.max_bytes,
        })
        .context("Invalid sanitize options")?;
    Ok(Sanitizer::new(options)?)
}

/// Returns `names` if any were given, otherwise every line of `reader`.
///
/// Line terminators (`\n` or `\r\n`) are stripped; anything else in the line,
/// including control characters, is kept for the sanitizer to handle.
pub fn collect_names<R: BufRead>(names: Vec<String>, reader: R) -> Result<Vec<String>> {
    if !names.is_empty() {
        return Ok(names);
    }
    debug!("No names given; reading from stdin.");
    let mut lines = Vec::new();
    for line in reader.lines() {
        let mut line = line.context("Failed to read input line")?;
        if line.ends_with('\r') {
            line.pop();
        }
        lines.push(line);
    }
    Ok(lines)
}
