//! `sanitize` command: one sanitized name per output line.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

use sanitize_filename_core::Sanitizer;

/// Sanitizes every name and writes the results to `out`, one per line.
///
/// When a result is empty and `fallback` is set, the fallback is written
/// instead. Returns the number of names that were changed.
pub fn run_sanitize<W: Write>(
    sanitizer: &Sanitizer,
    names: &[String],
    fallback: Option<&str>,
    out: &mut W,
) -> Result<usize> {
    info!("Sanitizing {} name(s).", names.len());
    let mut changed = 0usize;

    for name in names {
        let sanitized = sanitizer.sanitize(name);
        if sanitized != *name {
            changed += 1;
            debug!("{:?} -> {:?}", name, sanitized);
        }
        let line = match fallback {
            Some(fallback) if sanitized.is_empty() => fallback,
            _ => sanitized.as_str(),
        };
        writeln!(out, "{}", line).context("Failed to write output")?;
    }

    out.flush().context("Failed to flush output")?;
    info!("{} of {} name(s) changed.", changed, names.len());
    Ok(changed)
}
