//! `rules` command: print the rule table.

use anyhow::Result;
use std::io::Write;

use sanitize_filename_core::Sanitizer;

pub fn run_rules<W: Write>(sanitizer: &Sanitizer, out: &mut W) -> Result<()> {
    for (position, rule) in sanitizer.rules().iter().enumerate() {
        writeln!(
            out,
            "{}. {:<20} {:<12} {}",
            position + 1,
            rule.name,
            format!("[{}]", rule.scope),
            rule.description
        )?;
    }
    writeln!(out, "then: truncate to {} bytes", sanitizer.options().max_bytes)?;
    Ok(())
}
