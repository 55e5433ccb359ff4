//! `check` command: report rule violations without rewriting.

use anyhow::{Context, Result};
use log::info;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use sanitize_filename_core::{RuleViolation, Sanitizer};

/// The report entry for one checked name.
#[derive(Debug, Serialize)]
pub struct NameReport<'a> {
    pub name: &'a str,
    pub valid: bool,
    pub sanitized: String,
    pub violations: Vec<RuleViolation>,
}

pub fn build_reports<'a>(sanitizer: &Sanitizer, names: &'a [String]) -> Vec<NameReport<'a>> {
    names
        .iter()
        .map(|name| {
            let violations = sanitizer.violations(name);
            NameReport {
                name: name.as_str(),
                valid: violations.is_empty(),
                sanitized: sanitizer.sanitize(name),
                violations,
            }
        })
        .collect()
}

/// Checks every name and writes a report to `out`.
///
/// Returns true when all names are already valid.
pub fn run_check<W: Write>(
    sanitizer: &Sanitizer,
    names: &[String],
    json: bool,
    use_color: bool,
    out: &mut W,
) -> Result<bool> {
    let reports = build_reports(sanitizer, names);
    let invalid = reports.iter().filter(|r| !r.valid).count();
    info!("Checked {} name(s); {} invalid.", reports.len(), invalid);

    if json {
        serde_json::to_writer_pretty(&mut *out, &reports).context("Failed to serialize report")?;
        writeln!(out)?;
    } else {
        for report in &reports {
            write_text_report(out, report, use_color)?;
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(invalid == 0)
}

fn write_text_report<W: Write>(out: &mut W, report: &NameReport<'_>, use_color: bool) -> Result<()> {
    if report.valid {
        let status = if use_color { "ok".green().to_string() } else { "ok".to_string() };
        writeln!(out, "{} {:?}", status, report.name)?;
        return Ok(());
    }

    let status = if use_color { "invalid".red().to_string() } else { "invalid".to_string() };
    writeln!(out, "{} {:?} -> {:?}", status, report.name, report.sanitized)?;
    for v in &report.violations {
        writeln!(out, "  {} [{}..{}] {:?}", v.rule_name, v.start, v.end, v.matched)?;
    }
    Ok(())
}
