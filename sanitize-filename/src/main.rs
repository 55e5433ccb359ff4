// sanitize-filename/src/main.rs
//! sanitize-filename entry point.

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use sanitize_filename::cli::{Cli, Commands};
use sanitize_filename::commands::{self, check, rules, sanitize};
use sanitize_filename::logger;
use sanitize_filename_core::{SanitizeOptions, Sanitizer};
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));

    let stdout = io::stdout();
    let use_color = stdout.is_terminal();
    let mut out = BufWriter::new(stdout.lock());

    match args.command {
        Commands::Sanitize(cmd) => {
            let sanitizer = commands::build_sanitizer(&cmd.options)?;
            let names = commands::collect_names(cmd.names, io::stdin().lock())?;
            sanitize::run_sanitize(&sanitizer, &names, cmd.fallback.as_deref(), &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check(cmd) => {
            let sanitizer = commands::build_sanitizer(&cmd.options)?;
            let names = commands::collect_names(cmd.names, io::stdin().lock())?;
            let all_valid = check::run_check(&sanitizer, &names, cmd.json, use_color, &mut out)?;
            Ok(if all_valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Commands::Rules => {
            let sanitizer = Sanitizer::new(SanitizeOptions::default())?;
            rules::run_rules(&sanitizer, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
