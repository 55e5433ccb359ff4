// sanitize-filename/src/lib.rs
//! # sanitize-filename CLI
//!
//! Thin command-line wrapper around `sanitize-filename-core`. Argument parsing
//! lives in `cli`, each subcommand in `commands`, and logging setup in `logger`.

pub mod cli;
pub mod commands;
pub mod logger;
