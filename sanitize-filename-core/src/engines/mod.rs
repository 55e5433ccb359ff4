// sanitize-filename-core/src/engines/mod.rs
//! Concrete implementations of the `RewriteEngine` trait.
//!
//! Each engine lives in its own file and is declared here with `pub mod`.

pub mod regex_engine;
