//! Rule compilation for the regex-backed engine.
//!
//! This module turns the static `FilenameRule` table into compiled regular
//! expressions and caches the result so every `Sanitizer` in the process
//! shares one copy.

pub mod compiler;
