// sanitize-filename-core/src/engine.rs
//! Defines the core `RewriteEngine` trait.
//!
//! A rewrite engine applies an ordered rule table to a candidate name in one
//! pass. The `Sanitizer` drives one or more passes through this trait, so an
//! alternative engine can be swapped in without touching the pass logic.
//!
//! License: MIT OR APACHE 2.0

use crate::sanitizers::compiler::CompiledRules;
use crate::violation::RuleViolation;

/// A single-pass rule engine over candidate filenames.
pub trait RewriteEngine: Send + Sync {
    /// Applies every rule in order, each to the output of the previous one,
    /// replacing every match with `replacement`.
    ///
    /// # Arguments
    /// * `candidate` - The string to rewrite.
    /// * `replacement` - The text substituted for each match. May be empty.
    fn rewrite(&self, candidate: &str, replacement: &str) -> String;

    /// Reports every rule match in `candidate` without rewriting it.
    ///
    /// Each rule is evaluated against `candidate` itself, so an empty result
    /// means a rewrite with an empty replacement would leave it unchanged.
    fn find_violations(&self, candidate: &str) -> Vec<RuleViolation>;

    /// Returns the compiled rule table used by the engine.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Returns true when no rule matches `candidate`.
    fn is_clean(&self, candidate: &str) -> bool {
        self.compiled_rules().iter().all(|rule| !rule.regex.is_match(candidate))
    }
}
