// sanitize-filename-core/src/engines/regex_engine.rs
//! A `RewriteEngine` implementation backed by regular expressions.
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;
use std::sync::Arc;

use log::trace;
use regex::NoExpand;

use crate::engine::RewriteEngine;
use crate::errors::SanitizeError;
use crate::rules::{FilenameRule, BUILTIN_RULES};
use crate::sanitizers::compiler::{get_or_compile_rules, CompiledRules};
use crate::violation::RuleViolation;

#[derive(Debug, Clone)]
pub struct RegexEngine {
    compiled_rules: Arc<CompiledRules>,
}

impl RegexEngine {
    /// Builds an engine over the built-in rule table.
    pub fn new() -> Result<Self, SanitizeError> {
        Self::with_rules(&BUILTIN_RULES)
    }

    /// Builds an engine over a caller-supplied rule table, applied in slice order.
    pub fn with_rules(rules: &[FilenameRule]) -> Result<Self, SanitizeError> {
        let compiled_rules = get_or_compile_rules(rules)?;
        Ok(Self { compiled_rules })
    }
}

impl RewriteEngine for RegexEngine {
    fn rewrite(&self, candidate: &str, replacement: &str) -> String {
        let mut current: Cow<'_, str> = Cow::Borrowed(candidate);

        for rule in self.compiled_rules.iter() {
            // NoExpand: a `$` in the replacement is literal text, not a group reference.
            let rewritten = match rule.regex.replace_all(&current, NoExpand(replacement)) {
                Cow::Owned(rewritten) => rewritten,
                Cow::Borrowed(_) => continue,
            };
            trace!("Rule '{}' rewrote {:?} -> {:?}", rule.name, current, rewritten);
            current = Cow::Owned(rewritten);
        }

        current.into_owned()
    }

    fn find_violations(&self, candidate: &str) -> Vec<RuleViolation> {
        let mut violations = Vec::new();
        for rule in self.compiled_rules.iter() {
            for m in rule.regex.find_iter(candidate) {
                violations.push(RuleViolation::new(rule.name, candidate, m.start(), m.end()));
            }
        }
        violations.sort_by_key(|v| v.start);
        violations
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }
}
