//! compiler.rs - Manages the compilation and caching of filename rules.
//!
//! This module provides a thread-safe, cached mechanism to convert a slice of
//! `FilenameRule`s into `CompiledRules`. Compiled sets are keyed by a hash of
//! the rule table, so repeated `Sanitizer` construction never recompiles.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock};

use crate::errors::SanitizeError;
use crate::rules::{FilenameRule, RuleScope};

/// A single compiled filename rule.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The unique name of the rule.
    pub name: &'static str,
    pub description: &'static str,
    pub scope: RuleScope,
}

/// The ordered collection of compiled rules applied during a rewrite pass.
#[derive(Debug)]
pub struct CompiledRules {
    /// Rules in application order.
    pub rules: Vec<CompiledRule>,
}

impl CompiledRules {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompiledRule> {
        self.rules.iter()
    }
}

lazy_static! {
    /// A thread-safe, global cache for compiled rule sets.
    /// The key is a hash of the ordered rule table.
    static ref COMPILED_RULES_CACHE: RwLock<HashMap<u64, Arc<CompiledRules>>> = RwLock::new(HashMap::new());
}

/// Hashes a rule table to create a cache key.
///
/// Order is part of the key: the same rules in a different order rewrite differently.
fn hash_rules(rules: &[FilenameRule]) -> u64 {
    let mut hasher = DefaultHasher::new();
    for rule in rules {
        rule.name.hash(&mut hasher);
        rule.description.hash(&mut hasher);
        rule.pattern.hash(&mut hasher);
        rule.scope.hash(&mut hasher);
    }
    hasher.finish()
}

/// Compiles a rule table into `CompiledRules`, preserving order.
///
/// Stops at the first rule whose pattern does not compile. A rule that matches
/// the empty string is rejected too: replacing an empty match removes nothing,
/// so the rule could never be satisfied.
pub fn compile_rules(rules_to_compile: &[FilenameRule]) -> Result<CompiledRules, SanitizeError> {
    debug!("Starting compilation of {} filename rules.", rules_to_compile.len());

    let mut compiled_rules = Vec::with_capacity(rules_to_compile.len());

    for rule in rules_to_compile {
        debug!("Attempting to compile rule: '{}' with pattern '{:?}'", rule.name, rule.pattern);

        let regex = RegexBuilder::new(rule.pattern)
            .size_limit(1 << 20)
            .build()
            .map_err(|e| SanitizeError::RuleCompilationError(rule.name.to_string(), e))?;

        if regex.is_match("") {
            return Err(SanitizeError::EmptyMatchRule(rule.name.to_string()));
        }

        log::debug!(
            target: "sanitize_filename_core::compiler",
            "Rule '{}' compiled successfully.",
            rule.name
        );
        compiled_rules.push(CompiledRule {
            regex,
            name: rule.name,
            description: rule.description,
            scope: rule.scope,
        });
    }

    debug!("Finished compiling rules. Total compiled: {}.", compiled_rules.len());
    Ok(CompiledRules { rules: compiled_rules })
}

/// Gets a `CompiledRules` instance from the cache or compiles it if not found.
///
/// Returns an `Arc` so engines can share one compiled set cheaply.
pub fn get_or_compile_rules(rules: &[FilenameRule]) -> Result<Arc<CompiledRules>, SanitizeError> {
    let cache_key = hash_rules(rules);

    {
        let cache = COMPILED_RULES_CACHE.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(compiled) = cache.get(&cache_key) {
            debug!("Serving compiled rules from cache for key: {}", cache_key);
            return Ok(Arc::clone(compiled));
        }
    }

    debug!("Compiled rules not found in cache. Compiling now.");
    let compiled = compile_rules(rules)?;

    // Another thread may have won the race; keep whichever set landed first.
    let mut cache = COMPILED_RULES_CACHE.write().unwrap_or_else(PoisonError::into_inner);
    let cached = cache.entry(cache_key).or_insert_with(|| Arc::new(compiled));

    debug!("Successfully compiled and cached rules for key: {}", cache_key);
    Ok(Arc::clone(cached))
}
