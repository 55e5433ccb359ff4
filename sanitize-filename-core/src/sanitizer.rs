// sanitize-filename-core/src/sanitizer.rs
//! The pass driver: turns any string into a safe filename.
//!
//! A first rewrite pass uses the caller's replacement token. Because that token
//! is untrusted, a cleanup pass with an empty token follows whenever the token
//! is non-empty. The result is then cut to the byte budget and, if truncation or
//! a rule exposed a fresh violation (`"con ."` loses its trailing run and
//! becomes `"con"`), the empty-token pass is repeated until no rule matches.
//! With the built-in rules every such pass deletes text; the loop also stops
//! as soon as a pass changes nothing, so a custom engine cannot hang it.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;
use log::{debug, trace, warn};

use crate::config::SanitizeOptions;
use crate::engine::RewriteEngine;
use crate::engines::regex_engine::RegexEngine;
use crate::errors::SanitizeError;
use crate::sanitizers::compiler::CompiledRules;
use crate::truncate::{floor_char_boundary, truncate_in_place};
use crate::violation::RuleViolation;

lazy_static! {
    static ref DEFAULT_ENGINE: RegexEngine =
        RegexEngine::new().expect("built-in filename rules are valid regular expressions");
}

/// Runs the full pipeline over `input` with the given engine.
fn run_passes(engine: &dyn RewriteEngine, input: &str, replacement: &str, max_bytes: usize) -> String {
    let mut current = engine.rewrite(input, replacement);

    if !replacement.is_empty() {
        trace!("Running cleanup pass after replacement {:?}", replacement);
        current = engine.rewrite(&current, "");
    }

    let mut passes = 0usize;
    loop {
        truncate_in_place(&mut current, max_bytes);
        if engine.is_clean(&current) {
            break;
        }
        let next = engine.rewrite(&current, "");
        if next == current {
            warn!("Rewrite pass made no progress on {:?}; returning it as is", current);
            break;
        }
        passes += 1;
        current = next;
    }

    if passes > 0 {
        debug!("Name needed {} extra cleanup pass(es) to settle", passes);
    }
    current
}

/// Sanitizes `input` with an empty replacement and the default 255-byte budget.
///
/// ```
/// use sanitize_filename_core::sanitize;
///
/// assert_eq!(sanitize("h?w"), "hw");
/// assert_eq!(sanitize("aux.txt"), "");
/// ```
pub fn sanitize(input: &str) -> String {
    sanitize_with_replacement(input, "")
}

/// Sanitizes `input`, substituting `replacement` for each violation.
///
/// The replacement cannot smuggle an unsafe name through: anything it
/// introduces is removed again.
///
/// ```
/// use sanitize_filename_core::sanitize_with_replacement;
///
/// assert_eq!(sanitize_with_replacement("h?w", "_"), "h_w");
/// assert_eq!(sanitize_with_replacement("con.txt", "aux"), "");
/// ```
pub fn sanitize_with_replacement(input: &str, replacement: &str) -> String {
    run_passes(&*DEFAULT_ENGINE, input, replacement, crate::rules::MAX_FILENAME_BYTES)
}

/// Decodes UTF-16 lossily, then sanitizes. Unpaired surrogates become U+FFFD.
pub fn sanitize_utf16(units: &[u16], replacement: &str) -> String {
    sanitize_with_replacement(&String::from_utf16_lossy(units), replacement)
}

/// Decodes UTF-8 lossily, then sanitizes. Invalid sequences become U+FFFD.
pub fn sanitize_bytes(bytes: &[u8], replacement: &str) -> String {
    sanitize_with_replacement(&String::from_utf8_lossy(bytes), replacement)
}

/// Returns true if `name` is already a safe filename under the default rules.
pub fn is_valid(name: &str) -> bool {
    name.len() <= crate::rules::MAX_FILENAME_BYTES && DEFAULT_ENGINE.is_clean(name)
}

/// A reusable sanitizer with fixed options.
///
/// Cheap to clone; clones share the compiled rule table.
#[derive(Clone)]
pub struct Sanitizer {
    engine: Arc<dyn RewriteEngine>,
    options: SanitizeOptions,
}

impl fmt::Debug for Sanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sanitizer")
            .field("rules", &self.engine.compiled_rules().len())
            .field("options", &self.options)
            .finish()
    }
}

impl Sanitizer {
    /// Builds a sanitizer over the built-in rules.
    pub fn new(options: SanitizeOptions) -> Result<Self, SanitizeError> {
        Self::with_engine(options, Arc::new(RegexEngine::new()?))
    }

    /// Builds a sanitizer over a caller-supplied engine.
    pub fn with_engine(options: SanitizeOptions, engine: Arc<dyn RewriteEngine>) -> Result<Self, SanitizeError> {
        options.validate()?;
        debug!(
            "Sanitizer ready with {} rules, replacement={:?}, max_bytes={}",
            engine.compiled_rules().len(),
            options.replacement,
            options.max_bytes
        );
        Ok(Self { engine, options })
    }

    pub fn options(&self) -> &SanitizeOptions {
        &self.options
    }

    /// The ordered rule table this sanitizer applies.
    pub fn rules(&self) -> &CompiledRules {
        self.engine.compiled_rules()
    }

    pub fn sanitize(&self, input: &str) -> String {
        run_passes(self.engine.as_ref(), input, &self.options.replacement, self.options.max_bytes)
    }

    /// Lists every reason `name` is not a safe filename, ordered by position.
    ///
    /// A name over the byte budget gets one extra `too_long` entry covering the
    /// bytes that truncation would remove.
    pub fn violations(&self, name: &str) -> Vec<RuleViolation> {
        let mut violations = self.engine.find_violations(name);
        if name.len() > self.options.max_bytes {
            let cut_at = floor_char_boundary(name, self.options.max_bytes);
            violations.push(RuleViolation::too_long(name, cut_at));
        }
        violations
    }

    pub fn is_valid(&self, name: &str) -> bool {
        name.len() <= self.options.max_bytes && self.engine.is_clean(name)
    }
}
