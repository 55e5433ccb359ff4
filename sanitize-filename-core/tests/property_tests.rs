//! Property-based tests for the sanitizer's output guarantees.
//!
//! These use proptest to check idempotence, the safety predicate for arbitrary
//! input and replacement tokens, and the byte-length bound of truncation.

use proptest::prelude::*;
use sanitize_filename_core::{sanitize, sanitize_with_replacement, truncate};

// =============================================================================
// Helper Functions
// =============================================================================

fn is_reserved(name: &str) -> bool {
    let base = name.split('.').next().unwrap_or_default().to_ascii_uppercase();
    matches!(base.as_str(), "CON" | "PRN" | "AUX" | "NUL")
        || ((base.starts_with("COM") || base.starts_with("LPT"))
            && base.len() == 4
            && matches!(base.as_bytes()[3], b'1'..=b'9'))
}

fn assert_safe(name: &str) {
    assert!(
        !name.chars().any(|c| matches!(c, '/' | '?' | '<' | '>' | '\\' | ':' | '*' | '|' | '"')),
        "illegal character in {:?}",
        name
    );
    assert!(
        !name.chars().any(|c| matches!(c as u32, 0x00..=0x1f | 0x80..=0x9f)),
        "control character in {:?}",
        name
    );
    assert!(name.is_empty() || !name.chars().all(|c| c == '.'), "all dots: {:?}", name);
    assert!(!is_reserved(name), "reserved name: {:?}", name);
    assert!(!name.ends_with('.') && !name.ends_with(' '), "trailing dot/space: {:?}", name);
    assert!(name.len() <= 255, "{} bytes", name.len());
}

/// Inputs biased toward the characters the rules care about.
fn hostile_string() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[a-zA-Z0-9 ./\\\\?<>:*|\"\\x00-\\x1f\\u{80}-\\u{9f}]{0,40}",
        "(con|PRN|aux|NuL|com[0-9]|LPT[0-9])[. ]{0,3}(txt|[. ]{0,3})",
        "[a\\u{10000}é ]{240,270}",
    ]
}

fn replacement_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("_".to_string()),
        Just(".".to_string()),
        Just("aux".to_string()),
        Just("/:*?\"<>|".to_string()),
        "[a-z./ ?:\\x00]{0,4}",
        any::<String>(),
    ]
}

// =============================================================================
// Tests without parameters (outside proptest! macro)
// =============================================================================

#[test]
fn prop_empty_input_is_empty_output() {
    assert_eq!(sanitize(""), "");
    assert_eq!(sanitize_with_replacement("", "_"), "");
}

#[test]
fn prop_reserved_helper_matches_rule() {
    assert!(is_reserved("Com1.txt"));
    assert!(!is_reserved("com0"));
    assert!(!is_reserved("LPT10.txt"));
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_sanitize_is_idempotent(input in hostile_string()) {
        let once = sanitize(&input);
        prop_assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn prop_default_output_is_safe(input in hostile_string()) {
        assert_safe(&sanitize(&input));
    }

    #[test]
    fn prop_output_is_safe_for_any_replacement(input in hostile_string(), token in replacement_token()) {
        let output = sanitize_with_replacement(&input, &token);
        assert_safe(&output);
        prop_assert_eq!(sanitize(&output), output);
    }

    #[test]
    fn prop_truncate_respects_budget(input in any::<String>(), budget in 0usize..300) {
        let truncated = truncate(&input, budget);
        prop_assert!(truncated.len() <= budget);
        prop_assert!(input.starts_with(truncated));
        // Longest fitting prefix: the next char would not fit.
        if truncated.len() < input.len() {
            let next = input[truncated.len()..].chars().next().unwrap();
            prop_assert!(truncated.len() + next.len_utf8() > budget);
        }
    }
}
