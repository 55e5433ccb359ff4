//! Byte-budget truncation that never splits a character.
//!
//! Filesystem limits are measured in encoded bytes, not characters. A name is
//! shortened by dropping whole characters from the end until it fits; a
//! four-byte code point is either kept entirely or dropped entirely.
//!
//! License: MIT OR APACHE 2.0

/// Returns the largest char boundary in `s` that is `<= index`.
///
/// `index` values past the end of `s` clamp to `s.len()`.
pub fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    // A UTF-8 sequence is at most four bytes, so this loop runs at most three times.
    let mut boundary = index;
    while !s.is_char_boundary(boundary) {
        boundary -= 1;
    }
    boundary
}

/// Returns the longest prefix of `s` whose UTF-8 length is at most `max_bytes`.
pub fn truncate(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    &s[..floor_char_boundary(s, max_bytes)]
}

/// In-place variant of [`truncate`]. Returns true if anything was removed.
pub fn truncate_in_place(s: &mut String, max_bytes: usize) -> bool {
    if s.len() <= max_bytes {
        return false;
    }
    let boundary = floor_char_boundary(s, max_bytes);
    s.truncate(boundary);
    true
}
