//! String utilities for the domain layer.

/// Take at most `max_chars` characters from the start of `s`.
///
/// Counts Unicode scalar values, never splitting a character.
pub fn take_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
