//! Shared utility functions.

/// Truncate a string to at most `max_bytes` without splitting a UTF-8
/// character, for log previews of user-supplied text.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Join tags as `a, b, c`.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}
