//! String utilities for the domain layer.

/// Shorten text to at most `max_chars` characters, appending `…` when cut.
///
/// Counts characters rather than bytes so Japanese text is never split
/// inside a code point.
pub fn preview(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}
