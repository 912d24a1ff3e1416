//! Plain-text parsing: one logical line per input line.

/// Extracts every non-blank line. Whitespace-only lines carry no text
/// and are dropped here; everything else is normalized downstream.
#[must_use]
pub fn parse_plain(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
