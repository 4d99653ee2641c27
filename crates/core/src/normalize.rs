//! Lookup-key normalization and placeholder detection.

/// Tokens (compared case-insensitively, after trimming) that mean "no data".
const PLACEHOLDER_TOKENS: [&str; 3] = ["-", "na", "n/a"];

/// Builds the lookup key for a destination name: lowercase, trimmed, and with
/// every run of whitespace collapsed to a single space.
pub fn normalize_destination(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let mut normalized = String::with_capacity(lowered.len());
    for segment in lowered.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

/// True for empty/whitespace-only values and the placeholder tokens.
pub fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || PLACEHOLDER_TOKENS.iter().any(|t| trimmed.eq_ignore_ascii_case(t))
}
