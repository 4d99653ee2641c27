//! Lenient extraction of a representative number from free-form text.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use crate::is_placeholder;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Non-negative integer of any size, kept as its canonical decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WholeNumber(String);

impl WholeNumber {
    /// Canonicalizes a run of ASCII digits (leading zeros stripped, "0" for zero).
    fn from_digits(run: &str) -> Self {
        let trimmed = run.trim_start_matches('0');
        if trimmed.is_empty() { Self("0".to_owned()) } else { Self(trimmed.to_owned()) }
    }

    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for WholeNumber {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl Ord for WholeNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.len().cmp(&other.0.len()).then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for WholeNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for WholeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// JSON number while it fits a native integer; beyond u128 the digits go out as a string.
impl Serialize for WholeNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Ok(n) = self.0.parse::<u64>() {
            serializer.serialize_u64(n)
        } else if let Ok(n) = self.0.parse::<u128>() {
            serializer.serialize_u128(n)
        } else {
            serializer.serialize_str(&self.0)
        }
    }
}

/// Returns the largest integer appearing in `value`.
///
/// Every maximal run of ASCII digits counts, so `"₹4000–7000"` yields 7000 and
/// `"3-5 days"` yields 5. Missing values, placeholders and strings without
/// digits yield `None`. The string is not checked for being a well-formed range.
pub fn extract_max(value: Option<&str>) -> Option<WholeNumber> {
    let value = value?;
    if is_placeholder(value) {
        return None;
    }
    DIGIT_RUN.find_iter(value).map(|m| WholeNumber::from_digits(m.as_str())).max()
}
