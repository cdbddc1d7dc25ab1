//! # Codes and Positions
//!
//! Every reference in a record (level, verb, outcome) travels as a string-encoded
//! integer, and the UI hands back record positions as strings too (they come out of
//! element attributes). This module owns the one parsing rule for both so nothing
//! compares a string index against a numeric position.
//!
//! The rule is strict: ASCII decimal digits only. No sign, no surrounding whitespace,
//! no trailing garbage (`"3abc"` is rejected, unlike a lenient integer prefix parse).

use serde::{Serialize, Serializer};
use std::fmt;

/// Parses a strict, non-negative decimal integer.
///
/// ```
/// use lobzapp::code::parse_code;
///
/// assert_eq!(parse_code("0"), Some(0));
/// assert_eq!(parse_code("042"), Some(42));
/// assert_eq!(parse_code(""), None);
/// assert_eq!(parse_code(" 4"), None);
/// assert_eq!(parse_code("-1"), None);
/// assert_eq!(parse_code("3abc"), None);
/// ```
pub fn parse_code(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parses a record position handed back by the UI (e.g. `"2"`).
pub fn parse_position(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// A validated catalog code.
///
/// Keeps the exact string it was built from so serialization round-trips without
/// normalizing `"07"` into `"7"`; catalog lookups use the numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    raw: String,
    value: u32,
}

impl Code {
    pub fn parse(s: &str) -> Option<Self> {
        parse_code(s).map(|value| Self {
            raw: s.to_string(),
            value,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl From<u32> for Code {
    fn from(value: u32) -> Self {
        Self {
            raw: value.to_string(),
            value,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}
