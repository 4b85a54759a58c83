//! Canonical lookup keys.
//!
//! Course codes are unique regardless of case. The catalog stores each course under its
//! uppercased code and keeps the original spelling on the record for display.

use std::fmt;

/// Case-folded course code used as a map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseKey(String);

impl CourseKey {
    #[must_use]
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_uppercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourseKey {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl AsRef<str> for CourseKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Case-insensitive exact equality for free-text fields such as instructor or department
/// names. Whitespace is significant.
#[must_use]
pub fn same_text(a: &str, b: &str) -> bool {
    a.chars().flat_map(char::to_lowercase).eq(b.chars().flat_map(char::to_lowercase))
}
