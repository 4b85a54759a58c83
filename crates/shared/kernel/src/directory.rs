//! Read-only seams between slices.
//!
//! The enrollment ledger never owns students or courses. It resolves identifiers through
//! these traits at the point of use, so each registry stays independent of the others.

use crate::domain::{Course, Student};

/// Student lookups needed by other slices.
pub trait StudentDirectory {
    fn student(&self, id: &str) -> Option<&Student>;
}

/// Course lookups needed by other slices. Codes resolve case-insensitively.
pub trait CourseDirectory {
    fn course(&self, code: &str) -> Option<&Course>;
}
