//! Enrollment ledger slice.
//!
//! Links students to courses by identifier, enforces one enrollment per pair, and keeps the
//! marks and derived grade of each enrollment.

mod error;
mod ledger;
mod roster;

pub use crate::error::{EnrollmentError, EnrollmentErrorExt};
pub use crate::ledger::{EnrollmentLedger, EnrollmentPolicy};
pub use crate::roster::{CourseListing, CourseRoster, RosterGrant};
pub use ccrm_kernel::domain::{Enrollment, Grade, GradeScale};
