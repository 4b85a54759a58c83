//! Reporting slice.
//!
//! Read-only views derived from the catalog, the registry and the ledger. Nothing here
//! mutates state, so a [`Reporting`] borrows all three for as long as it is alive.

mod error;
mod statistics;
mod transcript;

pub use crate::error::{ReportingError, ReportingErrorExt};
pub use crate::statistics::CourseStatistics;
pub use crate::transcript::{Transcript, TranscriptRow};

use ccrm_courses::CourseCatalog;
use ccrm_enrollments::EnrollmentLedger;
use ccrm_students::StudentRegistry;

/// Borrowed view over the three owning collections.
#[derive(Debug, Clone, Copy)]
pub struct Reporting<'a> {
    students: &'a StudentRegistry,
    courses: &'a CourseCatalog,
    enrollments: &'a EnrollmentLedger,
}

impl<'a> Reporting<'a> {
    #[must_use]
    pub const fn new(
        students: &'a StudentRegistry,
        courses: &'a CourseCatalog,
        enrollments: &'a EnrollmentLedger,
    ) -> Self {
        Self { students, courses, enrollments }
    }
}
