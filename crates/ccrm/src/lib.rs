//! Facade crate for the Campus Course Records Manager.
//! Re-exports domain/kernel primitives and the slice types, and owns the three components in
//! a single [`Records`] value.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Build a [`Records`] with [`init`] from an [`domain::config::AppConfig`].
//! - Mutate through [`Records::add_student`], [`Records::courses_mut`], [`Records::enroll`]
//!   and [`Records::record_marks`]; read through [`Records::reporting`].

mod error;
mod records;

pub use crate::error::{RecordsError, RecordsErrorExt};
pub use crate::records::{Records, init};
pub use ccrm_domain as domain;
pub use ccrm_kernel as kernel;

pub mod students {
    pub use ccrm_students::{CourseListing, StudentError, StudentRegistry};
}

pub mod courses {
    pub use ccrm_courses::{
        Course, CourseCatalog, CourseDraft, CourseError, MAX_COURSE_CREDITS, Semester,
        parse_semester,
    };
}

pub mod enrollments {
    pub use ccrm_enrollments::{
        Enrollment, EnrollmentError, EnrollmentLedger, EnrollmentPolicy, Grade, GradeScale,
    };
}

pub mod reporting {
    pub use ccrm_reporting::{
        CourseStatistics, Reporting, ReportingError, Transcript, TranscriptRow,
    };
}
