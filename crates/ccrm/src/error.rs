use ccrm_courses::CourseError;
use ccrm_enrollments::EnrollmentError;
use ccrm_kernel::config::ConfigError;
use ccrm_reporting::ReportingError;
use ccrm_students::StudentError;
use std::borrow::Cow;

/// Any failure surfaced through [`crate::Records`].
#[ccrm_derive::ccrm_error]
pub enum RecordsError {
    #[error("Student registry error{}: {source}", format_context(.context))]
    Student { source: StudentError, context: Option<Cow<'static, str>> },

    #[error("Course catalog error{}: {source}", format_context(.context))]
    Course { source: CourseError, context: Option<Cow<'static, str>> },

    #[error("Enrollment error{}: {source}", format_context(.context))]
    Enrollment { source: EnrollmentError, context: Option<Cow<'static, str>> },

    #[error("Reporting error{}: {source}", format_context(.context))]
    Reporting { source: ReportingError, context: Option<Cow<'static, str>> },

    #[error("Configuration error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal records error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
