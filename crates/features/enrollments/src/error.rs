use std::borrow::Cow;

/// A specialized [`EnrollmentError`] enum of this crate.
#[ccrm_derive::ccrm_error]
pub enum EnrollmentError {
    #[error("Student not found{}: {student_id}", format_context(.context))]
    StudentNotFound { student_id: String, context: Option<Cow<'static, str>> },

    #[error("Course not found{}: {course_code}", format_context(.context))]
    CourseNotFound { course_code: String, context: Option<Cow<'static, str>> },

    #[error("Student {student_id} is already enrolled in {course_code}{}", format_context(.context))]
    DuplicateEnrollment {
        student_id: String,
        course_code: String,
        context: Option<Cow<'static, str>>,
    },

    #[error("Enrollment not found{}: {student_id} in {course_code}", format_context(.context))]
    NotFound { student_id: String, course_code: String, context: Option<Cow<'static, str>> },

    #[error("Marks out of range{}: {marks} (expected 0 to 100)", format_context(.context))]
    MarksOutOfRange { marks: f64, context: Option<Cow<'static, str>> },

    #[error(
        "Credit limit exceeded{}: {student_id} would carry {requested} of {limit} credits",
        format_context(.context)
    )]
    CreditLimitExceeded {
        student_id: String,
        requested: u32,
        limit: u32,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal enrollment error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
