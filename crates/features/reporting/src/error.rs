use std::borrow::Cow;

/// A specialized [`ReportingError`] enum of this crate.
#[ccrm_derive::ccrm_error]
pub enum ReportingError {
    #[error("Student not found{}: {student_id}", format_context(.context))]
    StudentNotFound { student_id: String, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal reporting error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
