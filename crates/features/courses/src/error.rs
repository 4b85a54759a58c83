use std::borrow::Cow;

/// A specialized [`CourseError`] enum of this crate.
#[ccrm_derive::ccrm_error]
pub enum CourseError {
    /// A course with this code (ignoring case) already exists.
    #[error("Duplicate course code{}: {code}", format_context(.context))]
    DuplicateCode { code: String, context: Option<Cow<'static, str>> },
    /// No course is catalogued under this code.
    #[error("Course not found{}: {code}", format_context(.context))]
    NotFound { code: String, context: Option<Cow<'static, str>> },
    /// A draft field failed validation.
    #[error("Invalid course field `{field}`{}: {message}", format_context(.context))]
    InvalidField {
        field: &'static str,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal course error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
