use std::borrow::Cow;

/// A specialized [`StudentError`] enum of this crate.
#[ccrm_derive::ccrm_error]
pub enum StudentError {
    /// A student with this id was already admitted.
    #[error("Duplicate student id{}: {id}", format_context(.context))]
    DuplicateId { id: String, context: Option<Cow<'static, str>> },
    /// No student is registered under this id.
    #[error("Student not found{}: {id}", format_context(.context))]
    NotFound { id: String, context: Option<Cow<'static, str>> },
    /// An admission field failed validation.
    #[error("Invalid student field `{field}`{}: {message}", format_context(.context))]
    InvalidField {
        field: &'static str,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal student error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
