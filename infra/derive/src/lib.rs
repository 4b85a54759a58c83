#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the records workspace.
//! At the moment this is a single attribute macro that turns a plain enum into a
//! context-aware error type, so every feature crate reports failures the same way.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` if an
///   `Internal { message, context }` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. If present, the `context` field must be `Option<Cow<'static, str>>`.
/// 3. Variants wrapping an upstream error must carry a `context` field.
/// 4. Tuple and unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[ccrm_derive::ccrm_error]
/// pub enum CourseError {
///     #[error("Course not found{}: {code}", format_context(.context))]
///     NotFound { code: String, context: Option<Cow<'static, str>> },
///
///     #[error("Internal course error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn lookup(code: &str) -> Result<(), CourseError> {
///     Err(CourseError::NotFound { code: code.to_owned(), context: None })
///         .context("Resolving enrollment target")
/// }
/// ```
#[proc_macro_attribute]
pub fn ccrm_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
