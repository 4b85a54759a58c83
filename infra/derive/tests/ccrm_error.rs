use ccrm_derive::ccrm_error;
use std::borrow::Cow;

#[ccrm_error]
pub enum LedgerError {
    #[error("Record not found{}: {key}", format_context(.context))]
    NotFound { key: String, context: Option<Cow<'static, str>> },

    #[error("Parse failure{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Internal ledger error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse_credits(raw: &str) -> Result<u32, LedgerError> {
    let credits = raw.parse::<u32>().context("Parsing course credits")?;
    Ok(credits)
}

#[test]
fn ccrm_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/ccrm_error_pass.rs");
}

#[test]
fn context_is_rendered_in_display() {
    let err: Result<(), LedgerError> =
        Err(LedgerError::NotFound { key: "S1".to_owned(), context: None });
    let err = err.context("Looking up student").unwrap_err();

    assert_eq!(err.to_string(), "Record not found (Looking up student): S1");
}

#[test]
fn missing_context_renders_plain_message() {
    let err = LedgerError::NotFound { key: "CS101".to_owned(), context: None };
    assert_eq!(err.to_string(), "Record not found: CS101");
}

#[test]
fn source_errors_convert_with_context() {
    let err = parse_credits("three").unwrap_err();

    assert!(matches!(err, LedgerError::Parse { context: Some(_), .. }));
    assert!(err.to_string().starts_with("Parse failure (Parsing course credits): "));
    assert_eq!(parse_credits("4").unwrap(), 4);
}

#[test]
fn source_errors_convert_through_question_mark() {
    fn parse(raw: &str) -> Result<u32, LedgerError> {
        Ok(raw.parse::<u32>()?)
    }

    assert!(matches!(parse("x"), Err(LedgerError::Parse { context: None, .. })));
}

#[test]
fn internal_variant_accepts_strings() {
    let from_static: LedgerError = "registry poisoned".into();
    let from_owned: LedgerError = format!("bad index {}", 7).into();

    assert_eq!(from_static.to_string(), "Internal ledger error: registry poisoned");
    assert!(matches!(from_owned, LedgerError::Internal { ref message, .. } if message == "bad index 7"));
}
