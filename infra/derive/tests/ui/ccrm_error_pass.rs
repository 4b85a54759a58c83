use ccrm_derive::ccrm_error;
use std::borrow::Cow;

#[ccrm_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Duplicate key: {key}")]
    Duplicate { key: String },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let _: DemoError = std::io::Error::other("disk").into();
    let _: DemoError = "fallback".into();
    let _ = DemoError::Duplicate { key: "CS101".to_owned() };
}
