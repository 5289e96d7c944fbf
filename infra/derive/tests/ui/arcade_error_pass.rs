use arcade_derive::arcade_error;
use std::borrow::Cow;

#[arcade_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Not found{}: {what}", format_context(.context))]
    NotFound { what: u32, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("boom")).context("reading catalog")
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.kind(), "Io");
    assert_eq!(err.to_string(), "IO error (reading catalog): boom");

    let err: DemoError = "broken".into();
    assert_eq!(err.kind(), "Internal");

    let err = DemoError::NotFound { what: 7, context: None };
    assert_eq!(err.to_string(), "Not found: 7");

    let err = Err::<(), _>(DemoError::NotFound { what: 3, context: None })
        .context("page lookup")
        .unwrap_err();
    assert_eq!(err.to_string(), "Not found (page lookup): 3");
}
