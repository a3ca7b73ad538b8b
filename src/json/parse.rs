//! Purpose: Provide the runtime JSON decode entrypoint and failure classification.
//! Exports: `from_str`, `ParseFailureCategory`, `categorize_error`, `hint_for_error`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Hints never echo the decoded payload; callsites attach raw input separately.
//! Notes: Error kind mapping is done by callsites so argument context stays explicit.

use serde::de::DeserializeOwned;
use serde_json::error::Category;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ParseFailureCategory {
    Syntax,
    Eof,
    Data,
    Io,
}

impl ParseFailureCategory {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Eof => "eof",
            ParseFailureCategory::Data => "data",
            ParseFailureCategory::Io => "io",
        }
    }
}

pub(crate) fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

pub(crate) fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match err.classify() {
        Category::Syntax => ParseFailureCategory::Syntax,
        Category::Eof => ParseFailureCategory::Eof,
        Category::Data => ParseFailureCategory::Data,
        Category::Io => ParseFailureCategory::Io,
    }
}

pub(crate) fn hint_for_error(err: &serde_json::Error, context: &str) -> String {
    let category = categorize_error(err);
    let fix = match category {
        ParseFailureCategory::Syntax => "Check quoting; the shell may have stripped inner quotes.",
        ParseFailureCategory::Eof => "Input ended early; check for a missing closing bracket.",
        ParseFailureCategory::Data => "Input is valid JSON but not the expected shape.",
        ParseFailureCategory::Io => "Input could not be read.",
    };
    format!(
        "{fix} (parse category: {}; line {}, column {}; context: {context})",
        category.label(),
        err.line(),
        err.column()
    )
}
