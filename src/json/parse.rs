//! Purpose: Provide the internal JSON decode entrypoint and failure categories.
//! Exports: `from_str`, `ParseFailureCategory`, `categorize_error`, `categorize_message`,
//! `hint_for_error`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Category labels are stable; callers and tests match on them.
//! Invariants: Hints never echo the payload, only category and caller context.
//! Notes: Error mapping to crate errors is done by callsites so domain context stays explicit.
//! Notes: Data errors quote the offending value, so only syntax errors get text matching.

use serde::de::DeserializeOwned;
use serde_json::error::Category;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ParseFailureCategory {
    Syntax,
    Truncated,
    NotAnObject,
    Shape,
    NumericRange,
    DepthLimit,
    Unknown,
}

impl ParseFailureCategory {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Truncated => "truncated",
            ParseFailureCategory::NotAnObject => "not-an-object",
            ParseFailureCategory::Shape => "shape",
            ParseFailureCategory::NumericRange => "numeric-range",
            ParseFailureCategory::DepthLimit => "depth-limit",
            ParseFailureCategory::Unknown => "unknown",
        }
    }
}

pub(crate) fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

pub(crate) fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match err.classify() {
        // serde_json reports range and depth failures as syntax errors.
        Category::Syntax => match categorize_message(&err.to_string()) {
            category @ (ParseFailureCategory::NumericRange | ParseFailureCategory::DepthLimit) => {
                category
            }
            _ => ParseFailureCategory::Syntax,
        },
        Category::Eof => ParseFailureCategory::Truncated,
        Category::Data => {
            let message = err.to_string();
            match expectation(&message) {
                Some(expected) if expected.starts_with("a map") => {
                    ParseFailureCategory::NotAnObject
                }
                _ => ParseFailureCategory::Shape,
            }
        }
        Category::Io => ParseFailureCategory::Unknown,
    }
}

/// The `expected ...` clause of a serde data error. Taken from the last
/// occurrence so a quoted value cannot supply it.
fn expectation(message: &str) -> Option<&str> {
    message
        .rsplit_once(", expected ")
        .map(|(_, expected)| expected)
}

pub(crate) fn categorize_message(message: &str) -> ParseFailureCategory {
    let message = message.to_ascii_lowercase();
    if message.contains("number out of range") {
        ParseFailureCategory::NumericRange
    } else if message.contains("recursion limit") {
        ParseFailureCategory::DepthLimit
    } else if message.contains("expected a map") {
        ParseFailureCategory::NotAnObject
    } else if message.contains("eof while parsing") {
        ParseFailureCategory::Truncated
    } else {
        ParseFailureCategory::Unknown
    }
}

pub(crate) fn hint_for_error(err: &serde_json::Error, context: &str) -> String {
    format!(
        "parse category: {}; context: {context}",
        categorize_error(err).label()
    )
}
