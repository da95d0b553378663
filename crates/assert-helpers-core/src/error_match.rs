//! Layered error-equality matching.
//!
//! Layers are tried in order and the first decisive [`Verdict`] wins:
//!
//! 1. **presence**: both absent matches, exactly one absent does not
//! 2. **code**: both sides carry a code and the codes are equal
//! 3. **substring**: the actual text contains the expected text
//!
//! A run where every layer is inconclusive does not match.

use std::fmt;

use crate::errors::AssertError;
use crate::types::Verdict;

/// An error as seen by the matcher: either a real error (with an optional
/// structured code) or a bare message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorLike {
    Error { message: String, code: Option<String> },
    Message(String),
}

impl ErrorLike {
    pub fn error(message: impl Into<String>) -> Self {
        ErrorLike::Error {
            message: message.into(),
            code: None,
        }
    }

    pub fn coded(code: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorLike::Error {
            message: message.into(),
            code: Some(code.into()),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        ErrorLike::Message(message.into())
    }

    /// Capture any error, keeping the code of errors this crate knows about.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        if let Some(like) = err.downcast_ref::<ErrorLike>() {
            return like.clone().into_error();
        }
        if let Some(failure) = err.downcast_ref::<AssertError>() {
            return failure.into();
        }
        ErrorLike::error(err.to_string())
    }

    /// Promote a bare message to an error, keeping real errors untouched.
    pub fn into_error(self) -> Self {
        match self {
            ErrorLike::Message(message) => ErrorLike::error(message),
            error => error,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            ErrorLike::Error { code, .. } => code.as_deref(),
            ErrorLike::Message(_) => None,
        }
    }

    /// The string form compared by the substring layer
    pub fn text(&self) -> &str {
        match self {
            ErrorLike::Error { message, .. } => message,
            ErrorLike::Message(message) => message,
        }
    }
}

impl fmt::Display for ErrorLike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl std::error::Error for ErrorLike {}

impl From<&str> for ErrorLike {
    fn from(message: &str) -> Self {
        ErrorLike::Message(message.to_string())
    }
}

impl From<String> for ErrorLike {
    fn from(message: String) -> Self {
        ErrorLike::Message(message)
    }
}

impl From<&AssertError> for ErrorLike {
    fn from(failure: &AssertError) -> Self {
        ErrorLike::coded(failure.code(), failure.to_string())
    }
}

impl From<AssertError> for ErrorLike {
    fn from(failure: AssertError) -> Self {
        (&failure).into()
    }
}

type Layer = fn(Option<&ErrorLike>, Option<&ErrorLike>) -> Verdict;

/// Matching layers in evaluation order.
pub const LAYERS: &[(&str, Layer)] = &[
    ("presence", presence),
    ("code", code),
    ("substring", substring),
];

fn presence(actual: Option<&ErrorLike>, expected: Option<&ErrorLike>) -> Verdict {
    match (actual, expected) {
        (None, None) => Verdict::Matched,
        (Some(_), None) | (None, Some(_)) => Verdict::Unmatched,
        (Some(_), Some(_)) => Verdict::Inconclusive,
    }
}

fn code(actual: Option<&ErrorLike>, expected: Option<&ErrorLike>) -> Verdict {
    match (actual.and_then(ErrorLike::code), expected.and_then(ErrorLike::code)) {
        (Some(a), Some(e)) if a == e => Verdict::Matched,
        _ => Verdict::Inconclusive,
    }
}

fn substring(actual: Option<&ErrorLike>, expected: Option<&ErrorLike>) -> Verdict {
    match (actual, expected) {
        (Some(a), Some(e)) => Verdict::from_bool(a.text().contains(e.text())),
        _ => Verdict::Inconclusive,
    }
}

/// Run the layers and report the deciding one, if any.
pub fn evaluate(
    actual: Option<&ErrorLike>,
    expected: Option<&ErrorLike>,
) -> (Verdict, Option<&'static str>) {
    LAYERS
        .iter()
        .map(|(name, layer)| (layer(actual, expected), *name))
        .find(|(verdict, _)| verdict.is_decisive())
        .map(|(verdict, name)| (verdict, Some(name)))
        .unwrap_or((Verdict::Unmatched, None))
}

/// Whether `actual` satisfies `expected`.
pub fn errors_match(actual: Option<&ErrorLike>, expected: Option<&ErrorLike>) -> bool {
    evaluate(actual, expected).0 == Verdict::Matched
}
