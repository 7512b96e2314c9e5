//! Failure reasons and the collectors that decide which ones survive.

mod collector;

#[cfg(test)]
mod tests;

use std::fmt;
use std::rc::Rc;

use snbt_diagnostic::ErrorCode;

pub use collector::{ErrorCollector, LongestOnly, Nop};

/// Why a term or rule failed: a code plus an optional detail.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorReason {
    code: ErrorCode,
    detail: Option<Rc<str>>,
}

impl ErrorReason {
    pub const fn new(code: ErrorCode) -> Self {
        ErrorReason { code, detail: None }
    }

    pub fn with_detail(code: ErrorCode, detail: impl Into<Rc<str>>) -> Self {
        ErrorReason {
            code,
            detail: Some(detail.into()),
        }
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn message(&self) -> String {
        self.code.render(self.detail())
    }
}

impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Tokens that would have been accepted where a failure was recorded.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Suggestions(Option<Rc<[String]>>);

impl Suggestions {
    pub fn none() -> Self {
        Suggestions(None)
    }

    pub fn is_empty(&self) -> bool {
        self.0.as_ref().map_or(true, |items| items.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().flat_map(|items| items.iter().map(String::as_str))
    }
}

impl<S: Into<String>> FromIterator<S> for Suggestions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let items: Rc<[String]> = iter.into_iter().map(Into::into).collect();
        Suggestions(Some(items))
    }
}

/// A failure recorded at a cursor position.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ErrorEntry {
    pub cursor: usize,
    pub suggestions: Suggestions,
    pub reason: ErrorReason,
}
