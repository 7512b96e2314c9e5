//! Parse errors returned to callers.

#[cfg(test)]
mod tests;

use snbt_diagnostic::{Diagnostic, ErrorCode};
use snbt_peg::{ErrorEntry, ErrorReason};

/// One failure reason recorded at the reported position.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Candidate {
    pub code: ErrorCode,
    pub message: String,
}

/// Why an input is not valid SNBT.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("{message} at position {position}")]
pub struct ParseError {
    code: ErrorCode,
    message: String,
    position: usize,
    candidates: Vec<Candidate>,
    suggestions: Vec<String>,
}

impl ParseError {
    /// An error with a single reason and no suggestions.
    #[cold]
    pub(crate) fn at(code: ErrorCode, position: usize) -> Self {
        let message = code.summary().to_string();
        ParseError {
            code,
            candidates: vec![Candidate {
                code,
                message: message.clone(),
            }],
            message,
            position,
            suggestions: Vec::new(),
        }
    }

    /// Collapse the deepest failures of a parse into one error.
    ///
    /// Repeated reasons count once, in the order they were recorded. A
    /// single reason is reported as itself; several are listed under a
    /// generic "failed to parse".
    #[cold]
    pub(crate) fn from_entries(entries: &[ErrorEntry], fallback_position: usize) -> Self {
        let position = entries.first().map_or(fallback_position, |entry| entry.cursor);

        let mut reasons: Vec<&ErrorReason> = Vec::new();
        for entry in entries {
            if !reasons.contains(&&entry.reason) {
                reasons.push(&entry.reason);
            }
        }
        let candidates: Vec<Candidate> = reasons
            .iter()
            .map(|reason| Candidate {
                code: reason.code(),
                message: reason.message(),
            })
            .collect();

        let mut suggestions: Vec<String> = entries
            .iter()
            .flat_map(|entry| entry.suggestions.iter().map(str::to_string))
            .collect();
        suggestions.sort();
        suggestions.dedup();

        let (code, message) = match candidates.as_slice() {
            [single] => (single.code, single.message.clone()),
            [] => (ErrorCode::E3003, ErrorCode::E3003.summary().to_string()),
            many => {
                let listed: Vec<&str> = many.iter().map(|c| c.message.as_str()).collect();
                (
                    ErrorCode::E3003,
                    ErrorCode::E3003.render(Some(&listed.join(", "))),
                )
            }
        };

        ParseError {
            code,
            message,
            position,
            candidates,
            suggestions,
        }
    }

    /// The top-level value parsed but was not a map.
    pub(crate) fn expected_compound(text: &str) -> Self {
        let start = text.len() - text.trim_start().len();
        Self::at(ErrorCode::E3002, start)
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset of the failure in the input.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Every distinct reason recorded at [`ParseError::position`].
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Tokens that would have been accepted at the failure, sorted.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diagnostic = Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .at(self.position);
        if self.candidates.len() > 1 {
            for candidate in &self.candidates {
                diagnostic =
                    diagnostic.with_note(format!("{}: {}", candidate.code, candidate.message));
            }
        }
        for suggestion in &self.suggestions {
            diagnostic = diagnostic.with_suggestion(suggestion.clone());
        }
        diagnostic
    }
}
