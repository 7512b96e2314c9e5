//! The [`Diagnostic`] value reported for a failed parse.

use crate::ErrorCode;

/// A source text together with the name it is reported under.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourceInfo {
    /// Display path (`-` for stdin).
    pub path: String,
    /// The full source text.
    pub content: String,
}

impl SourceInfo {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        SourceInfo {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// A parse error ready for rendering.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main error message.
    pub message: String,
    /// Byte offset of the failure.
    pub position: usize,
    /// Additional notes, one per line.
    pub notes: Vec<String>,
    /// Tokens that could have appeared at `position`.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic whose message is the code's summary.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: code.summary().to_string(),
            position: 0,
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the byte offset the diagnostic points at.
    pub fn at(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a token that would have been accepted.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}
