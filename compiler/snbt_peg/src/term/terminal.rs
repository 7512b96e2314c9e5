//! Terminals: single characters from a set, and whole words.

use crate::{Control, ErrorReason, ParseState, Suggestions};
use snbt_diagnostic::ErrorCode;

use super::{BoxedTerm, Term};

struct TerminalCharacters {
    chars: Vec<char>,
    reason: ErrorReason,
    suggestions: Suggestions,
}

impl Term for TerminalCharacters {
    fn parse(&self, state: &mut ParseState<'_>, _control: &Control) -> bool {
        state.skip_whitespace();
        let at = state.mark();
        match state.peek() {
            Some(c) if self.chars.contains(&c) => {
                state.advance(c.len_utf8());
                true
            }
            _ => {
                state.store_error(at, &self.suggestions, &self.reason);
                false
            }
        }
    }
}

/// One of `chars`, after leading whitespace.
pub fn characters(chars: &[char]) -> BoxedTerm {
    let quoted: Vec<String> = chars.iter().map(|c| format!("'{c}'")).collect();
    let detail = match quoted.as_slice() {
        [single] => single.clone(),
        _ => format!("one of {}", quoted.join(", ")),
    };
    Box::new(TerminalCharacters {
        chars: chars.to_vec(),
        reason: ErrorReason::with_detail(ErrorCode::E0001, detail),
        suggestions: chars.iter().map(char::to_string).collect(),
    })
}

pub fn character(c: char) -> BoxedTerm {
    characters(&[c])
}

struct TerminalWord {
    word: &'static str,
    reason: ErrorReason,
    suggestions: Suggestions,
}

impl Term for TerminalWord {
    fn parse(&self, state: &mut ParseState<'_>, _control: &Control) -> bool {
        state.skip_whitespace();
        let at = state.mark();
        if state.read_unquoted() == self.word {
            true
        } else {
            state.store_error(at, &self.suggestions, &self.reason);
            false
        }
    }
}

/// The bare word `word`, after leading whitespace.
pub fn word(word: &'static str) -> BoxedTerm {
    Box::new(TerminalWord {
        word,
        reason: ErrorReason::with_detail(ErrorCode::E0001, format!("'{word}'")),
        suggestions: std::iter::once(word).collect(),
    })
}
