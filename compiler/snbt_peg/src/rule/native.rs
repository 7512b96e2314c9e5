//! Scanners that would be wasteful as term trees.

use crate::{ErrorReason, ParseState, Rule};

/// Between `min` and `max` characters accepted by a predicate.
///
/// Does not skip whitespace: used inside strings and escapes.
pub struct GreedyPredicateRule {
    min: usize,
    max: usize,
    accepts: fn(char) -> bool,
    reason: ErrorReason,
}

impl GreedyPredicateRule {
    pub fn new(min: usize, accepts: fn(char) -> bool, reason: ErrorReason) -> Self {
        Self::bounded(min, usize::MAX, accepts, reason)
    }

    pub fn bounded(min: usize, max: usize, accepts: fn(char) -> bool, reason: ErrorReason) -> Self {
        GreedyPredicateRule {
            min,
            max,
            accepts,
            reason,
        }
    }

    /// Exactly `len` hex digits.
    pub fn hex_digits(len: usize, reason: ErrorReason) -> Self {
        Self::bounded(len, len, |c| c.is_ascii_hexdigit(), reason)
    }
}

impl Rule<String> for GreedyPredicateRule {
    fn parse(&self, state: &mut ParseState<'_>) -> Option<String> {
        let start = state.mark();
        let rest = state.remaining();
        let (count, len) = rest
            .chars()
            .take(self.max)
            .take_while(|c| (self.accepts)(*c))
            .fold((0, 0), |(count, len), c| (count + 1, len + c.len_utf8()));
        if count < self.min {
            state.report(start, &self.reason);
            return None;
        }
        state.advance(len);
        Some(rest[..len].to_string())
    }
}

/// A run of digits and `_` group separators, after leading whitespace.
///
/// Empty runs and runs that start or end with `_` are rejected.
pub struct NumberRunRule {
    accepts: fn(char) -> bool,
    no_value: ErrorReason,
    underscore_not_allowed: ErrorReason,
}

impl NumberRunRule {
    pub fn new(
        accepts: fn(char) -> bool,
        no_value: ErrorReason,
        underscore_not_allowed: ErrorReason,
    ) -> Self {
        NumberRunRule {
            accepts,
            no_value,
            underscore_not_allowed,
        }
    }
}

impl Rule<String> for NumberRunRule {
    fn parse(&self, state: &mut ParseState<'_>) -> Option<String> {
        state.skip_whitespace();
        let start = state.mark();
        let accepts = self.accepts;
        let run = state.read_while(|c| c == '_' || accepts(c));
        if run.is_empty() {
            state.restore(start);
            state.report(start, &self.no_value);
            return None;
        }
        if run.starts_with('_') || run.ends_with('_') {
            state.restore(start);
            state.report(start, &self.underscore_not_allowed);
            return None;
        }
        Some(run.to_string())
    }
}

/// A bare word of at least `min` characters, after leading whitespace.
pub struct UnquotedStringRule {
    min: usize,
    reason: ErrorReason,
}

impl UnquotedStringRule {
    pub fn new(min: usize, reason: ErrorReason) -> Self {
        UnquotedStringRule { min, reason }
    }
}

impl Rule<String> for UnquotedStringRule {
    fn parse(&self, state: &mut ParseState<'_>) -> Option<String> {
        state.skip_whitespace();
        let start = state.mark();
        let word = state.read_unquoted();
        if word.len() < self.min {
            state.report(start, &self.reason);
            return None;
        }
        Some(word.to_string())
    }
}
