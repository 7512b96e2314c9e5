use super::{ErrorEntry, ErrorReason, Suggestions};

/// Receives every failure a parse records.
pub trait ErrorCollector {
    fn store(&mut self, cursor: usize, suggestions: &Suggestions, reason: &ErrorReason);

    /// Called with the final cursor after a successful top-level parse.
    fn finish(&mut self, _cursor: usize) {}
}

/// Discards everything. Stands in for the real collector while a
/// lookahead runs.
#[derive(Copy, Clone, Default, Debug)]
pub struct Nop;

impl ErrorCollector for Nop {
    fn store(&mut self, _cursor: usize, _suggestions: &Suggestions, _reason: &ErrorReason) {}
}

/// Keeps only the failures at the deepest cursor seen so far.
///
/// A strictly deeper failure drops everything collected before it; a
/// failure at the same depth is added alongside.
#[derive(Clone, Default, Debug)]
pub struct LongestOnly {
    last_cursor: Option<usize>,
    entries: Vec<(Suggestions, ErrorReason)>,
}

impl LongestOnly {
    pub fn new() -> Self {
        Self::default()
    }

    fn discard_shallower_than(&mut self, cursor: usize) {
        if self.last_cursor.map_or(true, |last| cursor > last) {
            self.last_cursor = Some(cursor);
            self.entries.clear();
        }
    }

    /// Deepest position reached by any failure or by `finish`.
    pub fn cursor(&self) -> Option<usize> {
        self.last_cursor
    }

    pub fn entries(&self) -> Vec<ErrorEntry> {
        let Some(cursor) = self.last_cursor else {
            return Vec::new();
        };
        self.entries
            .iter()
            .map(|(suggestions, reason)| ErrorEntry {
                cursor,
                suggestions: suggestions.clone(),
                reason: reason.clone(),
            })
            .collect()
    }
}

impl ErrorCollector for LongestOnly {
    fn store(&mut self, cursor: usize, suggestions: &Suggestions, reason: &ErrorReason) {
        self.discard_shallower_than(cursor);
        if self.last_cursor == Some(cursor) {
            self.entries.push((suggestions.clone(), reason.clone()));
        }
    }

    fn finish(&mut self, cursor: usize) {
        self.discard_shallower_than(cursor);
    }
}
