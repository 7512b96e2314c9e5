//! Packrat memo table: one small map per input position.

use smallvec::SmallVec;

use crate::{AtomId, Value};

#[derive(Clone)]
pub(crate) enum CacheEntry {
    /// `value` shares its cell with whoever received it. Once that holder
    /// takes the value, the entry can no longer be replayed.
    Success { value: Value, end: usize },
    Negative,
}

/// Outcomes of named rules, indexed by the position they started at.
///
/// Most positions see only a handful of rules, so each position keeps an
/// inline `SmallVec` scanned linearly.
#[derive(Default)]
pub(crate) struct MemoCache {
    positions: Vec<SmallVec<[(AtomId, CacheEntry); 4]>>,
}

impl MemoCache {
    pub(crate) fn get(&self, position: usize, atom: AtomId) -> Option<&CacheEntry> {
        self.positions
            .get(position)?
            .iter()
            .find(|(cached, _)| *cached == atom)
            .map(|(_, entry)| entry)
    }

    /// Record an outcome, replacing an earlier one for the same rule.
    pub(crate) fn insert(&mut self, position: usize, atom: AtomId, entry: CacheEntry) {
        if position >= self.positions.len() {
            self.positions.resize_with(position + 1, SmallVec::new);
        }
        let slot = &mut self.positions[position];
        match slot.iter_mut().find(|(cached, _)| *cached == atom) {
            Some((_, existing)) => *existing = entry,
            None => slot.push((atom, entry)),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.positions.iter().map(SmallVec::len).sum()
    }
}
