//! Rule registry and forward-declarable entries.
//!
//! Entries are handles into the dictionary's arena. Referencing an atom
//! that has no rule yet creates its entry unbound, which is how mutually
//! recursive productions refer to each other before both are defined.


use std::fmt;

use rustc_hash::FxHashMap;

use crate::rule::{ErasedRule, TypedRule};
use crate::term::{self, BoxedTerm};
use crate::{Atom, AtomId, Rule};

/// Handle to a rule slot in a [`Dictionary`].
pub struct Entry<T> {
    index: u32,
    atom: Atom<T>,
}

impl<T> Entry<T> {
    #[inline]
    pub fn atom(&self) -> Atom<T> {
        self.atom
    }
}

impl<T> Clone for Entry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Entry<T> {}

impl<T> fmt::Debug for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entry({:?})", self.atom)
    }
}

struct Slot {
    atom: AtomId,
    name: &'static str,
    rule: Option<Box<dyn ErasedRule>>,
}

/// Atom-keyed set of named rules.
#[derive(Default)]
pub struct Dictionary {
    slots: Vec<Slot>,
    by_atom: FxHashMap<AtomId, u32>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define the rule for `atom`.
    pub fn put<T: 'static>(&mut self, atom: Atom<T>, rule: impl Rule<T> + 'static) -> Entry<T> {
        let entry = self.forward(atom);
        self.bind(entry, rule);
        entry
    }

    /// Entry for `atom`, created unbound on first reference.
    pub fn forward<T>(&mut self, atom: Atom<T>) -> Entry<T> {
        let next = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        let index = *self.by_atom.entry(atom.id()).or_insert(next);
        if index == next {
            self.slots.push(Slot {
                atom: atom.id(),
                name: atom.name(),
                rule: None,
            });
        }
        Entry { index, atom }
    }

    /// Bind a forwarded entry. Entries bind exactly once.
    pub fn bind<T: 'static>(&mut self, entry: Entry<T>, rule: impl Rule<T> + 'static) {
        let slot = self.slot_mut(entry.index, entry.atom.id());
        assert!(slot.rule.is_none(), "rule <{}> is already bound", slot.name);
        slot.rule = Some(Box::new(TypedRule::new(rule)));
    }

    /// Term parsing `atom`'s rule and binding the result under `atom`.
    pub fn named<T: Clone + 'static>(&mut self, atom: Atom<T>) -> BoxedTerm {
        self.named_as(atom, atom)
    }

    /// Term parsing `atom`'s rule and binding the result under `alias`.
    pub fn named_as<T: Clone + 'static>(&mut self, atom: Atom<T>, alias: Atom<T>) -> BoxedTerm {
        term::reference(self.forward(atom), alias)
    }

    /// Names of entries that were referenced but never bound.
    pub fn unbound(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots
            .iter()
            .filter(|slot| slot.rule.is_none())
            .map(|slot| slot.name)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot_mut(&mut self, index: u32, atom: AtomId) -> &mut Slot {
        match self.slots.get_mut(index as usize) {
            Some(slot) if slot.atom == atom => slot,
            _ => panic!("entry does not belong to this dictionary"),
        }
    }

    pub(crate) fn rule<T>(&self, entry: Entry<T>) -> &dyn ErasedRule {
        match self.slots.get(entry.index as usize) {
            Some(Slot {
                atom,
                rule: Some(rule),
                ..
            }) if *atom == entry.atom.id() => rule.as_ref(),
            Some(Slot { atom, name, .. }) if *atom == entry.atom.id() => {
                panic!("unbound rule <{name}>")
            }
            _ => panic!("entry does not belong to this dictionary"),
        }
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.slots.iter().map(|slot| slot.name))
            .finish()
    }
}
