//! The binding stack shared by all terms of one parse.
//!
//! A single `Vec` holds every frame: a frame is a marker slot followed by
//! its bindings. Markers link to the previous marker, so popping a frame
//! is a truncate and never touches the frames below it.
//!
//! ```text
//! [Frame(0)] [a=1] [b=∅] [Frame(0)] [a=∅] [b=∅] [c="x"]
//!  root       root bindings  top_marker   split copy of a, b + new c
//! ```
//!
//! Alternatives use [`Scope::split_frame`] before trying branches, so a
//! failed branch's bindings are cleared instead of leaking into the next
//! branch, and [`Scope::merge_frame`] to fold the winning branch back.

use std::fmt;

use crate::value::{self, Value};
use crate::{Atom, AtomId};

const INITIAL_CAPACITY: usize = 16;

/// Largest capacity the stack grows to by itself.
const MAX_CAPACITY: usize = 2_147_483_639;

/// Grow by half of the current capacity, never below `required`.
fn grow_by_half(current: usize, required: usize) -> usize {
    (current + current / 2).min(MAX_CAPACITY).max(required)
}

#[derive(Clone)]
enum Slot {
    Frame {
        previous: usize,
    },
    Binding {
        atom: AtomId,
        name: &'static str,
        value: Option<Value>,
    },
}

/// Stack of (atom, value) frames.
pub struct Scope {
    stack: Vec<Slot>,
    top_marker: usize,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    pub fn new() -> Self {
        let mut stack = Vec::with_capacity(INITIAL_CAPACITY);
        stack.push(Slot::Frame { previous: 0 });
        Scope {
            stack,
            top_marker: 0,
        }
    }

    fn ensure_capacity(&mut self, additional: usize) {
        let required = self.stack.len() + additional;
        if required > self.stack.capacity() {
            let target = grow_by_half(self.stack.capacity(), required);
            self.stack.reserve_exact(target - self.stack.len());
        }
    }

    fn previous_marker(&self, marker: usize) -> usize {
        match self.stack[marker] {
            Slot::Frame { previous } => previous,
            Slot::Binding { name, .. } => {
                panic!("scope corrupted: binding <{name}> where a frame marker belongs")
            }
        }
    }

    /// Index of `atom`'s binding in the top frame.
    fn find_in_top(&self, atom: AtomId) -> Option<usize> {
        (self.top_marker + 1..self.stack.len()).rev().find(|&index| {
            matches!(self.stack[index], Slot::Binding { atom: bound, .. } if bound == atom)
        })
    }

    pub fn push_frame(&mut self) {
        self.ensure_capacity(1);
        self.stack.push(Slot::Frame {
            previous: self.top_marker,
        });
        self.top_marker = self.stack.len() - 1;
        debug_assert!(self.validate_structure());
    }

    pub fn pop_frame(&mut self) {
        assert!(self.top_marker != 0, "tried to pop the root scope frame");
        let previous = self.previous_marker(self.top_marker);
        self.stack.truncate(self.top_marker);
        self.top_marker = previous;
        debug_assert!(self.validate_structure());
    }

    /// Push a frame holding the top frame's atoms, all unset.
    pub fn split_frame(&mut self) {
        let parent = self.top_marker;
        let count = self.stack.len() - parent - 1;
        self.ensure_capacity(count + 1);
        self.stack.push(Slot::Frame { previous: parent });
        self.top_marker = self.stack.len() - 1;
        for index in parent + 1..parent + 1 + count {
            let (atom, name) = match &self.stack[index] {
                Slot::Binding { atom, name, .. } => (*atom, *name),
                Slot::Frame { .. } => panic!("scope corrupted: nested marker inside a frame"),
            };
            self.stack.push(Slot::Binding {
                atom,
                name,
                value: None,
            });
        }
        debug_assert!(self.validate_structure());
    }

    /// Unset every value in the top frame, keeping its atoms.
    pub fn clear_frame_values(&mut self) {
        for slot in &mut self.stack[self.top_marker + 1..] {
            if let Slot::Binding { value, .. } = slot {
                *value = None;
            }
        }
    }

    /// Fold the top frame into its parent. Set values override the
    /// parent's; unset values keep the parent's.
    ///
    /// The top frame must come from [`Scope::split_frame`], so its leading
    /// atoms line up with the parent's.
    pub fn merge_frame(&mut self) {
        let child = self.top_marker;
        let parent = self.previous_marker(child);
        debug_assert!(
            child - parent - 1 <= self.stack.len() - child - 1,
            "merged frame is smaller than its parent"
        );
        let mut write = parent;
        for read in child + 1..self.stack.len() {
            write += 1;
            let Slot::Binding { atom, name, value } =
                std::mem::replace(&mut self.stack[read], Slot::Frame { previous: 0 })
            else {
                panic!("scope corrupted: nested marker inside a frame");
            };
            match &mut self.stack[write] {
                Slot::Binding {
                    atom: existing,
                    value: existing_value,
                    ..
                } if *existing == atom => {
                    if value.is_some() {
                        *existing_value = value;
                    }
                }
                slot => *slot = Slot::Binding { atom, name, value },
            }
        }
        self.stack.truncate(write + 1);
        self.top_marker = parent;
        debug_assert!(self.validate_structure());
    }

    pub fn put<T: 'static>(&mut self, atom: Atom<T>, value: T) {
        self.put_value(atom.id(), atom.name(), value::erase(value));
    }

    pub(crate) fn put_value(&mut self, atom: AtomId, name: &'static str, value: Value) {
        if let Some(index) = self.find_in_top(atom) {
            if let Slot::Binding { value: slot, .. } = &mut self.stack[index] {
                *slot = Some(value);
            }
        } else {
            self.ensure_capacity(1);
            self.stack.push(Slot::Binding {
                atom,
                name,
                value: Some(value),
            });
        }
    }

    fn value(&self, atom: AtomId) -> Option<&Value> {
        match &self.stack[self.find_in_top(atom)?] {
            Slot::Binding { value, .. } => value.as_ref(),
            Slot::Frame { .. } => None,
        }
    }

    /// Value bound to `atom` in the top frame, cloned out.
    pub fn get<T: Clone + 'static>(&self, atom: Atom<T>) -> Option<T> {
        self.value(atom.id())
            .and_then(|value| value::peek(atom.name(), value))
    }

    pub fn get_or<T: Clone + 'static>(&self, atom: Atom<T>, default: T) -> T {
        self.get(atom).unwrap_or(default)
    }

    /// Value bound to the first of `atoms` that has one.
    pub fn get_any<T: Clone + 'static>(&self, atoms: &[Atom<T>]) -> Option<T> {
        atoms.iter().find_map(|atom| self.get(*atom))
    }

    /// Value bound to `atom`; a missing value is a grammar defect.
    pub fn require<T: Clone + 'static>(&self, atom: Atom<T>) -> T {
        match self.get(atom) {
            Some(value) => value,
            None => panic!("no value bound for {atom} in scope {self}"),
        }
    }

    /// Move the value out of the top frame, leaving the atom unset.
    ///
    /// The value is moved, never copied; a memo entry sharing it is left
    /// empty.
    pub fn take<T: 'static>(&mut self, atom: Atom<T>) -> Option<T> {
        let index = self.find_in_top(atom.id())?;
        match &mut self.stack[index] {
            Slot::Binding { value, .. } => value
                .take()
                .and_then(|value| value::take(atom.name(), &value)),
            Slot::Frame { .. } => None,
        }
    }

    pub fn has_only_single_frame(&self) -> bool {
        self.top_marker == 0 && matches!(self.stack.first(), Some(Slot::Frame { .. }))
    }

    /// Number of bindings in the top frame.
    pub fn frame_len(&self) -> usize {
        self.stack.len() - self.top_marker - 1
    }

    fn validate_structure(&self) -> bool {
        if !matches!(self.stack.first(), Some(Slot::Frame { previous: 0 })) {
            return false;
        }
        let mut marker = self.top_marker;
        while marker != 0 {
            match self.stack.get(marker) {
                Some(Slot::Frame { previous }) if *previous < marker => marker = *previous,
                _ => return false,
            }
        }
        self.stack[self.top_marker + 1..]
            .iter()
            .all(|slot| matches!(slot, Slot::Binding { .. }))
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.stack {
            match slot {
                Slot::Frame { .. } => write!(f, "|")?,
                Slot::Binding { name, value, .. } => {
                    let state = if value.is_some() { "set" } else { "unset" };
                    write!(f, "{name}:{state},")?;
                }
            }
        }
        write!(f, "|")
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
