//! The PEG combinators.
//!
//! Every term answers one question: does the input at the cursor match?
//! A match advances the cursor and may bind values into the top scope
//! frame. A mismatch may leave the cursor anywhere; whoever tried the
//! term restores it.

mod repeat;
mod terminal;


use tracing::trace;

use crate::value::{self, Value};
use crate::{Atom, AtomId, Control, Entry, ErrorReason, ParseState, Suggestions};

pub use repeat::{repeated, repeated_with_separator, repeated_with_trailing_separator};
pub use terminal::{character, characters, word};

/// A matching expression.
pub trait Term {
    fn parse(&self, state: &mut ParseState<'_>, control: &Control) -> bool;
}

pub type BoxedTerm = Box<dyn Term>;

struct Sequence(Vec<BoxedTerm>);

impl Term for Sequence {
    fn parse(&self, state: &mut ParseState<'_>, control: &Control) -> bool {
        let mark = state.mark();
        for term in &self.0 {
            if !term.parse(state, control) {
                state.restore(mark);
                return false;
            }
        }
        true
    }
}

/// All of `terms`, in order.
pub fn seq(terms: impl IntoIterator<Item = BoxedTerm>) -> BoxedTerm {
    Box::new(Sequence(terms.into_iter().collect()))
}

struct Alternative(Vec<BoxedTerm>);

impl Term for Alternative {
    fn parse(&self, state: &mut ParseState<'_>, _control: &Control) -> bool {
        let control = state.acquire_control();
        let mark = state.mark();
        state.scope_mut().split_frame();
        let mut matched = false;
        for term in &self.0 {
            if term.parse(state, &control) {
                matched = true;
                break;
            }
            state.scope_mut().clear_frame_values();
            state.restore(mark);
            if control.has_cut() {
                break;
            }
        }
        if matched {
            state.scope_mut().merge_frame();
        } else {
            state.scope_mut().pop_frame();
        }
        state.release_control(&control);
        matched
    }
}

/// The first of `terms` that matches.
///
/// A [`cut`] reached inside one branch stops the remaining branches from
/// being tried if that branch fails.
pub fn alt(terms: impl IntoIterator<Item = BoxedTerm>) -> BoxedTerm {
    Box::new(Alternative(terms.into_iter().collect()))
}

struct Optional(BoxedTerm);

impl Term for Optional {
    fn parse(&self, state: &mut ParseState<'_>, control: &Control) -> bool {
        let mark = state.mark();
        if !self.0.parse(state, control) {
            state.restore(mark);
        }
        true
    }
}

pub fn optional(term: BoxedTerm) -> BoxedTerm {
    Box::new(Optional(term))
}

struct Cut;

impl Term for Cut {
    fn parse(&self, state: &mut ParseState<'_>, control: &Control) -> bool {
        trace!(position = state.mark(), "cut");
        control.cut();
        true
    }
}

/// Commit the enclosing alternative to the current branch.
pub fn cut() -> BoxedTerm {
    Box::new(Cut)
}

struct Empty;

impl Term for Empty {
    fn parse(&self, _state: &mut ParseState<'_>, _control: &Control) -> bool {
        true
    }
}

pub fn empty() -> BoxedTerm {
    Box::new(Empty)
}

struct Fail(ErrorReason);

impl Term for Fail {
    fn parse(&self, state: &mut ParseState<'_>, _control: &Control) -> bool {
        let at = state.mark();
        state.report(at, &self.0);
        false
    }
}

/// Report `reason` at the cursor and fail.
pub fn fail(reason: ErrorReason) -> BoxedTerm {
    Box::new(Fail(reason))
}

struct Expected {
    reason: ErrorReason,
    suggestions: Suggestions,
}

impl Term for Expected {
    fn parse(&self, state: &mut ParseState<'_>, _control: &Control) -> bool {
        state.skip_whitespace();
        let at = state.mark();
        state.store_error(at, &self.suggestions, &self.reason);
        false
    }
}

/// Fail the way a terminal that matched nothing fails: skip whitespace,
/// then report `reason` offering `suggestions`.
pub fn expected(reason: ErrorReason, suggestions: Suggestions) -> BoxedTerm {
    Box::new(Expected {
        reason,
        suggestions,
    })
}

struct Marker {
    atom: AtomId,
    name: &'static str,
    value: Box<dyn Fn() -> Value>,
}

impl Term for Marker {
    fn parse(&self, state: &mut ParseState<'_>, _control: &Control) -> bool {
        state
            .scope_mut()
            .put_value(self.atom, self.name, (self.value)());
        true
    }
}

/// Bind a copy of `value` under `atom`, consuming nothing.
pub fn marker<T: Clone + 'static>(atom: Atom<T>, value: T) -> BoxedTerm {
    Box::new(Marker {
        atom: atom.id(),
        name: atom.name(),
        value: Box::new(move || value::erase(value.clone())),
    })
}

struct Reference<T> {
    entry: Entry<T>,
    store: Atom<T>,
}

impl<T: Clone + 'static> Term for Reference<T> {
    fn parse(&self, state: &mut ParseState<'_>, _control: &Control) -> bool {
        match state.parse_value(self.entry) {
            Some(value) => {
                state
                    .scope_mut()
                    .put_value(self.store.id(), self.store.name(), value);
                true
            }
            None => false,
        }
    }
}

pub(crate) fn reference<T: Clone + 'static>(entry: Entry<T>, store: Atom<T>) -> BoxedTerm {
    Box::new(Reference { entry, store })
}

struct LookAhead {
    term: BoxedTerm,
    positive: bool,
}

impl Term for LookAhead {
    fn parse(&self, state: &mut ParseState<'_>, control: &Control) -> bool {
        let mark = state.mark();
        let matched = state.silently(|state| self.term.parse(state, control));
        state.restore(mark);
        matched == self.positive
    }
}

/// Match if `term` would match, consuming nothing.
pub fn positive_lookahead(term: BoxedTerm) -> BoxedTerm {
    Box::new(LookAhead {
        term,
        positive: true,
    })
}

/// Match if `term` would not match, consuming nothing.
pub fn negative_lookahead(term: BoxedTerm) -> BoxedTerm {
    Box::new(LookAhead {
        term,
        positive: false,
    })
}
