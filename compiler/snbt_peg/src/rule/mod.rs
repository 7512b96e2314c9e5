//! Named rules: a term plus an action, or a hand-written scanner.

mod native;


use std::marker::PhantomData;

use crate::value::{self, Value};
use crate::{BoxedTerm, Control, ParseState, Scope};

pub use native::{GreedyPredicateRule, NumberRunRule, UnquotedStringRule};

/// A named production producing a `T`.
pub trait Rule<T> {
    /// `None` means no match; the caller restores the cursor.
    fn parse(&self, state: &mut ParseState<'_>) -> Option<T>;
}

/// Object-safe view of a `Rule<T>` as stored in the dictionary.
pub(crate) trait ErasedRule {
    fn parse_value(&self, state: &mut ParseState<'_>) -> Option<Value>;
}

pub(crate) struct TypedRule<T, R> {
    rule: R,
    marker: PhantomData<fn() -> T>,
}

impl<T, R> TypedRule<T, R> {
    pub(crate) fn new(rule: R) -> Self {
        TypedRule {
            rule,
            marker: PhantomData,
        }
    }
}

impl<T: 'static, R: Rule<T>> ErasedRule for TypedRule<T, R> {
    fn parse_value(&self, state: &mut ParseState<'_>) -> Option<Value> {
        self.rule.parse(state).map(value::erase)
    }
}

/// A term matched in its own scope frame, then turned into a value.
pub struct TermRule<T, F> {
    term: BoxedTerm,
    action: F,
    marker: PhantomData<fn() -> T>,
}

impl<T, F> Rule<T> for TermRule<T, F>
where
    F: Fn(&mut ParseState<'_>) -> Option<T>,
{
    fn parse(&self, state: &mut ParseState<'_>) -> Option<T> {
        state.scope_mut().push_frame();
        let result = if self.term.parse(state, &Control::unbound()) {
            (self.action)(state)
        } else {
            None
        };
        state.scope_mut().pop_frame();
        result
    }
}

/// Rule whose action may inspect the whole state (cursor, error reporting).
pub fn from_term<T, F>(term: BoxedTerm, action: F) -> TermRule<T, F>
where
    F: Fn(&mut ParseState<'_>) -> Option<T>,
{
    TermRule {
        term,
        action,
        marker: PhantomData,
    }
}

/// Rule whose action only reads the bindings of its frame.
pub fn from_scope<T>(
    term: BoxedTerm,
    action: impl Fn(&mut Scope) -> Option<T>,
) -> TermRule<T, impl Fn(&mut ParseState<'_>) -> Option<T>> {
    from_term(term, move |state: &mut ParseState<'_>| {
        action(state.scope_mut())
    })
}
