//! Parse state: cursor, scope, memo cache, control pool, error routing.

mod cache;


use std::rc::Rc;

use snbt_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::control::{Control, ControlPool};
use crate::value::{self, Value};
use crate::{Dictionary, Entry, ErrorCollector, ErrorReason, Nop, Scope, Suggestions};

use cache::{CacheEntry, MemoCache};

/// Everything one parse of one input needs.
///
/// A state is bound to a single input text; the memo cache is meaningless
/// for any other text, so every parse builds a fresh state.
pub struct ParseState<'a> {
    input: &'a str,
    cursor: usize,
    dictionary: &'a Dictionary,
    scope: Scope,
    errors: &'a mut dyn ErrorCollector,
    nop: Nop,
    /// Set while a lookahead runs; failures go to `nop`.
    silent: bool,
    cache: MemoCache,
    controls: ControlPool,
}

impl<'a> ParseState<'a> {
    pub fn new(
        input: &'a str,
        dictionary: &'a Dictionary,
        errors: &'a mut dyn ErrorCollector,
    ) -> Self {
        ParseState {
            input,
            cursor: 0,
            dictionary,
            scope: Scope::new(),
            errors,
            nop: Nop,
            silent: false,
            cache: MemoCache::default(),
            controls: ControlPool::default(),
        }
    }

    // Cursor

    #[inline]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Current byte offset.
    #[inline]
    pub fn mark(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn restore(&mut self, mark: usize) {
        debug_assert!(
            self.input.is_char_boundary(mark),
            "cursor restored inside a character: {mark}"
        );
        self.cursor = mark;
    }

    /// Unconsumed input.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.cursor..]
    }

    #[inline]
    pub fn can_read(&self) -> bool {
        self.cursor < self.input.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consume `len` bytes, which must end on a character boundary.
    #[inline]
    pub fn advance(&mut self, len: usize) {
        self.restore(self.cursor + len);
    }

    pub fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        let trimmed = rest.trim_start_matches(char::is_whitespace);
        self.cursor += rest.len() - trimmed.len();
    }

    /// Consume the longest run of characters accepted by `accepts`.
    pub fn read_while(&mut self, accepts: impl Fn(char) -> bool) -> &'a str {
        let rest = self.remaining();
        let len = rest.find(|c: char| !accepts(c)).unwrap_or(rest.len());
        self.cursor += len;
        &rest[..len]
    }

    /// Consume a bare word (`[0-9A-Za-z_.+-]*`).
    pub fn read_unquoted(&mut self) -> &'a str {
        self.read_while(crate::is_unquoted_char)
    }

    // Scope

    #[inline]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    #[inline]
    pub fn scope_mut(&mut self) -> &mut Scope {
        &mut self.scope
    }

    // Errors

    #[inline]
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    fn collector(&mut self) -> &mut dyn ErrorCollector {
        if self.silent {
            &mut self.nop
        } else {
            &mut *self.errors
        }
    }

    pub fn store_error(&mut self, cursor: usize, suggestions: &Suggestions, reason: &ErrorReason) {
        self.collector().store(cursor, suggestions, reason);
    }

    /// Record a failure without suggestions.
    pub fn report(&mut self, cursor: usize, reason: &ErrorReason) {
        self.store_error(cursor, &Suggestions::none(), reason);
    }

    /// Run `f` with error reporting muted.
    pub fn silently<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let was_silent = std::mem::replace(&mut self.silent, true);
        let result = f(self);
        self.silent = was_silent;
        result
    }

    // Controls

    pub(crate) fn acquire_control(&mut self) -> Rc<Control> {
        self.controls.acquire()
    }

    pub(crate) fn release_control(&mut self, control: &Rc<Control>) {
        self.controls.release(control);
    }

    // Rules

    /// Parse a named rule at the cursor, consulting the memo cache first.
    ///
    /// On failure the cursor is back where it started.
    pub fn parse<T: Clone + 'static>(&mut self, entry: Entry<T>) -> Option<T> {
        let name = entry.atom().name();
        self.parse_value(entry)
            .and_then(|value| value::take(name, &value))
    }

    pub(crate) fn parse_value<T: Clone + 'static>(&mut self, entry: Entry<T>) -> Option<Value> {
        let start = self.cursor;
        let atom = entry.atom();
        match self.cache.get(start, atom.id()) {
            Some(CacheEntry::Negative) => {
                trace!(rule = atom.name(), position = start, "memo hit");
                return None;
            }
            Some(CacheEntry::Success { value, end }) => {
                let end = *end;
                // Copying a deep value recurses as deep as the value.
                let replay = ensure_sufficient_stack(|| value::peek::<T>(atom.name(), value));
                if let Some(replay) = replay {
                    trace!(rule = atom.name(), position = start, "memo hit");
                    self.cursor = end;
                    return Some(value::erase(replay));
                }
                trace!(rule = atom.name(), position = start, "memo value taken, re-running");
            }
            None => {}
        }

        let dictionary = self.dictionary;
        let rule = dictionary.rule(entry);
        // A rule's memoized outcome must carry its diagnostics with it, so
        // named rules always report, even under a lookahead.
        let was_silent = std::mem::replace(&mut self.silent, false);
        let result = ensure_sufficient_stack(|| rule.parse_value(self));
        self.silent = was_silent;

        let outcome = match &result {
            Some(value) => CacheEntry::Success {
                value: Rc::clone(value),
                end: self.cursor,
            },
            None => {
                self.cursor = start;
                CacheEntry::Negative
            }
        };
        self.cache.insert(start, atom.id(), outcome);
        result
    }

    /// Parse the root rule of a grammar.
    ///
    /// On success the collector is told how far the parse got, so that
    /// failures left behind at shallower positions no longer count.
    pub fn parse_top_rule<T: Clone + 'static>(&mut self, entry: Entry<T>) -> Option<T> {
        let result = self.parse(entry);
        if result.is_some() {
            let end = self.cursor;
            self.errors.finish(end);
        }
        assert!(
            self.scope.has_only_single_frame(),
            "malformed scope after top-level parse: {}",
            self.scope
        );
        result
    }

    #[cfg(test)]
    pub(crate) fn cached_outcomes(&self) -> usize {
        self.cache.len()
    }
}
