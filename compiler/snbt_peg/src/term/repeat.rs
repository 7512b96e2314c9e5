use crate::{Atom, Control, Entry, ParseState};

use super::{BoxedTerm, Term};

struct Repeated<T> {
    element: Entry<T>,
    list: Atom<Vec<T>>,
    min: usize,
}

impl<T: Clone + 'static> Term for Repeated<T> {
    fn parse(&self, state: &mut ParseState<'_>, _control: &Control) -> bool {
        let start = state.mark();
        let mut items = Vec::with_capacity(self.min);
        loop {
            let before = state.mark();
            match state.parse(self.element) {
                Some(item) => items.push(item),
                None => {
                    state.restore(before);
                    break;
                }
            }
            // An element that consumed nothing would match forever.
            if state.mark() == before {
                break;
            }
        }
        if items.len() < self.min {
            state.restore(start);
            return false;
        }
        state.scope_mut().put(self.list, items);
        true
    }
}

/// `element*` (at least `min` times), collected under `list`.
pub fn repeated<T: Clone + 'static>(element: Entry<T>, list: Atom<Vec<T>>, min: usize) -> BoxedTerm {
    Box::new(Repeated { element, list, min })
}

struct RepeatedWithSeparator<T> {
    element: Entry<T>,
    list: Atom<Vec<T>>,
    separator: BoxedTerm,
    min: usize,
    allow_trailing: bool,
}

impl<T: Clone + 'static> Term for RepeatedWithSeparator<T> {
    fn parse(&self, state: &mut ParseState<'_>, control: &Control) -> bool {
        let start = state.mark();
        let mut items = Vec::with_capacity(self.min);
        let mut first = true;
        loop {
            let before_separator = state.mark();
            if !first && !self.separator.parse(state, control) {
                state.restore(before_separator);
                break;
            }
            let before_element = state.mark();
            match state.parse(self.element) {
                Some(item) => items.push(item),
                None => {
                    if !first && !self.allow_trailing {
                        state.restore(start);
                        return false;
                    }
                    state.restore(before_element);
                    break;
                }
            }
            if state.mark() == before_separator {
                break;
            }
            first = false;
        }
        if items.len() < self.min {
            state.restore(start);
            return false;
        }
        state.scope_mut().put(self.list, items);
        true
    }
}

/// `element (separator element)*`; a separator must be followed by an element.
pub fn repeated_with_separator<T: Clone + 'static>(
    element: Entry<T>,
    list: Atom<Vec<T>>,
    separator: BoxedTerm,
    min: usize,
) -> BoxedTerm {
    Box::new(RepeatedWithSeparator {
        element,
        list,
        separator,
        min,
        allow_trailing: false,
    })
}

/// `element (separator element)* separator?`.
pub fn repeated_with_trailing_separator<T: Clone + 'static>(
    element: Entry<T>,
    list: Atom<Vec<T>>,
    separator: BoxedTerm,
    min: usize,
) -> BoxedTerm {
    Box::new(RepeatedWithSeparator {
        element,
        list,
        separator,
        min,
        allow_trailing: true,
    })
}
