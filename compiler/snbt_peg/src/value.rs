//! Type-erased rule results.
//!
//! A result lives in a cell shared by the memo cache and the scope binding
//! it was handed to. Taking it moves it out and leaves the cell empty, so
//! building a tree never copies its subtrees. A replay from the cache
//! copies a value only while the cell is still full.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

/// Type-erased value bound in a [`Scope`](crate::Scope) or held by the
/// memo cache.
pub(crate) type Value = Rc<dyn Any>;

type Cell<T> = RefCell<Option<T>>;

pub(crate) fn erase<T: 'static>(value: T) -> Value {
    Rc::new(Cell::new(Some(value)))
}

fn cell<'v, T: 'static>(name: &str, value: &'v Value) -> &'v Cell<T> {
    match value.downcast_ref::<Cell<T>>() {
        Some(cell) => cell,
        None => panic!("value bound to <{name}> has the wrong type"),
    }
}

/// Copy of the value, `None` once it has been taken.
pub(crate) fn peek<T: Clone + 'static>(name: &str, value: &Value) -> Option<T> {
    cell::<T>(name, value).borrow().as_ref().cloned()
}

/// Move the value out. Every other holder of the cell sees it empty.
pub(crate) fn take<T: 'static>(name: &str, value: &Value) -> Option<T> {
    cell::<T>(name, value).borrow_mut().take()
}

#[cfg(test)]
mod tests;
