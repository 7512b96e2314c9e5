//! Packrat PEG engine.
//!
//! Grammars are built from [`Term`] combinators wrapped into named [`Rule`]s
//! and registered in a [`Dictionary`]. Parsing runs depth-first over a
//! [`ParseState`], which memoizes every (rule, position) outcome, passes
//! bound sub-results through a manually managed [`Scope`] stack, and keeps
//! only the failures found at the deepest cursor position.
//!
//! # Architecture
//!
//! ```text
//! Dictionary ── Entry<T> ──▶ Rule<T> ──▶ Term tree
//!                                │
//!                      ParseState::parse(entry)
//!                       ├── memo cache (position → atom → outcome)
//!                       ├── Scope (frames of atom → value)
//!                       ├── Control pool (cut flags)
//!                       └── ErrorCollector (deepest failures only)
//! ```
//!
//! # Cut
//!
//! Each [`term::alt`] owns a [`Control`]. A [`term::cut`] inside one of its
//! branches commits the alternative to that branch: if the branch then
//! fails, the remaining branches are skipped.

mod atom;
mod control;
mod dictionary;
mod error;
pub mod rule;
mod scope;
mod state;
pub mod term;
mod value;

pub use atom::{Atom, AtomId};
pub use control::Control;
pub use dictionary::{Dictionary, Entry};
pub use error::{ErrorCollector, ErrorEntry, ErrorReason, LongestOnly, Nop, Suggestions};
pub use rule::Rule;
pub use scope::Scope;
pub use state::ParseState;
pub use term::{BoxedTerm, Term};

pub(crate) use value::Value;

/// Characters allowed in a bare (unquoted) word: `[0-9A-Za-z_.+-]`.
#[inline]
pub fn is_unquoted_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '+')
}
