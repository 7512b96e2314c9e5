//! SNBT parsing.
//!
//! [`SnbtGrammar`] is the grammar, generic over a [`ValueBuilder`] that
//! decides what values look like. [`parse`] and [`parse_compound`] are the
//! convenience entry points producing [`Tag`] trees.
//!
//! ```text
//! text ──▶ SnbtGrammar<B> ──▶ B::Value
//!              │
//!              └── on failure: deepest failures ──▶ ParseError ──▶ Diagnostic
//! ```

mod builder;
mod builtins;
mod error;
mod grammar;
pub mod literal;


use std::collections::BTreeMap;

use snbt_tag::Tag;

pub use builder::{TagBuilder, ValueBuilder};
pub use builtins::{parse_uuid, BuiltinKey, BUILTIN_IDS};
pub use error::{Candidate, ParseError};
pub use grammar::SnbtGrammar;

thread_local! {
    static TAG_GRAMMAR: SnbtGrammar<TagBuilder> = SnbtGrammar::new(TagBuilder);
}

/// Parse one SNBT value into a [`Tag`].
pub fn parse(text: &str) -> Result<Tag, ParseError> {
    TAG_GRAMMAR.with(|grammar| grammar.parse(text))
}

/// Parse one SNBT value that must be a compound.
pub fn parse_compound(text: &str) -> Result<BTreeMap<String, Tag>, ParseError> {
    TAG_GRAMMAR
        .with(|grammar| grammar.parse_compound(text))?
        .into_compound()
        .map_err(|_| ParseError::expected_compound(text))
}
