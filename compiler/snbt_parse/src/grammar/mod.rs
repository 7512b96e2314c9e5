//! The SNBT grammar.
//!
//! Built once per value builder, then reused for any number of inputs.
//! Every literal starts with a one-character lookahead that picks the
//! branch: numbers, quoted strings, maps, lists, or bare words (which may
//! call a built-in operation). Past the lookahead of a string, map or list,
//! a cut stops a malformed literal from being retried as a bare word.

mod numbers;
mod strings;

#[cfg(test)]
mod tests;

use std::rc::Rc;

use snbt_diagnostic::ErrorCode;
use snbt_peg::rule;
use snbt_peg::term::{
    alt, character, characters, cut, expected, marker, optional, positive_lookahead,
    repeated_with_trailing_separator, seq,
};
use snbt_peg::{Atom, Dictionary, Entry, ErrorReason, LongestOnly, ParseState, Suggestions};
use tracing::debug;

use crate::builtins::{BuiltinKey, Builtins, BUILTIN_IDS};
use crate::literal::ArrayPrefix;
use crate::{ParseError, ValueBuilder};

const NUMBER_START: [char; 13] = [
    '+', '-', '.', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Characters a bare word may not begin with.
const INVALID_UNQUOTED_START: [char; 14] = [
    '+', '-', '.', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '_',
];

/// Report `reason` at the cursor and fail the rule.
pub(crate) fn reject<T>(state: &mut ParseState<'_>, reason: &ErrorReason) -> Option<T> {
    let at = state.mark();
    state.report(at, reason);
    None
}

/// An SNBT parser producing values through `B`.
pub struct SnbtGrammar<B: ValueBuilder> {
    dictionary: Dictionary,
    literal: Entry<B::Value>,
    builder: Rc<B>,
}

impl<B: ValueBuilder + 'static> SnbtGrammar<B> {
    pub fn new(builder: B) -> Self {
        let builder = Rc::new(builder);
        let mut dictionary = Dictionary::new();
        let literal: Atom<B::Value> = Atom::new("literal");
        let literal_entry = dictionary.forward(literal);

        let numbers = numbers::define(&mut dictionary, &builder);
        let strings = strings::define(&mut dictionary);
        let (quoted, unquoted) = (strings.quoted, strings.unquoted);

        // Bare words and built-in calls
        let arguments = Atom::new("arguments");
        let term = repeated_with_trailing_separator(literal_entry, arguments, character(','), 0);
        dictionary.put(
            arguments,
            rule::from_scope(term, move |scope| scope.take(arguments)),
        );

        // A bad start is rejected before the word is read, so that no
        // failure further into the word competes with it.
        let bare = Atom::new("unquoted_string_or_builtin");
        let builtin_ids: Suggestions = BUILTIN_IDS.into_iter().collect();
        let term = alt([
            seq([
                positive_lookahead(characters(&INVALID_UNQUOTED_START)),
                cut(),
                expected(ErrorReason::new(ErrorCode::E1008), builtin_ids),
            ]),
            seq([
                dictionary.named(unquoted),
                optional(seq([
                    character('('),
                    dictionary.named(arguments),
                    character(')'),
                ])),
            ]),
        ]);
        let builtins = Builtins::<B>::standard();
        let b = Rc::clone(&builder);
        dictionary.put(
            bare,
            rule::from_term(term, move |state: &mut ParseState<'_>| {
                let word = state.scope_mut().require(unquoted);
                if let Some(args) = state.scope_mut().take(arguments) {
                    let key = BuiltinKey::new(word, args.len());
                    return match builtins.get(&key) {
                        Some(operation) => match operation(b.as_ref(), &args) {
                            Ok(value) => Some(value),
                            Err(reason) => reject(state, &reason),
                        },
                        None => reject(
                            state,
                            &ErrorReason::with_detail(ErrorCode::E1004, key.to_string()),
                        ),
                    };
                }
                if word.eq_ignore_ascii_case("true") {
                    Some(b.boolean(true))
                } else if word.eq_ignore_ascii_case("false") {
                    Some(b.boolean(false))
                } else {
                    Some(b.string(word))
                }
            }),
        );

        // Maps
        let key = Atom::new("map_key");
        let term = alt([dictionary.named(quoted), dictionary.named(unquoted)]);
        dictionary.put(
            key,
            rule::from_scope(term, move |scope| scope.get_any(&[quoted, unquoted])),
        );

        let map_entry = Atom::new("map_entry");
        let term = seq([
            dictionary.named(key),
            character(':'),
            dictionary.named(literal),
        ]);
        let map_entry = dictionary.put(
            map_entry,
            rule::from_term(term, move |state: &mut ParseState<'_>| {
                let name = state.scope_mut().require(key);
                if name.is_empty() {
                    return reject(state, &ErrorReason::new(ErrorCode::E1015));
                }
                let value = state.scope_mut().take(literal)?;
                Some((name, value))
            }),
        );

        let map_entries = Atom::new("map_entries");
        let term = repeated_with_trailing_separator(map_entry, map_entries, character(','), 0);
        dictionary.put(
            map_entries,
            rule::from_scope(term, move |scope| scope.take(map_entries)),
        );

        let map = Atom::new("map_literal");
        let term = seq([
            character('{'),
            dictionary.named(map_entries),
            character('}'),
        ]);
        let b = Rc::clone(&builder);
        let empty_map = builder.empty_map();
        dictionary.put(
            map,
            rule::from_scope(term, move |scope| {
                let entries = scope.take(map_entries).unwrap_or_default();
                if entries.is_empty() {
                    Some(empty_map.clone())
                } else {
                    Some(b.map(entries))
                }
            }),
        );

        // Lists and typed arrays
        let prefix = Atom::new("array_prefix");
        let term = alt([
            ('B', ArrayPrefix::Byte),
            ('L', ArrayPrefix::Long),
            ('I', ArrayPrefix::Int),
        ]
        .map(|(c, kind)| seq([character(c), marker(prefix, kind)])));
        dictionary.put(prefix, rule::from_scope(term, move |scope| scope.take(prefix)));

        let array_entries = Atom::new("int_array_entries");
        let term = repeated_with_trailing_separator(
            numbers.integer,
            array_entries,
            character(','),
            0,
        );
        dictionary.put(
            array_entries,
            rule::from_scope(term, move |scope| scope.take(array_entries)),
        );

        let list_entries = Atom::new("list_entries");
        let term = repeated_with_trailing_separator(literal_entry, list_entries, character(','), 0);
        dictionary.put(
            list_entries,
            rule::from_scope(term, move |scope| scope.take(list_entries)),
        );

        let list = Atom::new("list_literal");
        let term = seq([
            character('['),
            alt([
                seq([
                    dictionary.named(prefix),
                    character(';'),
                    dictionary.named(array_entries),
                ]),
                dictionary.named(list_entries),
            ]),
            character(']'),
        ]);
        let b = Rc::clone(&builder);
        let empty_list = builder.empty_list();
        dictionary.put(
            list,
            rule::from_term(term, move |state: &mut ParseState<'_>| {
                let scope = state.scope_mut();
                if let Some(kind) = scope.take(prefix) {
                    let literals = scope.take(array_entries).unwrap_or_default();
                    return match kind.collect(&literals) {
                        Ok(values) => Some(b.array(values)),
                        Err(reason) => reject(state, &reason),
                    };
                }
                let items = scope.take(list_entries).unwrap_or_default();
                if items.is_empty() {
                    Some(empty_list.clone())
                } else {
                    Some(b.list(items))
                }
            }),
        );

        // Any literal
        let integer = numbers.integer.atom();
        let term = alt([
            seq([
                positive_lookahead(characters(&NUMBER_START)),
                alt([
                    dictionary.named_as(numbers.float, literal),
                    dictionary.named(integer),
                ]),
            ]),
            seq([
                positive_lookahead(characters(&['"', '\''])),
                cut(),
                dictionary.named(quoted),
            ]),
            seq([
                positive_lookahead(character('{')),
                cut(),
                dictionary.named_as(map, literal),
            ]),
            seq([
                positive_lookahead(character('[')),
                cut(),
                dictionary.named_as(list, literal),
            ]),
            dictionary.named_as(bare, literal),
        ]);
        let b = Rc::clone(&builder);
        dictionary.bind(
            literal_entry,
            rule::from_term(term, move |state: &mut ParseState<'_>| {
                let scope = state.scope_mut();
                if let Some(text) = scope.take(quoted) {
                    return Some(b.string(text));
                }
                if let Some(number) = scope.take(integer) {
                    return match number.to_integer(number.width()) {
                        Ok(value) => Some(b.integer(value)),
                        Err(reason) => reject(state, &reason),
                    };
                }
                scope.take(literal)
            }),
        );

        debug_assert!(
            dictionary.unbound().next().is_none(),
            "unbound SNBT rules: {:?}",
            dictionary.unbound().collect::<Vec<_>>()
        );
        debug!(rules = dictionary.len(), "built SNBT grammar");

        SnbtGrammar {
            dictionary,
            literal: literal_entry,
            builder,
        }
    }

    /// Parse one complete value. Anything but whitespace after it is an
    /// error.
    #[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
    pub fn parse(&self, text: &str) -> Result<B::Value, ParseError> {
        let mut errors = LongestOnly::new();
        let outcome = {
            let mut state = ParseState::new(text, &self.dictionary, &mut errors);
            match state.parse_top_rule(self.literal) {
                Some(value) => {
                    state.skip_whitespace();
                    if state.can_read() {
                        Err(Some(state.mark()))
                    } else {
                        Ok(value)
                    }
                }
                None => Err(None),
            }
        };
        outcome.map_err(|trailing| match trailing {
            Some(at) => ParseError::at(ErrorCode::E3001, at),
            None => {
                let error = ParseError::from_entries(&errors.entries(), 0);
                debug!(code = %error.code(), position = error.position(), "parse failed");
                error
            }
        })
    }

    /// Parse one complete value that must be a map.
    #[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
    pub fn parse_compound(&self, text: &str) -> Result<B::Value, ParseError> {
        let value = self.parse(text)?;
        if self.builder.is_map(&value) {
            Ok(value)
        } else {
            Err(ParseError::expected_compound(text))
        }
    }
}
