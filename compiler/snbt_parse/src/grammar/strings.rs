//! Quoted strings with escapes, and bare words.

use snbt_diagnostic::ErrorCode;
use snbt_peg::rule::{self, GreedyPredicateRule, UnquotedStringRule};
use snbt_peg::term::{alt, character, cut, marker, optional, repeated, seq};
use snbt_peg::{Atom, BoxedTerm, Dictionary, Entry, ErrorReason, ParseState};

use super::reject;

pub(super) struct StringRules {
    pub quoted: Atom<String>,
    pub unquoted: Atom<String>,
}

struct Escapes {
    simple: Atom<String>,
    hex: [Atom<String>; 3],
    name: Atom<String>,
}

fn is_unicode_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | ' ')
}

fn escape_sequence(dictionary: &mut Dictionary) -> Atom<String> {
    let hex = [("string_hex_2", 2), ("string_hex_4", 4), ("string_hex_8", 8)].map(|(name, len)| {
        let atom = Atom::new(name);
        let reason = ErrorReason::with_detail(ErrorCode::E1002, len.to_string());
        dictionary.put(atom, GreedyPredicateRule::hex_digits(len, reason));
        atom
    });
    let name = Atom::new("string_unicode_name");
    dictionary.put(
        name,
        GreedyPredicateRule::new(1, is_unicode_name_char, ErrorReason::new(ErrorCode::E1006)),
    );

    let atom = Atom::new("string_escape_sequence");
    let mut branches: Vec<BoxedTerm> = [
        ('b', "\u{8}"),
        ('s', " "),
        ('t', "\t"),
        ('n', "\n"),
        ('f', "\u{c}"),
        ('r', "\r"),
        ('\\', "\\"),
        ('\'', "'"),
        ('"', "\""),
    ]
    .into_iter()
    .map(|(c, decoded)| seq([character(c), marker(atom, decoded.to_string())]))
    .collect();
    branches.extend(
        ['x', 'u', 'U']
            .into_iter()
            .zip(hex)
            .map(|(c, digits)| seq([character(c), dictionary.named(digits)])),
    );
    branches.push(seq([
        character('N'),
        character('{'),
        dictionary.named(name),
        character('}'),
    ]));

    let escapes = Escapes {
        simple: atom,
        hex,
        name,
    };
    dictionary.put(
        atom,
        rule::from_term(alt(branches), move |state: &mut ParseState<'_>| {
            decode_escape(state, &escapes)
        }),
    );
    atom
}

fn decode_escape(state: &mut ParseState<'_>, escapes: &Escapes) -> Option<String> {
    let scope = state.scope_mut();
    if let Some(decoded) = scope.take(escapes.simple) {
        return Some(decoded);
    }
    if let Some(digits) = scope.get_any(&escapes.hex) {
        // At most eight hex digits always fit.
        let code = u32::from_str_radix(&digits, 16).unwrap_or(u32::MAX);
        return match char::from_u32(code) {
            Some(c) => Some(c.to_string()),
            None => reject(
                state,
                &ErrorReason::with_detail(ErrorCode::E1003, format!("U+{code:08X}")),
            ),
        };
    }
    let name = scope.require(escapes.name);
    match unicode_names2::character(&name.to_ascii_uppercase()) {
        Some(c) => Some(c.to_string()),
        None => reject(state, &ErrorReason::new(ErrorCode::E1006)),
    }
}

/// One piece of a string quoted with the other quote character: a plain
/// run, an escape, or a literal `other_quote`.
fn chunk(
    dictionary: &mut Dictionary,
    name: &'static str,
    plain: Atom<String>,
    escape: Atom<String>,
    other_quote: char,
) -> Entry<String> {
    let contents = Atom::new("string_contents");
    let term = alt([
        dictionary.named_as(plain, contents),
        seq([character('\\'), dictionary.named_as(escape, contents)]),
        seq([
            character(other_quote),
            marker(contents, other_quote.to_string()),
        ]),
    ]);
    dictionary.put(
        Atom::new(name),
        rule::from_scope(term, move |scope| scope.take(contents)),
    )
}

fn contents(dictionary: &mut Dictionary, name: &'static str, chunk: Entry<String>) -> Atom<String> {
    let atom = Atom::new(name);
    let chunks = Atom::new("string_chunks");
    dictionary.put(
        atom,
        rule::from_scope(repeated(chunk, chunks, 0), move |scope| {
            scope.take(chunks).map(join_chunks)
        }),
    );
    atom
}

/// Join string chunks. A lone chunk is moved out as is.
pub(super) fn join_chunks(mut parts: Vec<String>) -> String {
    match parts.len() {
        0 => String::new(),
        1 => parts.pop().unwrap_or_default(),
        _ => parts.concat(),
    }
}

pub(super) fn define(dictionary: &mut Dictionary) -> StringRules {
    let escape = escape_sequence(dictionary);
    let plain = Atom::new("string_plain_contents");
    dictionary.put(
        plain,
        GreedyPredicateRule::new(
            1,
            |c| !matches!(c, '"' | '\'' | '\\'),
            ErrorReason::new(ErrorCode::E1010),
        ),
    );

    let single_chunk = chunk(dictionary, "single_quoted_string_chunk", plain, escape, '"');
    let double_chunk = chunk(dictionary, "double_quoted_string_chunk", plain, escape, '\'');
    let single = contents(dictionary, "single_quoted_string_contents", single_chunk);
    let double = contents(dictionary, "double_quoted_string_contents", double_chunk);

    let quoted = Atom::new("quoted_string_literal");
    let text = Atom::new("string_contents");
    let term = alt([
        seq([
            character('"'),
            cut(),
            optional(dictionary.named_as(double, text)),
            character('"'),
        ]),
        seq([
            character('\''),
            optional(dictionary.named_as(single, text)),
            character('\''),
        ]),
    ]);
    dictionary.put(
        quoted,
        rule::from_scope(term, move |scope| Some(scope.take(text).unwrap_or_default())),
    );

    let unquoted = Atom::new("unquoted_string");
    dictionary.put(
        unquoted,
        UnquotedStringRule::new(1, ErrorReason::new(ErrorCode::E1009)),
    );

    StringRules { quoted, unquoted }
}
