//! Integer and floating literals.

use std::rc::Rc;

use snbt_diagnostic::ErrorCode;
use snbt_peg::rule::{self, NumberRunRule};
use snbt_peg::term::{alt, character, characters, cut, fail, marker, optional, seq};
use snbt_peg::{Atom, BoxedTerm, Dictionary, Entry, ErrorReason, ParseState, Scope};

use super::reject;
use crate::literal::{
    Base, FloatLiteral, FloatSuffix, IntegerLiteral, IntegerSuffix, Sign, SignedPrefix, TypeSuffix,
};
use crate::ValueBuilder;

pub(super) struct NumberRules<V> {
    pub integer: Entry<IntegerLiteral>,
    pub float: Atom<V>,
}

fn numeral(
    dictionary: &mut Dictionary,
    name: &'static str,
    accepts: fn(char) -> bool,
    no_value: ErrorCode,
) -> Atom<String> {
    let atom = Atom::new(name);
    dictionary.put(
        atom,
        NumberRunRule::new(
            accepts,
            ErrorReason::new(no_value),
            ErrorReason::new(ErrorCode::E1012),
        ),
    );
    atom
}

/// `[lower upper]` followed by binding `value` under `atom`.
fn keyword<T: Clone + 'static>(lower: char, upper: char, atom: Atom<T>, value: T) -> BoxedTerm {
    seq([characters(&[lower, upper]), marker(atom, value)])
}

fn integer_suffix(dictionary: &mut Dictionary) -> Atom<IntegerSuffix> {
    let atom = Atom::new("integer_suffix");
    let widths = |signedness: Option<SignedPrefix>| {
        alt([
            ('b', 'B', TypeSuffix::Byte),
            ('s', 'S', TypeSuffix::Short),
            ('i', 'I', TypeSuffix::Int),
            ('l', 'L', TypeSuffix::Long),
        ]
        .map(|(lower, upper, width)| {
            let suffix = IntegerSuffix {
                signedness,
                width: Some(width),
            };
            keyword(lower, upper, atom, suffix)
        }))
    };
    let term = alt([
        seq([
            characters(&['u', 'U']),
            widths(Some(SignedPrefix::Unsigned)),
        ]),
        seq([characters(&['s', 'S']), widths(Some(SignedPrefix::Signed))]),
        widths(None),
    ]);
    dictionary.put(atom, rule::from_scope(term, move |scope| scope.take(atom)));
    atom
}

pub(super) fn define<B: ValueBuilder + 'static>(
    dictionary: &mut Dictionary,
    builder: &Rc<B>,
) -> NumberRules<B::Value> {
    let sign = Atom::new("sign");
    let term = alt([
        seq([character('+'), marker(sign, Sign::Plus)]),
        seq([character('-'), marker(sign, Sign::Minus)]),
    ]);
    dictionary.put(sign, rule::from_scope(term, move |scope| scope.take(sign)));

    let suffix = integer_suffix(dictionary);
    let binary = numeral(
        dictionary,
        "binary_numeral",
        |c| matches!(c, '0' | '1'),
        ErrorCode::E1011,
    );
    let decimal = numeral(
        dictionary,
        "decimal_numeral",
        |c| c.is_ascii_digit(),
        ErrorCode::E1013,
    );
    let hex = numeral(
        dictionary,
        "hex_numeral",
        |c| c.is_ascii_hexdigit(),
        ErrorCode::E1014,
    );

    // A leading `0` commits: it is a base prefix, a lone zero, or an error.
    let after_zero = alt([
        seq([characters(&['x', 'X']), cut(), dictionary.named(hex)]),
        seq([characters(&['b', 'B']), dictionary.named(binary)]),
        seq([
            dictionary.named(decimal),
            cut(),
            fail(ErrorReason::new(ErrorCode::E1016)),
        ]),
        marker(decimal, "0".to_string()),
    ]);
    let term = seq([
        optional(dictionary.named(sign)),
        alt([
            seq([character('0'), cut(), after_zero]),
            dictionary.named(decimal),
        ]),
        optional(dictionary.named(suffix)),
    ]);
    let integer = dictionary.put(
        Atom::new("integer_literal"),
        rule::from_scope(term, move |scope: &mut Scope| {
            let (base, digits) = if let Some(digits) = scope.take(decimal) {
                (Base::Decimal, digits)
            } else if let Some(digits) = scope.take(hex) {
                (Base::Hex, digits)
            } else {
                (Base::Binary, scope.require(binary))
            };
            Some(IntegerLiteral {
                sign: scope.take(sign).unwrap_or(Sign::Plus),
                base,
                digits,
                suffix: scope.take(suffix).unwrap_or_default(),
            })
        }),
    );

    let float_suffix = Atom::new("float_type_suffix");
    let term = alt([
        keyword('f', 'F', float_suffix, FloatSuffix::Float),
        keyword('d', 'D', float_suffix, FloatSuffix::Double),
    ]);
    dictionary.put(
        float_suffix,
        rule::from_scope(term, move |scope| scope.take(float_suffix)),
    );

    let exponent = Atom::new("float_exponent_part");
    let term = seq([
        characters(&['e', 'E']),
        optional(dictionary.named(sign)),
        dictionary.named(decimal),
    ]);
    dictionary.put(
        exponent,
        rule::from_scope(term, move |scope| {
            Some((scope.take(sign).unwrap_or(Sign::Plus), scope.require(decimal)))
        }),
    );

    let whole = Atom::new("float_whole_part");
    let fraction = Atom::new("float_fraction_part");
    let term = seq([
        optional(dictionary.named(sign)),
        alt([
            seq([
                dictionary.named_as(decimal, whole),
                character('.'),
                cut(),
                optional(dictionary.named_as(decimal, fraction)),
                optional(dictionary.named(exponent)),
                optional(dictionary.named(float_suffix)),
            ]),
            seq([
                character('.'),
                cut(),
                dictionary.named_as(decimal, fraction),
                optional(dictionary.named(exponent)),
                optional(dictionary.named(float_suffix)),
            ]),
            seq([
                dictionary.named_as(decimal, whole),
                dictionary.named(exponent),
                cut(),
                optional(dictionary.named(float_suffix)),
            ]),
            seq([
                dictionary.named_as(decimal, whole),
                optional(dictionary.named(exponent)),
                dictionary.named(float_suffix),
            ]),
        ]),
    ]);
    let float = Atom::new("float_literal");
    let builder = Rc::clone(builder);
    dictionary.put(
        float,
        rule::from_term(term, move |state: &mut ParseState<'_>| {
            let scope = state.scope_mut();
            let literal = FloatLiteral {
                sign: scope.take(sign).unwrap_or(Sign::Plus),
                whole: scope.take(whole),
                fraction: scope.take(fraction),
                exponent: scope.take(exponent),
                suffix: scope.take(float_suffix),
            };
            match literal.to_float() {
                Ok(value) => Some(builder.floating(value)),
                Err(reason) => reject(state, &reason),
            }
        }),
    );

    NumberRules { integer, float }
}
