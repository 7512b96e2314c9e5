//! Built-in operations callable from bare words: `bool(x)`, `uuid(x)`.

#[cfg(test)]
mod tests;

use std::fmt;

use rustc_hash::FxHashMap;
use snbt_diagnostic::ErrorCode;
use snbt_peg::ErrorReason;

use crate::ValueBuilder;

/// Words offered as completions where a bare word failed to start.
pub const BUILTIN_IDS: [&str; 4] = ["false", "true", "bool", "uuid"];

/// Operations are looked up by name and argument count together.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BuiltinKey {
    name: String,
    arity: usize,
}

impl BuiltinKey {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        BuiltinKey {
            name: name.into(),
            arity,
        }
    }
}

impl fmt::Display for BuiltinKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

pub type BuiltinFn<B> =
    fn(&B, &[<B as ValueBuilder>::Value]) -> Result<<B as ValueBuilder>::Value, ErrorReason>;

/// The operation table.
pub struct Builtins<B: ValueBuilder> {
    operations: FxHashMap<BuiltinKey, BuiltinFn<B>>,
}

impl<B: ValueBuilder> Builtins<B> {
    pub fn standard() -> Self {
        let mut operations: FxHashMap<BuiltinKey, BuiltinFn<B>> = FxHashMap::default();
        operations.insert(BuiltinKey::new("bool", 1), bool_of::<B>);
        operations.insert(BuiltinKey::new("uuid", 1), uuid_of::<B>);
        Builtins { operations }
    }

    pub fn get(&self, key: &BuiltinKey) -> Option<BuiltinFn<B>> {
        self.operations.get(key).copied()
    }
}

fn bool_of<B: ValueBuilder>(builder: &B, args: &[B::Value]) -> Result<B::Value, ErrorReason> {
    let value = args.first().and_then(|arg| {
        builder
            .as_bool(arg)
            .or_else(|| builder.as_number(arg).map(|n| n != 0.0))
    });
    value
        .map(|b| builder.boolean(b))
        .ok_or(ErrorReason::new(ErrorCode::E2002))
}

fn uuid_of<B: ValueBuilder>(builder: &B, args: &[B::Value]) -> Result<B::Value, ErrorReason> {
    args.first()
        .and_then(|arg| builder.as_str(arg))
        .and_then(parse_uuid)
        .map(|words| builder.int_array(words.to_vec()))
        .ok_or(ErrorReason::new(ErrorCode::E2001))
}

/// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` as four big-endian 32-bit words.
pub fn parse_uuid(text: &str) -> Option<[i32; 4]> {
    let bytes = text.as_bytes();
    if bytes.len() != 36 {
        return None;
    }
    let well_formed = bytes.iter().enumerate().all(|(i, b)| match i {
        8 | 13 | 18 | 23 => *b == b'-',
        _ => b.is_ascii_hexdigit(),
    });
    if !well_formed {
        return None;
    }

    let digits: Vec<u8> = bytes.iter().copied().filter(|b| *b != b'-').collect();
    let mut words = [0; 4];
    for (word, chunk) in words.iter_mut().zip(digits.chunks(8)) {
        let chunk = std::str::from_utf8(chunk).ok()?;
        let value = u32::from_str_radix(chunk, 16).ok()?;
        *word = i32::from_ne_bytes(value.to_ne_bytes());
    }
    Some(words)
}
