//! The value-construction capability the grammar is generic over.


use std::collections::BTreeMap;

use snbt_tag::Tag;

use crate::literal::{ArrayValues, FloatValue, IntegerValue};

/// Builds values of some concrete tree type.
///
/// The grammar never names a concrete value type; it calls these
/// constructors as literals are recognized. The inspection methods serve
/// built-in operations that validate their arguments.
pub trait ValueBuilder {
    type Value: Clone + 'static;

    fn boolean(&self, value: bool) -> Self::Value;
    fn byte(&self, value: i8) -> Self::Value;
    fn short(&self, value: i16) -> Self::Value;
    fn int(&self, value: i32) -> Self::Value;
    fn long(&self, value: i64) -> Self::Value;
    fn float(&self, value: f32) -> Self::Value;
    fn double(&self, value: f64) -> Self::Value;
    fn string(&self, value: String) -> Self::Value;
    fn byte_array(&self, values: Vec<i8>) -> Self::Value;
    fn int_array(&self, values: Vec<i32>) -> Self::Value;
    fn long_array(&self, values: Vec<i64>) -> Self::Value;
    fn empty_list(&self) -> Self::Value;
    fn list(&self, items: Vec<Self::Value>) -> Self::Value;
    fn empty_map(&self) -> Self::Value;
    /// Later entries replace earlier ones with the same key.
    fn map(&self, entries: Vec<(String, Self::Value)>) -> Self::Value;

    /// Boolean reading of a value, for trees that have booleans.
    fn as_bool(&self, _value: &Self::Value) -> Option<bool> {
        None
    }
    fn as_number(&self, value: &Self::Value) -> Option<f64>;
    fn as_str<'v>(&self, value: &'v Self::Value) -> Option<&'v str>;
    fn is_map(&self, value: &Self::Value) -> bool;

    fn integer(&self, value: IntegerValue) -> Self::Value {
        match value {
            IntegerValue::Byte(v) => self.byte(v),
            IntegerValue::Short(v) => self.short(v),
            IntegerValue::Int(v) => self.int(v),
            IntegerValue::Long(v) => self.long(v),
        }
    }

    fn floating(&self, value: FloatValue) -> Self::Value {
        match value {
            FloatValue::Float(v) => self.float(v),
            FloatValue::Double(v) => self.double(v),
        }
    }

    fn array(&self, values: ArrayValues) -> Self::Value {
        match values {
            ArrayValues::Bytes(v) => self.byte_array(v),
            ArrayValues::Ints(v) => self.int_array(v),
            ArrayValues::Longs(v) => self.long_array(v),
        }
    }
}

/// Builds [`Tag`] trees. Booleans become the bytes `1` and `0`.
#[derive(Copy, Clone, Default, Debug)]
pub struct TagBuilder;

impl ValueBuilder for TagBuilder {
    type Value = Tag;

    fn boolean(&self, value: bool) -> Tag {
        Tag::Byte(i8::from(value))
    }

    fn byte(&self, value: i8) -> Tag {
        Tag::Byte(value)
    }

    fn short(&self, value: i16) -> Tag {
        Tag::Short(value)
    }

    fn int(&self, value: i32) -> Tag {
        Tag::Int(value)
    }

    fn long(&self, value: i64) -> Tag {
        Tag::Long(value)
    }

    fn float(&self, value: f32) -> Tag {
        Tag::Float(value)
    }

    fn double(&self, value: f64) -> Tag {
        Tag::Double(value)
    }

    fn string(&self, value: String) -> Tag {
        Tag::String(value)
    }

    fn byte_array(&self, values: Vec<i8>) -> Tag {
        Tag::ByteArray(values)
    }

    fn int_array(&self, values: Vec<i32>) -> Tag {
        Tag::IntArray(values)
    }

    fn long_array(&self, values: Vec<i64>) -> Tag {
        Tag::LongArray(values)
    }

    fn empty_list(&self) -> Tag {
        Tag::List(Vec::new())
    }

    fn list(&self, items: Vec<Tag>) -> Tag {
        Tag::List(items)
    }

    fn empty_map(&self) -> Tag {
        Tag::Compound(BTreeMap::new())
    }

    fn map(&self, entries: Vec<(String, Tag)>) -> Tag {
        Tag::Compound(entries.into_iter().collect())
    }

    fn as_number(&self, value: &Tag) -> Option<f64> {
        value.as_number()
    }

    fn as_str<'v>(&self, value: &'v Tag) -> Option<&'v str> {
        value.as_str()
    }

    fn is_map(&self, value: &Tag) -> bool {
        matches!(value, Tag::Compound(_))
    }
}
