//! The tag value tree.
//!
//! A [`Tag`] is one of thirteen node kinds: the end marker, six numeric
//! scalars, strings, three typed arrays, heterogeneous lists and
//! string-keyed compounds. `Display` renders compact SNBT that parses back
//! to an equal tag.

mod display;
mod escape;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::fmt;

pub use escape::{is_bare_key, quote_and_escape};

/// A node in the tag tree.
#[derive(Clone, PartialEq, Debug)]
pub enum Tag {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(Vec<i8>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
    List(Vec<Tag>),
    /// Keys are kept sorted so rendering is deterministic.
    Compound(BTreeMap<String, Tag>),
}

/// The kind of a [`Tag`], without its payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TagKind {
    End,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    ByteArray,
    IntArray,
    LongArray,
    List,
    Compound,
}

impl TagKind {
    pub fn name(self) -> &'static str {
        match self {
            TagKind::End => "end",
            TagKind::Byte => "byte",
            TagKind::Short => "short",
            TagKind::Int => "int",
            TagKind::Long => "long",
            TagKind::Float => "float",
            TagKind::Double => "double",
            TagKind::String => "string",
            TagKind::ByteArray => "byte array",
            TagKind::IntArray => "int array",
            TagKind::LongArray => "long array",
            TagKind::List => "list",
            TagKind::Compound => "compound",
        }
    }

    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            TagKind::Byte
                | TagKind::Short
                | TagKind::Int
                | TagKind::Long
                | TagKind::Float
                | TagKind::Double
        )
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Tag {
    pub fn kind(&self) -> TagKind {
        match self {
            Tag::End => TagKind::End,
            Tag::Byte(_) => TagKind::Byte,
            Tag::Short(_) => TagKind::Short,
            Tag::Int(_) => TagKind::Int,
            Tag::Long(_) => TagKind::Long,
            Tag::Float(_) => TagKind::Float,
            Tag::Double(_) => TagKind::Double,
            Tag::String(_) => TagKind::String,
            Tag::ByteArray(_) => TagKind::ByteArray,
            Tag::IntArray(_) => TagKind::IntArray,
            Tag::LongArray(_) => TagKind::LongArray,
            Tag::List(_) => TagKind::List,
            Tag::Compound(_) => TagKind::Compound,
        }
    }

    /// Numeric interpretation of a scalar, widened to `f64`.
    #[expect(
        clippy::cast_precision_loss,
        reason = "longs are only inspected, never written back"
    )]
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Tag::Byte(v) => Some(f64::from(v)),
            Tag::Short(v) => Some(f64::from(v)),
            Tag::Int(v) => Some(f64::from(v)),
            Tag::Long(v) => Some(v as f64),
            Tag::Float(v) => Some(f64::from(v)),
            Tag::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Tag]> {
        match self {
            Tag::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&BTreeMap<String, Tag>> {
        match self {
            Tag::Compound(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn into_compound(self) -> Result<BTreeMap<String, Tag>, Tag> {
        match self {
            Tag::Compound(entries) => Ok(entries),
            other => Err(other),
        }
    }

    /// Child of a compound by key.
    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.as_compound().and_then(|entries| entries.get(key))
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Tag::String(value.to_string())
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Self {
        Tag::String(value)
    }
}

impl From<i32> for Tag {
    fn from(value: i32) -> Self {
        Tag::Int(value)
    }
}
