use std::fmt;

use crate::{is_bare_key, quote_and_escape, Tag};

fn write_separated<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    mut write_item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write_item(f, item)?;
    }
    Ok(())
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::End => f.write_str("END"),
            Tag::Byte(v) => write!(f, "{v}b"),
            Tag::Short(v) => write!(f, "{v}s"),
            Tag::Int(v) => write!(f, "{v}"),
            Tag::Long(v) => write!(f, "{v}L"),
            // Display of floats is the shortest text that reads back exactly.
            Tag::Float(v) => write!(f, "{v}f"),
            Tag::Double(v) => write!(f, "{v}d"),
            Tag::String(s) => f.write_str(&quote_and_escape(s)),
            Tag::ByteArray(values) => {
                f.write_str("[B;")?;
                write_separated(f, values, |f, v| write!(f, "{v}B"))?;
                f.write_str("]")
            }
            Tag::IntArray(values) => {
                f.write_str("[I;")?;
                write_separated(f, values, |f, v| write!(f, "{v}"))?;
                f.write_str("]")
            }
            Tag::LongArray(values) => {
                f.write_str("[L;")?;
                write_separated(f, values, |f, v| write!(f, "{v}L"))?;
                f.write_str("]")
            }
            Tag::List(items) => {
                f.write_str("[")?;
                write_separated(f, items, |f, item| write!(f, "{item}"))?;
                f.write_str("]")
            }
            Tag::Compound(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if is_bare_key(key) {
                        f.write_str(key)?;
                    } else {
                        f.write_str(&quote_and_escape(key))?;
                    }
                    write!(f, ":{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}
