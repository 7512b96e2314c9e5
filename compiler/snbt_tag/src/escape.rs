//! String quoting for rendered SNBT.


use std::fmt::Write;

/// Quote `s` so that it parses back to itself.
///
/// The delimiter is `"` unless a `"` occurs before any `'`, in which case
/// `'` is used. Backslashes and the chosen delimiter are escaped; control
/// characters use their short escapes or `\xHH`.
pub fn quote_and_escape(s: &str) -> String {
    let quote = s
        .chars()
        .find(|c| matches!(c, '"' | '\''))
        .map_or('"', |c| if c == '"' { '\'' } else { '"' });

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            c if c < ' ' => {
                // Writing to a String cannot fail.
                let _ = write!(out, "\\x{:02X}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Whether a compound key can be rendered without quotes.
///
/// Bare keys match `[A-Za-z._][A-Za-z0-9._+-]*` and are not spelled like a
/// boolean, which would read back as a different token.
pub fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || matches!(first, '.' | '_')) {
        return false;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-')) {
        return false;
    }
    !key.eq_ignore_ascii_case("true") && !key.eq_ignore_ascii_case("false")
}
