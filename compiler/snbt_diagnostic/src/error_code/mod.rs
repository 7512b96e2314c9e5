//! Error codes for all SNBT diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1016`) with the first digit
//! indicating the layer that raised it. Used for `snbt explain` lookups.

use std::fmt;

/// Error codes for all SNBT diagnostics.
///
/// Format: E#### where first digit indicates layer:
/// - E0xxx: Engine errors (terminal mismatches)
/// - E1xxx: Literal errors (numbers, strings, collections)
/// - E2xxx: Built-in operation errors
/// - E3xxx: Top-level driver errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Engine Errors (E0xxx)
    /// Expected a specific character or word
    E0001,

    // Literal Errors (E1xxx)
    /// Number does not fit its target type
    E1001,
    /// Hex escape has too few digits
    E1002,
    /// Escape names an invalid code point
    E1003,
    /// Unknown built-in operation
    E1004,
    /// Unsigned literal with a minus sign
    E1005,
    /// Unknown Unicode character name
    E1006,
    /// Typed array element has an incompatible width
    E1007,
    /// Bare word starts with a character reserved for numbers
    E1008,
    /// Expected a bare word
    E1009,
    /// Empty run of plain string characters
    E1010,
    /// Expected binary digits
    E1011,
    /// Leading or trailing underscore in a numeral
    E1012,
    /// Expected decimal digits
    E1013,
    /// Expected hex digits
    E1014,
    /// Map key is empty
    E1015,
    /// Decimal literal with a leading zero
    E1016,
    /// Float literal overflows to infinity
    E1017,

    // Built-in Errors (E2xxx)
    /// `uuid(x)` argument is not a UUID string
    E2001,
    /// `bool(x)` argument is neither number nor boolean
    E2002,

    // Driver Errors (E3xxx)
    /// Input continues after a complete value
    E3001,
    /// Top-level value is not a compound
    E3002,
    /// Several equally deep failures
    E3003,
}

impl ErrorCode {
    /// All error code variants, for iteration and exhaustive lookup.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E1011,
        ErrorCode::E1012,
        ErrorCode::E1013,
        ErrorCode::E1014,
        ErrorCode::E1015,
        ErrorCode::E1016,
        ErrorCode::E1017,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            ErrorCode::E1013 => "E1013",
            ErrorCode::E1014 => "E1014",
            ErrorCode::E1015 => "E1015",
            ErrorCode::E1016 => "E1016",
            ErrorCode::E1017 => "E1017",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
        }
    }

    /// Message stem shown to users.
    ///
    /// Codes that carry a detail append it: `expected` + `'{'` renders as
    /// `expected '{'`, `no such operation` + `nosuch/1` renders as
    /// `no such operation: nosuch/1`. See [`ErrorCode::joins_with_space`].
    pub fn summary(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "expected",
            ErrorCode::E1001 => "failed to parse number",
            ErrorCode::E1002 => "expected hex escape of length",
            ErrorCode::E1003 => "invalid codepoint",
            ErrorCode::E1004 => "no such operation",
            ErrorCode::E1005 => "expected non-negative number",
            ErrorCode::E1006 => "invalid character name",
            ErrorCode::E1007 => "invalid array element type",
            ErrorCode::E1008 => "invalid unquoted start",
            ErrorCode::E1009 => "expected unquoted string",
            ErrorCode::E1010 => "invalid string contents",
            ErrorCode::E1011 => "expected binary numeral",
            ErrorCode::E1012 => "underscore not allowed",
            ErrorCode::E1013 => "expected decimal numeral",
            ErrorCode::E1014 => "expected hex numeral",
            ErrorCode::E1015 => "empty key",
            ErrorCode::E1016 => "leading zero not allowed",
            ErrorCode::E1017 => "infinity not allowed",
            ErrorCode::E2001 => "expected string uuid",
            ErrorCode::E2002 => "expected number or boolean",
            ErrorCode::E3001 => "trailing data",
            ErrorCode::E3002 => "expected compound",
            ErrorCode::E3003 => "failed to parse",
        }
    }

    /// Whether a detail follows the summary after a space rather than `: `.
    pub fn joins_with_space(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E1002)
    }

    /// Render the user-facing message, with an optional detail.
    pub fn render(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.summary().to_string(),
            Some(detail) if self.joins_with_space() => format!("{} {detail}", self.summary()),
            Some(detail) => format!("{}: {detail}", self.summary()),
        }
    }

    /// Check if this is a literal error (E1xxx range).
    pub fn is_literal_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a built-in operation error (E2xxx range).
    pub fn is_builtin_error(&self) -> bool {
        matches!(self, ErrorCode::E2001 | ErrorCode::E2002)
    }

    /// Check if this is a top-level driver error (E3xxx range).
    pub fn is_driver_error(&self) -> bool {
        matches!(self, ErrorCode::E3001 | ErrorCode::E3002 | ErrorCode::E3003)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1016"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
