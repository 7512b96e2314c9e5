//! The `explain` command: describe an error code.

use snbt_diagnostic::ErrorCode;

/// Summary and category of `code`.
pub fn describe(code: ErrorCode) -> String {
    let category = if code.is_literal_error() {
        "literal"
    } else if code.is_builtin_error() {
        "built-in operation"
    } else if code.is_driver_error() {
        "top-level"
    } else {
        "syntax"
    };
    format!("{code}: {}\n\nCategory: {category} error", code.summary())
}

/// Returns whether `code_str` named a known code.
pub fn explain_error(code_str: &str) -> bool {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E1016, E2001, E3001");
        return false;
    };
    println!("{}", describe(code));
    true
}
