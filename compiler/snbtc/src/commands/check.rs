//! The `check` command: validate without printing the value.

use tracing::debug;

use super::{load, parse_source, report_to_stderr, Options};

/// Returns whether the input parsed.
pub fn check_file(path: &str, options: Options) -> bool {
    let Some(source) = load(path) else {
        return false;
    };
    match parse_source(&source, options.compound) {
        Ok(rendered) => {
            debug!(path, rendered_len = rendered.len(), "check passed");
            println!("ok");
            true
        }
        Err(error) => {
            report_to_stderr(&error, &source, options.color);
            false
        }
    }
}
