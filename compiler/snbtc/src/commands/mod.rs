//! Command handlers for the `snbt` CLI.
//!
//! Each submodule implements one command. Reading input and rendering
//! diagnostics are shared and live here.

mod check;
mod explain;
mod parse;

#[cfg(test)]
mod tests;

use std::io::{self, IsTerminal, Read, Write};

use snbt_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use snbt_diagnostic::SourceInfo;
use snbt_parse::ParseError;

pub use check::check_file;
pub use explain::{describe, explain_error};
pub use parse::{parse_file, parse_source};

/// Settings shared by `parse` and `check`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Require the top-level value to be a compound.
    pub compound: bool,
    pub color: ColorMode,
}

impl Options {
    /// Apply one `--flag`. Returns `Err` with a message for unknown flags.
    pub fn apply_flag(&mut self, flag: &str) -> Result<(), String> {
        if flag == "--compound" {
            self.compound = true;
        } else if let Some(mode) = flag.strip_prefix("--color=") {
            self.color = mode.parse()?;
        } else {
            return Err(format!("unknown option `{flag}`"));
        }
        Ok(())
    }
}

/// Read a whole input. `-` is stdin.
pub fn read_source(path: &str) -> io::Result<SourceInfo> {
    let content = if path == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        content
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(SourceInfo::new(path, content))
}

/// Render `error` against `source` into `writer`.
pub fn report<W: Write>(
    writer: W,
    error: &ParseError,
    source: &SourceInfo,
    color: ColorMode,
    is_tty: bool,
) {
    let mut emitter = TerminalEmitter::with_color_mode(writer, color, is_tty);
    emitter.emit(&error.to_diagnostic(), source);
    emitter.flush();
}

fn report_to_stderr(error: &ParseError, source: &SourceInfo, color: ColorMode) {
    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    report(stderr.lock(), error, source, color, is_tty);
}

/// Read `path`, printing the failure if it cannot be read.
fn load(path: &str) -> Option<SourceInfo> {
    match read_source(path) {
        Ok(source) => Some(source),
        Err(error) => {
            eprintln!("error: cannot read '{path}': {error}");
            None
        }
    }
}
