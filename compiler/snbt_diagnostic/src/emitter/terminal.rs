//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support:
//!
//! ```text
//! error[E1016]: leading zero not allowed
//!   --> input.snbt:1:3
//!    |
//!  1 | 00
//!    |   ^
//!    = help: expected one of: e, E, ...
//! ```

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, SourceInfo};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the output is a TTY.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!("unknown color mode `{other}`")),
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> TerminalEmitter<io::Stderr> {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic, source: &SourceInfo) {
        let table = LineOffsetTable::build(&source.content);
        let (line, col) = table.offset_to_line_col(&source.content, diagnostic.position);
        let gutter = " ".repeat(line.to_string().len());

        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        let code = format!("[{}]", diagnostic.code);
        self.write_colored(&code, colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        self.write_colored(&format!("{gutter}--> "), colors::GUTTER);
        let _ = writeln!(self.writer, "{}:{line}:{col}", source.path);

        if let Some(text) = table.line_text(&source.content, line) {
            self.write_colored(&format!("{gutter} |"), colors::GUTTER);
            let _ = writeln!(self.writer);
            self.write_colored(&format!("{line} | "), colors::GUTTER);
            let _ = writeln!(self.writer, "{text}");
            self.write_colored(&format!("{gutter} | "), colors::GUTTER);
            let _ = write!(self.writer, "{}", " ".repeat(col - 1));
            self.write_colored("^", colors::ERROR);
            let _ = writeln!(self.writer);
        }

        for note in &diagnostic.notes {
            self.write_colored(&format!("{gutter} = "), colors::GUTTER);
            let _ = writeln!(self.writer, "note: {note}");
        }

        if !diagnostic.suggestions.is_empty() {
            self.write_colored(&format!("{gutter} = "), colors::GUTTER);
            self.write_colored("help", colors::HELP);
            let _ = writeln!(
                self.writer,
                ": expected one of: {}",
                diagnostic.suggestions.join(", ")
            );
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests;
