//! Diagnostic emitters.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::{Diagnostic, SourceInfo};

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic against its source.
    fn emit(&mut self, diagnostic: &Diagnostic, source: &SourceInfo);

    /// Flush any buffered output.
    fn flush(&mut self);
}
