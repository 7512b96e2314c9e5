//! Diagnostics for SNBT parsing.
//!
//! - Error codes for searchability (`snbt explain E1016`)
//! - Clear messages (what went wrong)
//! - A byte position (where it went wrong)
//! - Suggestions (what could have come next)

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, SourceInfo};
pub use error_code::ErrorCode;
