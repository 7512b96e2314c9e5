//! Stack growth for recursive rule evaluation.
//!
//! SNBT literals nest without limit (`[[[[...]]]]`), and every nesting level
//! costs several frames of rule evaluation. Wrapping each named-rule
//! evaluation in [`ensure_sufficient_stack`] keeps such inputs from
//! overflowing the native stack.
//!
//! - **Native targets**: grows the stack on demand through `stacker`.
//! - **WASM targets**: plain passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn parse_rule(&mut self, entry: Entry<T>) -> Option<T> {
///     ensure_sufficient_stack(|| rule.parse(self))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
