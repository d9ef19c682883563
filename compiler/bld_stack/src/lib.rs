//! Stack growth guard for deeply nested build descriptions.
//!
//! The parser descends once per nesting level of `(`, `[`, `{`, `if` and
//! `foreach`, and each level walks the whole precedence cascade. A build
//! file with a few thousand nested brackets would exhaust a default thread
//! stack, so every recursive entry point goes through
//! [`ensure_sufficient_stack`].
//!
//! On native targets the stack is grown with `stacker`; on `wasm32` the
//! guard is a plain call.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// ```text
/// fn expression(&mut self) -> Result<Option<NodeId>, ParseError> {
///     ensure_sufficient_stack(|| self.assignment())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// `wasm32` manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
