//! Stack growth for Condor's recursive passes.
//!
//! The parser recurses once per right-chained binary operator and per nested
//! body, and the runner maps every Condor function call onto a native call.
//! A program can therefore drive either pass arbitrarily deep. Wrapping the
//! recursive entry points in [`ensure_sufficient_stack`] moves that limit from
//! the host thread's stack size to the runner's context pool, which is where
//! Condor reports "too deep" (as `ContextPoolExhausted`).
//!
//! On `wasm32` the closure is called directly.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn parse_expression(&mut self) -> Result<NodeId, ParseError> {
///     ensure_sufficient_stack(|| self.parse_expression_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
