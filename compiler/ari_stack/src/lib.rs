//! Stack safety for recursive tree walks.
//!
//! Expression trees are built by nesting operators, so a long chain such as
//! `((((a + 1) + 1) + 1) ...)` produces a tree whose depth equals the chain
//! length. The evaluator and the printer both walk trees recursively; every
//! recursive step goes through [`ensure_sufficient_stack`], which grows the
//! stack on demand instead of overflowing.
//!
//! On `wasm32` the call is a passthrough.

/// Remaining stack below which a new segment is allocated (100 KiB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1 MiB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
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

#[cfg(test)]
mod tests;
