//! Stack safety for the recursive stages of the pipeline.
//!
//! The parser and the evaluator both recurse once per nesting level, so
//! input like `((((...))))` or `--------1` would otherwise recurse as deep
//! as the input is long. Wrapping the recursive entry points in
//! [`ensure_sufficient_stack`] grows the stack on demand instead.
//!
//! - **Red zone**: 100KB. If less than this remains, the stack is grown.
//! - **Growth size**: 1MB per growth.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
