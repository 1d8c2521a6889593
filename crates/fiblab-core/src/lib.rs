//! # fiblab-core
//!
//! Core library for the fiblab Fibonacci teaching demo. Implements the
//! naive, memoized, and iterative strategies, the deliberately defective
//! variant kept for debugging practice, and the instrumentation state the
//! recursive strategies report through.

pub mod buggy;
pub mod constants;
pub mod iterative;
pub mod memoized;
pub mod naive;
pub mod stats;
pub mod strategy;

// Re-exports
pub use constants::{exit_codes, DEFAULT_INPUT, FIB_TABLE, MAX_INPUT, MEMO_CAPACITY};
pub use memoized::MemoCache;
pub use stats::RunStats;
pub use strategy::{FibError, Strategy};

/// Compute F(n) iteratively.
///
/// Convenience function for simple use cases. For instrumented runs
/// (call counting, cache statistics), dispatch a [`Strategy`] against
/// explicit pass state instead.
///
/// # Example
/// ```
/// assert_eq!(fiblab_core::fibonacci(10), 55);
/// assert_eq!(fiblab_core::fibonacci(0), 0);
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> u64 {
    iterative::fib_iterative(n)
}
