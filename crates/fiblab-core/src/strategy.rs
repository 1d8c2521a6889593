//! Strategy dispatch and the shared error type.

use crate::iterative::fib_iterative;
use crate::memoized::{fib_memoized, MemoCache};
use crate::naive::fib_naive;
use crate::stats::RunStats;

/// Error type for Fibonacci computations and strategy selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// Memoized input outside the cache's index range.
    #[error("n must be between 0 and {max}, got {n}", max = .capacity - 1)]
    CacheBounds {
        /// The rejected input.
        n: i64,
        /// Capacity of the cache that rejected it.
        capacity: usize,
    },

    /// Configuration error (unknown strategy name).
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different strategies don't match.
    #[error("result mismatch between strategies")]
    Mismatch,
}

/// The comparable computation strategies.
///
/// The deliberately defective variant ([`crate::buggy::fib_buggy`]) is not
/// dispatched here; it is a standalone debugging exercise and is never run
/// by the demonstration sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Plain two-term recursion, exponential time.
    Naive,
    /// Recursion over a lazily filled cache.
    Memoized,
    /// Rolling-accumulator loop, the performance baseline.
    Iterative,
}

impl Strategy {
    /// Name of this strategy.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Naive => "NaiveRecursive",
            Strategy::Memoized => "MemoizedRecursive",
            Strategy::Iterative => "Iterative",
        }
    }

    /// All strategies, in demonstration order.
    #[must_use]
    pub fn all() -> [Strategy; 3] {
        [Strategy::Naive, Strategy::Memoized, Strategy::Iterative]
    }

    /// Run this strategy against explicit pass state.
    ///
    /// Only the memoized strategy touches `cache`; only the recursive
    /// strategies touch `stats`.
    ///
    /// # Errors
    ///
    /// Propagates [`FibError::CacheBounds`] from the memoized strategy.
    pub fn run(
        self,
        n: u64,
        cache: &mut MemoCache,
        stats: &mut RunStats,
    ) -> Result<u64, FibError> {
        match self {
            Strategy::Naive => Ok(fib_naive(n, stats)),
            Strategy::Memoized => {
                let signed = i64::try_from(n).unwrap_or(i64::MAX);
                fib_memoized(signed, cache, stats)
            }
            Strategy::Iterative => Ok(fib_iterative(n)),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(strategy: Strategy, n: u64) -> Result<u64, FibError> {
        let mut cache = MemoCache::new();
        let mut stats = RunStats::new();
        strategy.run(n, &mut cache, &mut stats)
    }

    #[test]
    fn names() {
        assert_eq!(Strategy::Naive.name(), "NaiveRecursive");
        assert_eq!(Strategy::Memoized.name(), "MemoizedRecursive");
        assert_eq!(Strategy::Iterative.name(), "Iterative");
    }

    #[test]
    fn all_in_demonstration_order() {
        assert_eq!(
            Strategy::all(),
            [Strategy::Naive, Strategy::Memoized, Strategy::Iterative]
        );
    }

    #[test]
    fn all_strategies_agree_on_f10() {
        for strategy in Strategy::all() {
            assert_eq!(run(strategy, 10), Ok(55), "{strategy}");
        }
    }

    #[test]
    fn memoized_dispatch_rejects_out_of_range() {
        assert!(matches!(
            run(Strategy::Memoized, 100),
            Err(FibError::CacheBounds { n: 100, .. })
        ));
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Strategy::Iterative.to_string(), "Iterative");
    }

    #[test]
    fn error_display() {
        let err = FibError::Config("unknown strategy: fast".into());
        assert_eq!(err.to_string(), "configuration error: unknown strategy: fast");
        assert_eq!(
            FibError::Mismatch.to_string(),
            "result mismatch between strategies"
        );
    }
}
