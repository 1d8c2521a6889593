//! Memoized recursive Fibonacci over a fixed-capacity cache.

use crate::constants::MEMO_CAPACITY;
use crate::stats::RunStats;
use crate::strategy::FibError;

/// Fixed-capacity memoization cache indexed by `n`.
///
/// Slots start empty and are filled lazily as values are computed. A
/// filled slot holds the true F(n) and is never overwritten with a
/// different value. Lifetime is one measurement pass; passes construct a
/// fresh cache instead of resetting a shared one.
#[derive(Debug, Clone)]
pub struct MemoCache {
    slots: Vec<Option<u64>>,
}

impl MemoCache {
    /// Create an empty cache with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MEMO_CAPACITY)
    }

    /// Create an empty cache with an explicit capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Number of slots, filled or not.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of filled slots.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    fn get(&self, index: usize) -> Option<u64> {
        self.slots[index]
    }

    fn insert(&mut self, index: usize, value: u64) {
        // Idempotent fill: a slot never changes once populated.
        debug_assert!(self.slots[index].is_none() || self.slots[index] == Some(value));
        self.slots[index] = Some(value);
    }
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute F(n) by recursion over a lazily filled cache.
///
/// A populated slot counts as a hit and returns immediately; an empty
/// slot counts as a miss, computes `F(n-1) + F(n-2)` through the same
/// path, and stores the result before returning. `n <= 1` returns `n`
/// without touching the cache or the counters.
///
/// # Errors
///
/// Returns [`FibError::CacheBounds`] when `n` is negative or at/beyond
/// the cache capacity. The cache and counters are left untouched.
pub fn fib_memoized(
    n: i64,
    cache: &mut MemoCache,
    stats: &mut RunStats,
) -> Result<u64, FibError> {
    let index = match usize::try_from(n) {
        Ok(i) if i < cache.capacity() => i,
        _ => {
            return Err(FibError::CacheBounds {
                n,
                capacity: cache.capacity(),
            })
        }
    };

    if index <= 1 {
        return Ok(index as u64);
    }

    if let Some(value) = cache.get(index) {
        stats.cache_hits += 1;
        return Ok(value);
    }

    stats.cache_misses += 1;
    let value = fib_memoized(n - 1, cache, stats)? + fib_memoized(n - 2, cache, stats)?;
    cache.insert(index, value);
    Ok(value)
}
