//! Instrumentation counters for a single measurement pass.

/// Counters recorded while a strategy runs.
///
/// Constructed fresh for every measurement pass, so no state leaks from
/// one pass into the next. Only the strategy currently executing mutates
/// the counters; the report printer reads them afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Recursive invocations (naive strategy, including sub-calls).
    pub recursive_calls: u64,
    /// Cache lookups that found a stored value (memoized strategy).
    pub cache_hits: u64,
    /// Cache lookups that had to compute (memoized strategy).
    pub cache_misses: u64,
}

impl RunStats {
    /// Create zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache hit rate as a percentage, or `None` before any cache activity.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> Option<f64> {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            return None;
        }
        Some(100.0 * self.cache_hits as f64 / total as f64)
    }
}
