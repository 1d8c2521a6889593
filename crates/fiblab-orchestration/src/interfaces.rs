//! Orchestration interfaces.

use std::time::Duration;

use fiblab_core::stats::RunStats;
use fiblab_core::strategy::{FibError, Strategy};

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present one measurement pass.
    fn present_result(&self, run: &MeasuredRun, n: u64);

    /// Present a comparison of several passes.
    fn present_comparison(&self, runs: &[MeasuredRun]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single measurement pass.
#[derive(Debug, Clone)]
pub struct MeasuredRun {
    /// Strategy that ran.
    pub strategy: Strategy,
    /// The computed value or a structured error.
    pub outcome: Result<u64, FibError>,
    /// Wall-clock duration of the pass.
    pub duration: Duration,
    /// Counters recorded during the pass.
    pub stats: RunStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measured_run_carries_pass_state() {
        let run = MeasuredRun {
            strategy: Strategy::Memoized,
            outcome: Ok(55),
            duration: Duration::from_micros(3),
            stats: RunStats {
                cache_hits: 7,
                cache_misses: 9,
                ..RunStats::new()
            },
        };
        assert_eq!(run.strategy.name(), "MemoizedRecursive");
        assert_eq!(run.outcome, Ok(55));
        assert_eq!(run.stats.hit_rate().map(f64::round), Some(44.0));
    }
}
