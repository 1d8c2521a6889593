//! Sequential measurement passes and result analysis.

use std::time::{Duration, Instant};

use tracing::debug;

use fiblab_core::memoized::MemoCache;
use fiblab_core::stats::RunStats;
use fiblab_core::strategy::{FibError, Strategy};

use crate::interfaces::MeasuredRun;

/// Time a single invocation on the monotonic clock.
///
/// Returns the closure's value alongside the elapsed wall-clock time from
/// just before to just after the call.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Run one strategy as a measurement pass.
///
/// Each pass gets freshly constructed counters and cache, so statistics
/// from one pass can never leak into the next.
#[must_use]
pub fn execute_strategy(strategy: Strategy, n: u64) -> MeasuredRun {
    let mut stats = RunStats::new();
    let mut cache = MemoCache::new();

    let (outcome, duration) = measure(|| strategy.run(n, &mut cache, &mut stats));
    debug!(strategy = strategy.name(), n, ?duration, "measurement pass complete");

    MeasuredRun {
        strategy,
        outcome,
        duration,
        stats,
    }
}

/// Run each strategy in sequence, each against its own fresh state.
#[must_use]
pub fn execute_strategies(strategies: &[Strategy], n: u64) -> Vec<MeasuredRun> {
    strategies
        .iter()
        .map(|&strategy| execute_strategy(strategy, n))
        .collect()
}

/// Check that all successful runs computed the same value.
///
/// Vacuously satisfied when fewer than two runs succeeded.
///
/// # Errors
///
/// Returns [`FibError::Mismatch`] when two successful runs disagree.
pub fn verify_agreement(runs: &[MeasuredRun]) -> Result<(), FibError> {
    let mut values = runs.iter().filter_map(|run| run.outcome.as_ref().ok());

    let Some(first) = values.next() else {
        return Ok(());
    };
    for value in values {
        if value != first {
            return Err(FibError::Mismatch);
        }
    }
    Ok(())
}
