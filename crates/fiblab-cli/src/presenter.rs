//! CLI result presenter.

use fiblab_core::stats::RunStats;
use fiblab_core::strategy::Strategy;
use fiblab_orchestration::interfaces::{MeasuredRun, ResultPresenter};

use crate::output::{format_number, format_seconds};

/// Presents measurement passes and their statistics on stdout.
pub struct CLIResultPresenter {
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn print_statistics(stats: &RunStats) {
        println!("Statistics:");
        println!("  Recursive calls: {}", format_number(stats.recursive_calls));
        println!("  Cache hits: {}", format_number(stats.cache_hits));
        println!("  Cache misses: {}", format_number(stats.cache_misses));
        // Hit rate is undefined until the cache has seen any lookup.
        if let Some(rate) = stats.hit_rate() {
            println!("  Cache hit rate: {rate:.2}%");
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, run: &MeasuredRun, n: u64) {
        let value = match &run.outcome {
            Ok(value) => *value,
            Err(error) => {
                self.present_error(&error.to_string());
                return;
            }
        };

        if self.quiet {
            println!("{value}");
            return;
        }

        println!("Algorithm: {}", run.strategy.name());
        println!("F({n}) = {value}");
        println!("Time: {} seconds", format_seconds(run.duration));
        match run.strategy {
            Strategy::Naive => {
                println!("Calls: {}", format_number(run.stats.recursive_calls));
            }
            Strategy::Memoized => Self::print_statistics(&run.stats),
            Strategy::Iterative => {}
        }
        println!();
    }

    fn present_comparison(&self, runs: &[MeasuredRun]) {
        if self.quiet {
            return;
        }

        println!("Comparison Results:");
        println!("{:-<60}", "");
        for run in runs {
            let status = if run.outcome.is_err() { "ERROR" } else { "OK" };
            println!(
                "  {:<20} {:>12}s [{}]",
                run.strategy.name(),
                format_seconds(run.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
