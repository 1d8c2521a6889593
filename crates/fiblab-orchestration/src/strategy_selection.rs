//! Strategy selection logic.

use fiblab_core::strategy::{FibError, Strategy};

/// Resolve a `--strategy` flag value into the strategies to run.
///
/// # Errors
///
/// Returns [`FibError::Config`] for names other than `all`, `naive`,
/// `memoized`, or `iterative`.
pub fn strategies_to_run(name: &str) -> Result<Vec<Strategy>, FibError> {
    match name {
        "all" => Ok(Strategy::all().to_vec()),
        "naive" => Ok(vec![Strategy::Naive]),
        "memoized" | "memo" => Ok(vec![Strategy::Memoized]),
        "iterative" | "iter" => Ok(vec![Strategy::Iterative]),
        other => Err(FibError::Config(format!("unknown strategy: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all() {
        let strategies = strategies_to_run("all").unwrap();
        assert_eq!(strategies.len(), 3);
    }

    #[test]
    fn select_single() {
        let strategies = strategies_to_run("memoized").unwrap();
        assert_eq!(strategies, vec![Strategy::Memoized]);
    }

    #[test]
    fn select_short_alias() {
        assert_eq!(strategies_to_run("iter").unwrap(), vec![Strategy::Iterative]);
        assert_eq!(strategies_to_run("memo").unwrap(), vec![Strategy::Memoized]);
    }

    #[test]
    fn select_unknown() {
        let result = strategies_to_run("fast");
        assert!(matches!(result, Err(FibError::Config(_))));
    }
}
