//! Error handling and exit codes.

use fiblab_core::constants::exit_codes;
use fiblab_core::strategy::FibError;

/// Map an application error to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<FibError>() {
        Some(FibError::Config(_)) => exit_codes::ERROR_CONFIG,
        _ => exit_codes::ERROR_GENERIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_code() {
        let err = anyhow::Error::new(FibError::Config("unknown strategy: fast".into()));
        assert_eq!(exit_code(&err), 4);
    }

    #[test]
    fn cache_bounds_is_generic() {
        let err = anyhow::Error::new(FibError::CacheBounds {
            n: 100,
            capacity: 100,
        });
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn plain_error_is_generic() {
        let err = anyhow::anyhow!("n must be between 0 and 45, got 46");
        assert_eq!(exit_code(&err), 1);
    }
}
