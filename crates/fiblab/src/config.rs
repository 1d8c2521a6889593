//! Application configuration from CLI flags and environment.

use clap::Parser;

use fiblab_core::constants::DEFAULT_INPUT;

/// fiblab — compare Fibonacci computation strategies.
#[derive(Parser, Debug)]
#[command(name = "fiblab", version, about, allow_negative_numbers = true)]
pub struct AppConfig {
    /// Fibonacci index to compute (0 to 45).
    ///
    /// Parsed as a signed integer so out-of-range values are rejected by
    /// the application with a proper message rather than by the parser.
    #[arg(value_name = "N", default_value_t = DEFAULT_INPUT, env = "FIBLAB_N")]
    pub n: i64,

    /// Strategy to run: naive, memoized, iterative, or all.
    #[arg(long, default_value = "all")]
    pub strategy: String,

    /// Quiet mode (only output the computed values).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
