//! Application entry point and dispatch.

use anyhow::Result;

use fiblab_cli::presenter::CLIResultPresenter;
use fiblab_cli::ui;
use fiblab_core::constants::MAX_INPUT;
use fiblab_orchestration::interfaces::ResultPresenter;
use fiblab_orchestration::orchestrator::{execute_strategies, verify_agreement};
use fiblab_orchestration::strategy_selection::strategies_to_run;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fiblab_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    // Input bound check before any computation
    if config.n < 0 || config.n > MAX_INPUT {
        anyhow::bail!("n must be between 0 and {MAX_INPUT}, got {}", config.n);
    }
    let n = u64::try_from(config.n)?;

    let strategies = strategies_to_run(&config.strategy)?;

    if !config.quiet {
        ui::print_header(&format!("Calculating Fibonacci({n})"));
        println!();
    }

    let runs = execute_strategies(&strategies, n);

    if runs.len() > 1 {
        if let Err(e) = verify_agreement(&runs) {
            eprintln!("Warning: {e}");
        }
    }

    let presenter = CLIResultPresenter::new(config.quiet);
    for run in &runs {
        presenter.present_result(run, n);
    }
    if runs.len() > 1 {
        presenter.present_comparison(&runs);
    }

    Ok(())
}
