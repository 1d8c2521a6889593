//! # fiblab-orchestration
//!
//! Sequential measurement passes, strategy selection, and result analysis.

pub mod interfaces;
pub mod orchestrator;
pub mod strategy_selection;

pub use interfaces::{MeasuredRun, ResultPresenter};
pub use orchestrator::{execute_strategies, execute_strategy, measure, verify_agreement};
pub use strategy_selection::strategies_to_run;
