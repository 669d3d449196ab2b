//! # primecalc-orchestration
//!
//! Generator selection, timed execution, and cross-method result analysis.

pub mod interfaces;
pub mod orchestrator;
pub mod selection;

pub use interfaces::{GenerationResult, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_generations};
pub use selection::get_generators_to_run;
