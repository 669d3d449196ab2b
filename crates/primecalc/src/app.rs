//! Application entry point and dispatch.

use anyhow::Result;

use primecalc_cli::output::write_to_file;
use primecalc_cli::presenter::CliResultPresenter;
use primecalc_core::constants::MAX_CAPACITY;
use primecalc_core::registry::DefaultFactory;
use primecalc_core::PrimeError;
use primecalc_orchestration::interfaces::ResultPresenter;
use primecalc_orchestration::orchestrator::{analyze_comparison_results, execute_generations};
use primecalc_orchestration::selection::get_generators_to_run;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        primecalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    // Range check the capacity request. The kernel defines capacity 0 as an
    // empty result, but the tool rejects it as out of policy.
    if config.num_primes == 0 || config.num_primes > MAX_CAPACITY {
        return Err(PrimeError::Param(format!(
            "num-primes must be between 1 and {MAX_CAPACITY}, got {}",
            config.num_primes
        ))
        .into());
    }

    let factory = DefaultFactory::new();
    let generators = get_generators_to_run(&config.method, &factory)?;

    let results = execute_generations(&generators, config.limit, config.num_primes);

    // Cross-validate before presenting anything
    if results.len() > 1 {
        analyze_comparison_results(&results)?;
    }

    // Present results
    let presenter = CliResultPresenter::new(config.verbose, config.quiet);
    for result in &results {
        match &result.outcome {
            Ok(primes) => {
                presenter.present_result(&result.algorithm, config.limit, primes, result.duration);
            }
            Err(error) => presenter.present_error(&error.to_string()),
        }
    }

    // Present comparison if multiple
    if results.len() > 1 {
        presenter.present_comparison(&results);
    }

    // A failed run decides the exit status even after partial output
    if let Some(error) = results.iter().find_map(|r| r.outcome.as_ref().err()) {
        return Err(error.clone().into());
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        if let Some(primes) = results.iter().find_map(|r| r.primes()) {
            write_to_file(path, primes)?;
        }
    }

    Ok(())
}
