//! PrimeCalc-rs — trial-division prime sequence calculator.

use std::process::ExitCode;

use primecalc_lib::{app, config, errors};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            let code = errors::handle_error(&err);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
