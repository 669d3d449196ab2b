//! Error handling and exit codes.

use primecalc_core::constants::exit_codes;
use primecalc_core::PrimeError;

/// Map an application error to the tool's exit code.
///
/// Parse errors never reach here; clap reports them itself with its usage
/// exit code, which matches `exit_codes::ERROR_PARSE`.
pub fn handle_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PrimeError>() {
        Some(PrimeError::Param(_)) => exit_codes::ERROR_PARAM,
        Some(PrimeError::Allocation(_)) => exit_codes::ERROR_MEMORY,
        Some(PrimeError::Mismatch) => exit_codes::ERROR_MISMATCH,
        None => exit_codes::ERROR_GENERIC,
    }
}
