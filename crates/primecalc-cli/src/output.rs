//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

/// Number of primes printed per line.
pub const PRIMES_PER_LINE: usize = 10;

/// Format the prime list, `PRIMES_PER_LINE` values per line, with a
/// trailing newline after the last partial line.
#[must_use]
pub fn format_primes(primes: &[u32]) -> String {
    let mut out = String::new();
    for chunk in primes.chunks(PRIMES_PER_LINE) {
        let line: Vec<String> = chunk.iter().map(ToString::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write the formatted prime list to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, primes: &[u32]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write!(file, "{}", format_primes(primes))?;
    Ok(())
}
