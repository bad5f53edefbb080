//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

/// Number of values shown before a list is truncated.
const MAX_SHOWN_VALUES: usize = 20;

/// Format values as a space-separated list, truncating long lists.
#[must_use]
pub fn format_values(values: &[u64], verbose: bool) -> String {
    if !verbose && values.len() > MAX_SHOWN_VALUES {
        let half = MAX_SHOWN_VALUES / 2;
        format!(
            "{} ... {} ({} values)",
            join(&values[..half]),
            join(&values[values.len() - half..]),
            format_number(values.len() as u64)
        )
    } else {
        join(values)
    }
}

fn join(values: &[u64]) -> String {
    values
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
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

/// Write rendered output to a file, with a trailing newline.
pub fn write_to_file(path: &str, rendered: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{rendered}")?;
    Ok(())
}
