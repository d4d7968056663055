//! CLI output formatting.

use std::fmt::Display;
use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;

use seqsort_core::constants::DISPLAY_EDGE_DIGITS;

/// Format a term for display, truncating long values unless `verbose`.
#[must_use]
pub fn format_term(value: &impl Display, verbose: bool) -> String {
    let s = value.to_string();
    let digits = s.trim_start_matches('-').len();
    if !verbose && digits > 2 * DISPLAY_EDGE_DIGITS {
        format!(
            "{}...{} ({digits} digits)",
            &s[..s.len() - digits + DISPLAY_EDGE_DIGITS],
            &s[s.len() - DISPLAY_EDGE_DIGITS..],
        )
    } else {
        s
    }
}

/// Format a row as `[a, b, c]`.
#[must_use]
pub fn format_row(row: &[i64]) -> String {
    let values: Vec<String> = row.iter().map(ToString::to_string).collect();
    format!("[{}]", values.join(", "))
}

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: usize) -> String {
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

/// Render a report as pretty-printed JSON.
///
/// # Errors
///
/// Returns a serialization error if the report cannot be encoded.
pub fn to_json(report: &impl Serialize) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Write rendered output to a file. Empty output leaves the file empty.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, contents: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    if !contents.is_empty() {
        writeln!(file, "{contents}")?;
    }
    Ok(())
}
