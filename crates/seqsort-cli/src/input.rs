//! Row input parsing.
//!
//! Rows arrive either as JSON (`[[77, 17], [17, 32]]`) or inline
//! (`"77,17;17,32"`). Both forms can carry undefined rows (`null`), which are
//! kept as `None` so the checked sort can reject them by index.

use std::io::{self, Read};
use std::num::ParseIntError;

use seqsort_core::sort::Key;
use tracing::debug;

/// Error type for row input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input could not be read.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid JSON rows.
    #[error("invalid JSON rows: {0}")]
    Json(#[from] serde_json::Error),

    /// An inline value is not an integer.
    #[error("invalid integer '{value}' in row {row}: {source}")]
    Number {
        row: usize,
        value: String,
        source: ParseIntError,
    },
}

/// Parse JSON rows. A top-level `null` yields `None` (undefined collection).
pub fn parse_json_rows(text: &str) -> Result<Option<Vec<Option<Key>>>, InputError> {
    let rows: Option<Vec<Option<Key>>> = serde_json::from_str(text)?;
    debug!(rows = rows.as_ref().map(Vec::len), "Parsed JSON rows");
    Ok(rows)
}

/// Parse inline rows: rows separated by `;`, values by `,` or whitespace.
///
/// The literal `null` marks an undefined row; an empty segment is an empty row.
pub fn parse_inline_rows(text: &str) -> Result<Vec<Option<Key>>, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split(';')
        .enumerate()
        .map(|(row, segment)| {
            let segment = segment.trim();
            if segment == "null" {
                return Ok(None);
            }
            segment
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|v| !v.is_empty())
                .map(|value| {
                    value.parse::<i64>().map_err(|source| InputError::Number {
                        row,
                        value: value.to_string(),
                        source,
                    })
                })
                .collect::<Result<Key, _>>()
                .map(Some)
        })
        .collect()
}

/// Read the whole input from a file path, or from stdin when the path is `-`.
pub fn read_input(path: &str) -> Result<String, InputError> {
    debug!(path, "Reading row input");
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
