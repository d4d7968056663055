//! Error handling and exit codes.

use seqsort_cli::input::InputError;
use seqsort_core::constants::exit_codes;
use seqsort_core::{SeqError, SortError};

/// Map a run failure to the process exit code.
///
/// Invalid arguments (bad counts, missing seeds, unknown formulas or
/// comparers, undefined rows) exit with [`exit_codes::ERROR_CONFIG`];
/// everything else, overflow included, with [`exit_codes::ERROR_GENERIC`].
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let code = if let Some(err) = err.downcast_ref::<SeqError>() {
        handle_sequence_error(err)
    } else if let Some(err) = err.downcast_ref::<SortError>() {
        handle_sort_error(err)
    } else if let Some(InputError::Number { .. } | InputError::Json(_)) =
        err.downcast_ref::<InputError>()
    {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_GENERIC
    };
    u8::try_from(code).unwrap_or(1)
}

fn handle_sequence_error(err: &SeqError) -> i32 {
    match err {
        SeqError::InvalidArgument(_) => exit_codes::ERROR_CONFIG,
        SeqError::Overflow { .. } => exit_codes::ERROR_GENERIC,
    }
}

fn handle_sort_error(err: &SortError) -> i32 {
    match err {
        SortError::InvalidArgument(_) | SortError::UndefinedKey { .. } => exit_codes::ERROR_CONFIG,
    }
}
