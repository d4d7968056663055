//! Shell completion generation.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

/// Name the completion script registers for.
pub const BIN_NAME: &str = "seqsort";

/// Generate a completion script for the CLI described by `C`.
pub fn generate_completion<C: CommandFactory>(shell: Shell, out: &mut dyn io::Write) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}
