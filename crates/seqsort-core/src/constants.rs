//! Defaults and exit codes shared by the library and the binary.

/// Formula used when none is requested.
pub const DEFAULT_FORMULA: &str = "add";

/// Comparer used when none is requested.
pub const DEFAULT_COMPARER: &str = "length-then-first";

/// Suffix selecting descending order in a comparer spec (`sum:desc`).
pub const DESCENDING_SUFFIX: &str = ":desc";

/// Number of leading/trailing digits kept when a value is truncated for display.
pub const DISPLAY_EDGE_DIGITS: usize = 50;

/// Exit codes for the `seqsort` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, parse failure, overflow).
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid argument or configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
