//! Error types for sequence generation and sorting.

/// Error type for recurrence sequence construction and checked formulas.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// A required argument was missing or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A checked formula overflowed while producing the given position.
    #[error("arithmetic overflow at position {position}")]
    Overflow {
        /// Zero-based sequence position that could not be produced.
        position: usize,
    },
}

impl SeqError {
    /// Whether this error was raised by argument validation.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Error type for keyed sorting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// A required argument was missing.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The key at `index` is undefined.
    #[error("invalid argument: key at index {index} is undefined")]
    UndefinedKey {
        /// Position of the offending key in the collection.
        index: usize,
    },
}

impl SortError {
    /// Whether this error was raised by argument validation.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::UndefinedKey { .. })
    }
}
