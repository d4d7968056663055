//! # seqsort-core
//!
//! Core library for SeqSort: lazy two-term recurrence sequences and an
//! exhaustive comparator-driven bubble sort over integer rows.

pub mod comparers;
pub mod constants;
pub mod error;
pub mod formulas;
pub mod registry;
pub mod sequence;
pub mod sort;

// Re-exports
pub use comparers::{ByMax, ByMin, BySum, CountingComparer, LengthThenFirst, Reversed};
pub use constants::{exit_codes, DEFAULT_COMPARER, DEFAULT_FORMULA};
pub use error::{SeqError, SortError};
pub use formulas::{Additive, Linear, Multiplicative, Subtractive};
pub use registry::{
    ComparerFactory, DefaultComparerFactory, DefaultFormulaFactory, FormulaFactory,
};
pub use sequence::{
    checked_generate, generate, generate_with, try_generate, CheckedFormula, CheckedSequence,
    FnFormula, FormulaCalculator, RecurrenceSequence, SequenceBuilder, TryRecurrenceSequence,
};
pub use sort::{
    checked_sort, checked_sort_counted, sort, sort_by, sort_counted, FnComparer, Key,
    KeyComparer, SortStats,
};
