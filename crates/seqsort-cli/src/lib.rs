//! # seqsort-cli
//!
//! Input parsing, output formatting, result presentation and shell completion
//! for the `seqsort` binary.

pub mod completion;
pub mod input;
pub mod interfaces;
pub mod output;
pub mod presenter;
pub mod ui;

pub use interfaces::{ResultPresenter, SequenceReport, SortReport};
pub use presenter::CLIResultPresenter;
