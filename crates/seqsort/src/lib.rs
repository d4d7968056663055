//! SeqSort library: application logic for the `seqsort` binary.

pub mod app;
pub mod config;
pub mod errors;
