//! Presentation interfaces and report types.

use std::time::Duration;

use serde::Serialize;

use seqsort_core::sort::{Key, SortStats};

/// A generated sequence ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct SequenceReport {
    /// Formula spec the sequence was generated with.
    pub formula: String,
    /// Requested number of terms.
    pub count: usize,
    /// Terms rendered as decimal strings (values may exceed `u64`).
    pub terms: Vec<String>,
}

/// A sorted key collection ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct SortReport {
    /// Comparer spec the rows were sorted with.
    pub comparer: String,
    /// Rows in sorted order.
    pub rows: Vec<Key>,
    /// Work performed by the sort.
    pub stats: SortStats,
}

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present a generated sequence.
    fn present_sequence(&self, report: &SequenceReport, duration: Duration);

    /// Present a sorted collection.
    fn present_sorted(&self, report: &SortReport, duration: Duration);

    /// Present an error.
    fn present_error(&self, error: &str);
}
