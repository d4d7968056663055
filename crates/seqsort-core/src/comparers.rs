//! Built-in comparers over integer rows.
//!
//! All comparers accept any key that can be viewed as `[i64]`, so they work
//! on `Vec<i64>`, arrays and slices alike. Rows without elements order before
//! rows with elements wherever the criterion needs at least one element.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use crate::sort::KeyComparer;

/// Orders by row length, then by first element.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthThenFirst;

impl<K: AsRef<[i64]>> KeyComparer<K> for LengthThenFirst {
    fn compare(&self, left: &K, right: &K) -> Ordering {
        let (left, right) = (left.as_ref(), right.as_ref());
        left.len()
            .cmp(&right.len())
            .then_with(|| left.first().cmp(&right.first()))
    }

    fn name(&self) -> &'static str {
        "length-then-first"
    }
}

/// Orders by the sum of row elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct BySum;

impl BySum {
    fn sum(row: &[i64]) -> i128 {
        row.iter().map(|&v| i128::from(v)).sum()
    }
}

impl<K: AsRef<[i64]>> KeyComparer<K> for BySum {
    fn compare(&self, left: &K, right: &K) -> Ordering {
        Self::sum(left.as_ref()).cmp(&Self::sum(right.as_ref()))
    }

    fn name(&self) -> &'static str {
        "sum"
    }
}

/// Orders by the largest row element.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByMax;

impl<K: AsRef<[i64]>> KeyComparer<K> for ByMax {
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.as_ref().iter().max().cmp(&right.as_ref().iter().max())
    }

    fn name(&self) -> &'static str {
        "max"
    }
}

/// Orders by the smallest row element.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByMin;

impl<K: AsRef<[i64]>> KeyComparer<K> for ByMin {
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.as_ref().iter().min().cmp(&right.as_ref().iter().min())
    }

    fn name(&self) -> &'static str {
        "min"
    }
}

/// Inverts the order of the wrapped comparer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<C> {
    inner: C,
}

impl<C> Reversed<C> {
    /// Wrap `inner`, inverting its order.
    #[must_use]
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<K, C: KeyComparer<K>> KeyComparer<K> for Reversed<C> {
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self.inner.compare(right, left)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Counts invocations of the wrapped comparer.
#[derive(Debug, Default)]
pub struct CountingComparer<C> {
    inner: C,
    calls: AtomicUsize,
}

impl<C> CountingComparer<C> {
    /// Wrap `inner` with a counter starting at zero.
    #[must_use]
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of comparisons performed so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.load(AtomicOrdering::Relaxed)
    }

    /// Reset the counter to zero.
    pub fn reset(&self) {
        self.calls.store(0, AtomicOrdering::Relaxed);
    }
}

impl<K, C: KeyComparer<K>> KeyComparer<K> for CountingComparer<C> {
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self.calls.fetch_add(1, AtomicOrdering::Relaxed);
        self.inner.compare(left, right)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
