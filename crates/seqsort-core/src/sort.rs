//! Comparator-driven in-place bubble sort over keyed rows.
//!
//! Every pass scans the full run of adjacent pairs and swaps a pair when the
//! comparer reports `Greater`. There is no early exit and no shrinking
//! window, so a collection of `len >= 1` keys always costs exactly
//! `(len - 1)^2` comparisons. Swaps only happen on a strict `Greater`, which
//! keeps equal keys in their original relative order.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::SortError;

/// One sortable row of integers.
pub type Key = Vec<i64>;

/// Three-way ordering capability over two keys.
pub trait KeyComparer<K>: Send + Sync {
    /// Compare two keys.
    fn compare(&self, left: &K, right: &K) -> Ordering;

    /// Get the name of this comparer.
    fn name(&self) -> &str {
        "comparer"
    }
}

/// Adapter exposing a bare function as a [`KeyComparer`].
#[derive(Clone, Copy)]
pub struct FnComparer<F> {
    f: F,
}

impl<F> FnComparer<F> {
    /// Wrap a `f(left, right) -> Ordering` function.
    #[must_use]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<K, F> KeyComparer<K> for FnComparer<F>
where
    F: Fn(&K, &K) -> Ordering + Send + Sync,
{
    fn compare(&self, left: &K, right: &K) -> Ordering {
        (self.f)(left, right)
    }

    fn name(&self) -> &'static str {
        "fn"
    }
}

impl<K, C: KeyComparer<K> + ?Sized> KeyComparer<K> for &C {
    fn compare(&self, left: &K, right: &K) -> Ordering {
        (**self).compare(left, right)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<K, C: KeyComparer<K> + ?Sized> KeyComparer<K> for Arc<C> {
    fn compare(&self, left: &K, right: &K) -> Ordering {
        (**self).compare(left, right)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<K, C: KeyComparer<K> + ?Sized> KeyComparer<K> for Box<C> {
    fn compare(&self, left: &K, right: &K) -> Ordering {
        (**self).compare(left, right)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Work performed by one sort call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortStats {
    /// Number of outer passes.
    pub passes: usize,
    /// Number of comparer invocations.
    pub comparisons: usize,
    /// Number of adjacent swaps.
    pub swaps: usize,
}

/// Sort `keys` in place and report the work performed.
///
/// If the comparer panics the collection is left partially reordered; it is
/// still a permutation of the input since elements only move by swapping.
pub fn sort_counted<K, C>(keys: &mut [K], comparer: &C) -> SortStats
where
    C: KeyComparer<K> + ?Sized,
{
    let len = keys.len();
    let mut stats = SortStats::default();
    debug!(len, comparer = comparer.name(), "Bubble sort started");

    for pass in 0..len.saturating_sub(1) {
        let mut swaps = 0;
        for j in 0..len - 1 {
            stats.comparisons += 1;
            if comparer.compare(&keys[j], &keys[j + 1]) == Ordering::Greater {
                keys.swap(j, j + 1);
                swaps += 1;
            }
        }
        trace!(pass, swaps, "Bubble sort pass complete");
        stats.passes += 1;
        stats.swaps += swaps;
    }

    debug!(
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        "Bubble sort finished"
    );
    stats
}

/// Sort `keys` in place with a [`KeyComparer`].
///
/// # Example
/// ```
/// use seqsort_core::comparers::LengthThenFirst;
/// use seqsort_core::sort::sort;
/// let mut rows = vec![vec![77, 17], vec![17, 32]];
/// sort(&mut rows, &LengthThenFirst);
/// assert_eq!(rows, [vec![17, 32], vec![77, 17]]);
/// ```
pub fn sort<K, C>(keys: &mut [K], comparer: &C)
where
    C: KeyComparer<K> + ?Sized,
{
    sort_counted(keys, comparer);
}

/// Sort `keys` in place with a bare comparison function.
pub fn sort_by<K, F>(keys: &mut [K], compare: F)
where
    F: Fn(&K, &K) -> Ordering + Send + Sync,
{
    sort(keys, &FnComparer::new(compare));
}

/// Sort a collection whose presence, rows and comparer arrive unvalidated.
///
/// All arguments are checked before any row moves: a missing collection or
/// comparer fails with [`SortError::InvalidArgument`], and the first missing
/// row fails with [`SortError::UndefinedKey`] naming its index. The comparer
/// is never invoked with a missing row.
pub fn checked_sort<K, C>(
    keys: Option<&mut [Option<K>]>,
    comparer: Option<&C>,
) -> Result<(), SortError>
where
    C: KeyComparer<K> + ?Sized,
{
    checked_sort_counted(keys, comparer).map(|_| ())
}

/// [`checked_sort`] that also reports the work performed.
pub fn checked_sort_counted<K, C>(
    keys: Option<&mut [Option<K>]>,
    comparer: Option<&C>,
) -> Result<SortStats, SortError>
where
    C: KeyComparer<K> + ?Sized,
{
    let keys =
        keys.ok_or_else(|| SortError::InvalidArgument("key collection is undefined".into()))?;
    let comparer =
        comparer.ok_or_else(|| SortError::InvalidArgument("comparer is undefined".into()))?;

    if let Some(index) = keys.iter().position(Option::is_none) {
        return Err(SortError::UndefinedKey { index });
    }

    Ok(sort_counted(keys, &DefinedKeys(comparer)))
}

/// Lifts a comparer over `K` to validated `Option<K>` rows.
struct DefinedKeys<'a, C: ?Sized>(&'a C);

impl<K, C: KeyComparer<K> + ?Sized> KeyComparer<Option<K>> for DefinedKeys<'_, C> {
    fn compare(&self, left: &Option<K>, right: &Option<K>) -> Ordering {
        match (left, right) {
            (Some(left), Some(right)) => self.0.compare(left, right),
            // unreachable after validation
            _ => Ordering::Equal,
        }
    }

    fn name(&self) -> &str {
        self.0.name()
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use super::*;
    use crate::comparers::{CountingComparer, LengthThenFirst};

    fn by_first(left: &Key, right: &Key) -> Ordering {
        left.first().cmp(&right.first())
    }

    #[test]
    fn exercise_examples() {
        let mut rows = vec![vec![77, 17], vec![17, 32]];
        sort(&mut rows, &LengthThenFirst);
        assert_eq!(rows, [vec![17, 32], vec![77, 17]]);

        let mut rows = vec![vec![8], vec![32]];
        sort(&mut rows, &LengthThenFirst);
        assert_eq!(rows, [vec![8], vec![32]]);
    }

    #[test]
    fn empty_and_single() {
        let mut empty: Vec<Key> = Vec::new();
        let stats = sort_counted(&mut empty, &LengthThenFirst);
        assert_eq!(stats, SortStats::default());

        let mut single = vec![vec![5, 4, 3]];
        let stats = sort_counted(&mut single, &LengthThenFirst);
        assert_eq!(stats.comparisons, 0);
        assert_eq!(single, [vec![5, 4, 3]]);
    }

    #[test]
    fn reverse_ordered_input() {
        let mut rows: Vec<Key> = (0..6).rev().map(|i| vec![i]).collect();
        let stats = sort_counted(&mut rows, &LengthThenFirst);
        let expected: Vec<Key> = (0..6).map(|i| vec![i]).collect();
        assert_eq!(rows, expected);
        assert_eq!(stats.swaps, 15);
    }

    #[test]
    fn comparison_count_is_square_of_len_minus_one() {
        for len in 1..8usize {
            let mut rows: Vec<Key> = (0..len as i64).map(|i| vec![i]).collect();
            let counter = CountingComparer::new(LengthThenFirst);
            let stats = sort_counted(&mut rows, &counter);
            assert_eq!(stats.comparisons, (len - 1) * (len - 1));
            assert_eq!(counter.count(), (len - 1) * (len - 1));
            assert_eq!(stats.passes, len - 1);
        }
    }

    #[test]
    fn sort_by_matches_object_comparer() {
        let original = vec![vec![3, 1], vec![1], vec![2, 2, 2], vec![0, 9]];

        let mut via_fn = original.clone();
        sort_by(&mut via_fn, by_first);

        let mut via_object = original;
        sort(&mut via_object, &FnComparer::new(by_first));

        assert_eq!(via_fn, via_object);
        assert_eq!(via_fn, [vec![0, 9], vec![1], vec![2, 2, 2], vec![3, 1]]);
    }

    #[test]
    fn equal_keys_keep_relative_order() {
        let mut rows = vec![vec![2, 1], vec![1, 0], vec![2, 2], vec![1, 5]];
        sort_by(&mut rows, by_first);
        assert_eq!(rows, [vec![1, 0], vec![1, 5], vec![2, 1], vec![2, 2]]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut rows = vec![vec![4], vec![1, 1], vec![9], vec![0, 0, 0]];
        sort(&mut rows, &LengthThenFirst);
        let once = rows.clone();
        let stats = sort_counted(&mut rows, &LengthThenFirst);
        assert_eq!(rows, once);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn dyn_comparer_through_arc() {
        let comparer: Arc<dyn KeyComparer<Key>> = Arc::new(LengthThenFirst);
        let mut rows = vec![vec![1, 2, 3], vec![1]];
        sort(&mut rows, &comparer);
        assert_eq!(rows, [vec![1], vec![1, 2, 3]]);
    }

    #[test]
    fn checked_sort_sorts_defined_rows() {
        let mut rows = vec![Some(vec![77, 17]), Some(vec![17, 32])];
        checked_sort(Some(rows.as_mut_slice()), Some(&LengthThenFirst)).unwrap();
        assert_eq!(rows, [Some(vec![17, 32]), Some(vec![77, 17])]);
    }

    #[test]
    fn checked_sort_counted_reports_stats() {
        let mut rows = vec![Some(vec![3]), Some(vec![2]), Some(vec![1])];
        let stats = checked_sort_counted(Some(rows.as_mut_slice()), Some(&LengthThenFirst)).unwrap();
        assert_eq!(
            stats,
            SortStats {
                passes: 2,
                comparisons: 4,
                swaps: 3,
            }
        );
    }

    #[test]
    fn checked_sort_rejects_missing_collection() {
        let err = checked_sort::<Key, _>(None, Some(&LengthThenFirst)).unwrap_err();
        assert_eq!(
            err,
            SortError::InvalidArgument("key collection is undefined".into())
        );
    }

    #[test]
    fn checked_sort_rejects_missing_comparer() {
        let mut rows = vec![Some(vec![1]), Some(vec![0])];
        let err = checked_sort(Some(rows.as_mut_slice()), None::<&LengthThenFirst>).unwrap_err();
        assert_eq!(err, SortError::InvalidArgument("comparer is undefined".into()));
        assert_eq!(rows, [Some(vec![1]), Some(vec![0])]);
    }

    #[test]
    fn checked_sort_names_undefined_row_and_leaves_input() {
        let mut rows = vec![Some(vec![3]), Some(vec![2]), None, Some(vec![1])];
        let counter = CountingComparer::new(LengthThenFirst);
        let err = checked_sort(Some(rows.as_mut_slice()), Some(&counter)).unwrap_err();
        assert_eq!(err, SortError::UndefinedKey { index: 2 });
        assert!(err.is_invalid_argument());
        assert_eq!(counter.count(), 0);
        assert_eq!(rows, [Some(vec![3]), Some(vec![2]), None, Some(vec![1])]);
    }

    #[test]
    fn comparer_panic_leaves_permutation() {
        let mut rows: Vec<Key> = vec![vec![5], vec![4], vec![3], vec![2], vec![1]];
        let calls = std::sync::atomic::AtomicUsize::new(0);
        let result = catch_unwind(AssertUnwindSafe(|| {
            sort_by(&mut rows, |l: &Key, r: &Key| {
                if calls.fetch_add(1, std::sync::atomic::Ordering::Relaxed) == 3 {
                    panic!("comparer fault");
                }
                l.cmp(r)
            });
        }));
        assert!(result.is_err());

        // first pass swapped three times before the fault
        assert_eq!(rows, [vec![4], vec![3], vec![2], vec![5], vec![1]]);
        let mut sorted = rows.clone();
        sorted.sort();
        assert_eq!(sorted, [vec![1], vec![2], vec![3], vec![4], vec![5]]);
    }
}
