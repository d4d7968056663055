#![no_main]

use libfuzzer_sys::fuzz_target;

use seqsort_core::comparers::{CountingComparer, LengthThenFirst};
use seqsort_core::sort::{checked_sort, Key};
use seqsort_core::SortError;

fuzz_target!(|data: &[u8]| {
    // Each byte is one row: 0 marks an undefined row, otherwise the low bits
    // pick a length and the byte itself fills the values.
    let rows: Vec<Option<Key>> = data
        .iter()
        .take(64)
        .map(|&b| (b != 0).then(|| vec![i64::from(b); usize::from(b % 4)]))
        .collect();
    let first_undefined = rows.iter().position(Option::is_none);

    let mut sorted = rows.clone();
    let counter = CountingComparer::new(LengthThenFirst);
    match checked_sort(Some(sorted.as_mut_slice()), Some(&counter)) {
        Ok(()) => {
            assert!(first_undefined.is_none());
            let n = rows.len().saturating_sub(1);
            assert_eq!(counter.count(), n * n);
            let mut before: Vec<Key> = rows.into_iter().flatten().collect();
            let mut after: Vec<Key> = sorted.into_iter().flatten().collect();
            before.sort();
            after.sort();
            assert_eq!(before, after);
        }
        Err(SortError::UndefinedKey { index }) => {
            assert_eq!(Some(index), first_undefined);
            assert_eq!(counter.count(), 0);
            assert_eq!(sorted, rows);
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
});
