#![no_main]

use libfuzzer_sys::fuzz_target;

use seqsort_core::formulas::Linear;
use seqsort_core::sequence::{checked_generate, try_generate, CheckedFormula};
use seqsort_core::SeqError;

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }
    let count = usize::from(data[0] % 128);
    let a = i64::from(i8::from_le_bytes([data[1]]));
    let b = i64::from(i8::from_le_bytes([data[2]]));
    let p = i64::from(i8::from_le_bytes([data[3]]));
    let q = i64::from(i8::from_le_bytes([data[4]]));
    let linear = Linear::new(p, q);

    // The fallible closure and the checked formula must agree term for term
    let via_closure: Vec<Result<i64, SeqError>> = try_generate(count, a, b, |x: &i64, y: &i64| {
        linear
            .checked_calculate(x, y)
            .ok_or(SeqError::Overflow { position: 0 })
    })
    .collect();
    let via_formula: Vec<Result<i64, SeqError>> =
        checked_generate(count, a, b, Linear::new(p, q)).collect();

    assert!(via_closure.len() <= count);
    assert_eq!(via_closure.len(), via_formula.len());
    for (x, y) in via_closure.iter().zip(&via_formula) {
        match (x, y) {
            (Ok(x), Ok(y)) => assert_eq!(x, y),
            (Err(_), Err(_)) => {}
            _ => panic!("closure and formula disagree"),
        }
    }
    // Errors are terminal
    if let Some(pos) = via_formula.iter().position(Result::is_err) {
        assert_eq!(pos, via_formula.len() - 1);
    }
});
