//! Built-in recurrence formulas.
//!
//! Each formula implements both [`FormulaCalculator`] (plain arithmetic,
//! suitable for `BigInt`) and [`CheckedFormula`] (overflow-aware, suitable
//! for fixed-width integers).

use std::ops::{Add, Mul, Sub};

use num_traits::{CheckedAdd, CheckedMul, CheckedSub};

use crate::sequence::{CheckedFormula, FormulaCalculator};

/// `next = current + previous` (Fibonacci-style).
#[derive(Debug, Clone, Copy, Default)]
pub struct Additive;

/// `next = current - previous`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Subtractive;

/// `next = current * previous`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Multiplicative;

/// `next = p * current + q * previous`.
///
/// With `p = 6`, `q = -8` and seeds `(1, 2)` this produces powers of two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Linear<T> {
    /// Coefficient applied to the current term.
    pub p: T,
    /// Coefficient applied to the previous term.
    pub q: T,
}

impl<T> Linear<T> {
    /// Create a linear formula with coefficients `p` and `q`.
    #[must_use]
    pub fn new(p: T, q: T) -> Self {
        Self { p, q }
    }
}

impl<T> FormulaCalculator<T> for Additive
where
    for<'a> &'a T: Add<&'a T, Output = T>,
{
    fn calculate(&self, current: &T, previous: &T) -> T {
        current + previous
    }

    fn name(&self) -> &'static str {
        "add"
    }
}

impl<T> FormulaCalculator<T> for Subtractive
where
    for<'a> &'a T: Sub<&'a T, Output = T>,
{
    fn calculate(&self, current: &T, previous: &T) -> T {
        current - previous
    }

    fn name(&self) -> &'static str {
        "sub"
    }
}

impl<T> FormulaCalculator<T> for Multiplicative
where
    for<'a> &'a T: Mul<&'a T, Output = T>,
{
    fn calculate(&self, current: &T, previous: &T) -> T {
        current * previous
    }

    fn name(&self) -> &'static str {
        "mul"
    }
}

impl<T> FormulaCalculator<T> for Linear<T>
where
    T: Add<Output = T> + Send + Sync,
    for<'a> &'a T: Mul<&'a T, Output = T>,
{
    fn calculate(&self, current: &T, previous: &T) -> T {
        &self.p * current + &self.q * previous
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}

impl<T: CheckedAdd> CheckedFormula<T> for Additive {
    fn checked_calculate(&self, current: &T, previous: &T) -> Option<T> {
        current.checked_add(previous)
    }

    fn name(&self) -> &'static str {
        "add"
    }
}

impl<T: CheckedSub> CheckedFormula<T> for Subtractive {
    fn checked_calculate(&self, current: &T, previous: &T) -> Option<T> {
        current.checked_sub(previous)
    }

    fn name(&self) -> &'static str {
        "sub"
    }
}

impl<T: CheckedMul> CheckedFormula<T> for Multiplicative {
    fn checked_calculate(&self, current: &T, previous: &T) -> Option<T> {
        current.checked_mul(previous)
    }

    fn name(&self) -> &'static str {
        "mul"
    }
}

impl<T> CheckedFormula<T> for Linear<T>
where
    T: CheckedAdd + CheckedMul + Send + Sync,
{
    fn checked_calculate(&self, current: &T, previous: &T) -> Option<T> {
        let lhs = self.p.checked_mul(current)?;
        let rhs = self.q.checked_mul(previous)?;
        lhs.checked_add(&rhs)
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;
    use crate::error::SeqError;
    use crate::sequence::{checked_generate, generate_with};

    #[test]
    fn additive_is_fibonacci() {
        let fib: Vec<i64> = generate_with(10, 1, 1, Additive).collect();
        assert_eq!(fib, [1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
    }

    #[test]
    fn subtractive_has_period_six() {
        let terms: Vec<i64> = generate_with(12, 1, 2, Subtractive).collect();
        assert_eq!(terms[..6], terms[6..]);
        assert_eq!(terms[..6], [1, 2, 1, -1, -2, -1]);
    }

    #[test]
    fn multiplicative_growth() {
        let terms: Vec<i64> = generate_with(6, 1, 2, Multiplicative).collect();
        assert_eq!(terms, [1, 2, 2, 4, 8, 32]);
    }

    #[test]
    fn linear_powers_of_two() {
        let terms: Vec<i64> = generate_with(10, 1, 2, Linear::new(6, -8)).collect();
        assert_eq!(terms, [1, 2, 4, 8, 16, 32, 64, 128, 256, 512]);
    }

    #[test]
    fn bigint_fibonacci_past_u64() {
        let f99 = generate_with(100, BigInt::from(0), BigInt::from(1), Additive)
            .last()
            .unwrap();
        assert_eq!(f99.to_string(), "218922995834555169026");
    }

    #[test]
    fn checked_additive_reports_overflow_position() {
        let terms: Vec<Result<u64, SeqError>> =
            checked_generate(100, 0u64, 1, Additive).collect();
        // F(93) is the last Fibonacci number that fits in u64.
        assert_eq!(terms.len(), 95);
        assert_eq!(terms[93], Ok(12_200_160_415_121_876_738));
        assert_eq!(terms[94], Err(SeqError::Overflow { position: 94 }));
    }

    #[test]
    fn checked_linear_matches_unchecked_in_range() {
        let checked: Vec<i64> = checked_generate(20, 1i64, 2, Linear::new(6, -8))
            .collect::<Result<_, _>>()
            .unwrap();
        let plain: Vec<i64> = generate_with(20, 1i64, 2, Linear::new(6, -8)).collect();
        assert_eq!(checked, plain);
    }

    #[test]
    fn checked_multiplicative_overflow() {
        let last = checked_generate(20, 2i32, 3, Multiplicative).last().unwrap();
        assert!(matches!(last, Err(SeqError::Overflow { .. })));
    }

    #[test]
    fn formula_names() {
        assert_eq!(FormulaCalculator::<i64>::name(&Additive), "add");
        assert_eq!(FormulaCalculator::<i64>::name(&Subtractive), "sub");
        assert_eq!(FormulaCalculator::<i64>::name(&Multiplicative), "mul");
        assert_eq!(FormulaCalculator::<i64>::name(&Linear::new(1i64, 1)), "linear");
    }
}
