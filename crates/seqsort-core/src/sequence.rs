//! Lazy two-term recurrence sequences.
//!
//! A sequence of `count` terms is produced from two seeds `a`, `b` and a
//! combining rule `f(current, previous)`:
//!
//! ```text
//! [a, b, f(b, a), f(f(b, a), b), ...]
//! ```
//!
//! Terms are computed on demand. Every call to [`generate`] (or one of its
//! siblings) returns an independent traversal; a consumed sequence is not
//! restarted, a fresh call is made instead.

use std::convert::Infallible;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::debug;

use crate::error::SeqError;

/// Capability that computes the next term from the two most recent terms.
pub trait FormulaCalculator<T>: Send + Sync {
    /// Compute the next term from the current (most recent) and previous terms.
    fn calculate(&self, current: &T, previous: &T) -> T;

    /// Get the name of this formula.
    fn name(&self) -> &str {
        "formula"
    }
}

/// Checked counterpart of [`FormulaCalculator`]; `None` signals that the
/// next term cannot be represented.
pub trait CheckedFormula<T>: Send + Sync {
    /// Compute the next term, or `None` on overflow.
    fn checked_calculate(&self, current: &T, previous: &T) -> Option<T>;

    /// Get the name of this formula.
    fn name(&self) -> &str {
        "checked formula"
    }
}

/// Adapter exposing a bare function as a [`FormulaCalculator`].
#[derive(Clone, Copy)]
pub struct FnFormula<F> {
    f: F,
}

impl<F> FnFormula<F> {
    /// Wrap a `f(current, previous) -> next` function.
    #[must_use]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, F> FormulaCalculator<T> for FnFormula<F>
where
    F: Fn(&T, &T) -> T + Send + Sync,
{
    fn calculate(&self, current: &T, previous: &T) -> T {
        (self.f)(current, previous)
    }

    fn name(&self) -> &'static str {
        "fn"
    }
}

/// A [`FnFormula`] over a plain function pointer, handy when no closure is
/// available to drive type inference.
pub type FnPointerFormula<T> = FnFormula<fn(&T, &T) -> T>;

impl<T, C: FormulaCalculator<T> + ?Sized> FormulaCalculator<T> for &C {
    fn calculate(&self, current: &T, previous: &T) -> T {
        (**self).calculate(current, previous)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T, C: FormulaCalculator<T> + ?Sized> FormulaCalculator<T> for Arc<C> {
    fn calculate(&self, current: &T, previous: &T) -> T {
        (**self).calculate(current, previous)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T, C: FormulaCalculator<T> + ?Sized> FormulaCalculator<T> for Box<C> {
    fn calculate(&self, current: &T, previous: &T) -> T {
        (**self).calculate(current, previous)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T, C: CheckedFormula<T> + ?Sized> CheckedFormula<T> for Arc<C> {
    fn checked_calculate(&self, current: &T, previous: &T) -> Option<T> {
        (**self).checked_calculate(current, previous)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Position and last two terms of a recurrence.
#[derive(Debug, Clone)]
struct RecurrenceState<T> {
    previous: T,
    current: T,
    position: usize,
    count: usize,
}

impl<T: Clone> RecurrenceState<T> {
    fn new(count: usize, a: T, b: T) -> Self {
        Self {
            previous: a,
            current: b,
            position: 0,
            count,
        }
    }

    fn remaining(&self) -> usize {
        self.count - self.position
    }

    /// Produce the term at the current position.
    ///
    /// An `Err` from `step` is yielded in place of the term and exhausts the
    /// state; nothing is produced after it.
    fn advance<E>(
        &mut self,
        step: impl FnOnce(&T, &T) -> Result<T, E>,
    ) -> Option<Result<T, E>> {
        if self.position >= self.count {
            return None;
        }

        let term = match self.position {
            0 => self.previous.clone(),
            1 => self.current.clone(),
            _ => match step(&self.current, &self.previous) {
                Ok(next) => {
                    self.previous = std::mem::replace(&mut self.current, next);
                    self.current.clone()
                }
                Err(e) => {
                    self.position = self.count;
                    return Some(Err(e));
                }
            },
        };

        self.position += 1;
        Some(Ok(term))
    }
}

/// Lazy sequence driven by a [`FormulaCalculator`].
///
/// # Example
/// ```
/// use seqsort_core::sequence::generate;
/// let fib: Vec<u64> = generate(10, 1, 1, |x: &u64, y: &u64| x + y).collect();
/// assert_eq!(fib, [1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
/// ```
#[derive(Clone)]
pub struct RecurrenceSequence<T, C> {
    state: RecurrenceState<T>,
    calculator: C,
}

impl<T, C> Iterator for RecurrenceSequence<T, C>
where
    T: Clone,
    C: FormulaCalculator<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let calculator = &self.calculator;
        self.state
            .advance(|current, previous| {
                Ok::<_, Infallible>(calculator.calculate(current, previous))
            })
            .map(|term| match term {
                Ok(value) => value,
                Err(never) => match never {},
            })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.state.remaining();
        (remaining, Some(remaining))
    }
}

impl<T: Clone, C: FormulaCalculator<T>> ExactSizeIterator for RecurrenceSequence<T, C> {}

impl<T: Clone, C: FormulaCalculator<T>> FusedIterator for RecurrenceSequence<T, C> {}

/// Generate `count` terms from seeds `a`, `b` and a bare combining function.
pub fn generate<T, F>(count: usize, a: T, b: T, f: F) -> RecurrenceSequence<T, FnFormula<F>>
where
    T: Clone,
    F: Fn(&T, &T) -> T + Send + Sync,
{
    generate_with(count, a, b, FnFormula::new(f))
}

/// Generate `count` terms from seeds `a`, `b` and a [`FormulaCalculator`].
pub fn generate_with<T, C>(count: usize, a: T, b: T, calculator: C) -> RecurrenceSequence<T, C>
where
    T: Clone,
    C: FormulaCalculator<T>,
{
    debug!(count, formula = calculator.name(), "Recurrence sequence created");
    RecurrenceSequence {
        state: RecurrenceState::new(count, a, b),
        calculator,
    }
}

/// Lazy sequence driven by a fallible combining function.
///
/// Yields `Ok(term)` until the function fails; the failure is yielded at the
/// position where it happened and the sequence ends there.
pub struct TryRecurrenceSequence<T, E, F> {
    state: RecurrenceState<T>,
    f: F,
    _error: PhantomData<fn() -> E>,
}

impl<T, E, F> Iterator for TryRecurrenceSequence<T, E, F>
where
    T: Clone,
    F: Fn(&T, &T) -> Result<T, E>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let f = &self.f;
        self.state.advance(|current, previous| f(current, previous))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.state.remaining()))
    }
}

impl<T, E, F> FusedIterator for TryRecurrenceSequence<T, E, F>
where
    T: Clone,
    F: Fn(&T, &T) -> Result<T, E>,
{
}

/// Generate up to `count` terms with a fallible combining function.
pub fn try_generate<T, E, F>(count: usize, a: T, b: T, f: F) -> TryRecurrenceSequence<T, E, F>
where
    T: Clone,
    F: Fn(&T, &T) -> Result<T, E>,
{
    debug!(count, "Fallible recurrence sequence created");
    TryRecurrenceSequence {
        state: RecurrenceState::new(count, a, b),
        f,
        _error: PhantomData,
    }
}

/// Lazy sequence driven by a [`CheckedFormula`]; overflow is reported as
/// [`SeqError::Overflow`] carrying the position that could not be produced.
pub struct CheckedSequence<T, C> {
    state: RecurrenceState<T>,
    formula: C,
}

impl<T, C> Iterator for CheckedSequence<T, C>
where
    T: Clone,
    C: CheckedFormula<T>,
{
    type Item = Result<T, SeqError>;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.state.position;
        let formula = &self.formula;
        self.state.advance(|current, previous| {
            formula
                .checked_calculate(current, previous)
                .ok_or(SeqError::Overflow { position })
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.state.remaining()))
    }
}

impl<T: Clone, C: CheckedFormula<T>> FusedIterator for CheckedSequence<T, C> {}

/// Generate up to `count` terms with overflow detection.
pub fn checked_generate<T, C>(count: usize, a: T, b: T, formula: C) -> CheckedSequence<T, C>
where
    T: Clone,
    C: CheckedFormula<T>,
{
    debug!(count, formula = formula.name(), "Checked recurrence sequence created");
    CheckedSequence {
        state: RecurrenceState::new(count, a, b),
        formula,
    }
}

/// Validating constructor for [`RecurrenceSequence`].
///
/// Every parameter is required. `build` fails with
/// [`SeqError::InvalidArgument`] before any term is computed when the count
/// is missing or negative, when a seed is missing, or when no formula was
/// supplied.
///
/// # Example
/// ```
/// use seqsort_core::sequence::SequenceBuilder;
/// let powers: Vec<i64> = SequenceBuilder::new()
///     .count(5)
///     .seeds(1, 2)
///     .formula(|x: &i64, y: &i64| 6 * x - 8 * y)
///     .build()
///     .unwrap()
///     .collect();
/// assert_eq!(powers, [1, 2, 4, 8, 16]);
/// ```
pub struct SequenceBuilder<T, C> {
    count: Option<i64>,
    first: Option<T>,
    second: Option<T>,
    calculator: Option<C>,
}

impl<T, C> SequenceBuilder<T, C> {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            count: None,
            first: None,
            second: None,
            calculator: None,
        }
    }

    /// Set the number of terms to produce.
    #[must_use]
    pub fn count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the first seed (position 0).
    #[must_use]
    pub fn first(mut self, a: T) -> Self {
        self.first = Some(a);
        self
    }

    /// Set the second seed (position 1).
    #[must_use]
    pub fn second(mut self, b: T) -> Self {
        self.second = Some(b);
        self
    }

    /// Set both seeds.
    #[must_use]
    pub fn seeds(self, a: T, b: T) -> Self {
        self.first(a).second(b)
    }

    /// Set the formula calculator.
    #[must_use]
    pub fn calculator(mut self, calculator: C) -> Self {
        self.calculator = Some(calculator);
        self
    }

    /// Validate the parameters and create the sequence.
    pub fn build(self) -> Result<RecurrenceSequence<T, C>, SeqError>
    where
        T: Clone,
        C: FormulaCalculator<T>,
    {
        let (count, a, b, calculator) = self.validate()?;
        Ok(generate_with(count, a, b, calculator))
    }

    /// Validate the parameters and create an overflow-checked sequence.
    pub fn build_checked(self) -> Result<CheckedSequence<T, C>, SeqError>
    where
        T: Clone,
        C: CheckedFormula<T>,
    {
        let (count, a, b, formula) = self.validate()?;
        Ok(checked_generate(count, a, b, formula))
    }

    fn validate(self) -> Result<(usize, T, T, C), SeqError> {
        let count = self
            .count
            .ok_or_else(|| SeqError::InvalidArgument("count is required".into()))?;
        let count = usize::try_from(count).map_err(|_| {
            SeqError::InvalidArgument(format!("count must be >= 0, got {count}"))
        })?;
        let a = self
            .first
            .ok_or_else(|| SeqError::InvalidArgument("first seed is undefined".into()))?;
        let b = self
            .second
            .ok_or_else(|| SeqError::InvalidArgument("second seed is undefined".into()))?;
        let calculator = self
            .calculator
            .ok_or_else(|| SeqError::InvalidArgument("formula is undefined".into()))?;
        Ok((count, a, b, calculator))
    }
}

impl<T, F> SequenceBuilder<T, FnFormula<F>> {
    /// Set a bare combining function as the formula.
    #[must_use]
    pub fn formula(self, f: F) -> Self {
        self.calculator(FnFormula::new(f))
    }
}

impl<T, C> Default for SequenceBuilder<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
