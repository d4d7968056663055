//! Formula and comparer factories.
//!
//! Both factories resolve a textual spec (`"linear:6,-8"`, `"sum:desc"`) to a
//! shared trait object and cache it, so repeated lookups of the same spec
//! return the same `Arc`.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use num_bigint::BigInt;
use parking_lot::RwLock;
use tracing::debug;

use crate::comparers::{ByMax, ByMin, BySum, LengthThenFirst, Reversed};
use crate::constants::DESCENDING_SUFFIX;
use crate::error::{SeqError, SortError};
use crate::formulas::{Additive, Linear, Multiplicative, Subtractive};
use crate::sequence::{CheckedFormula, FormulaCalculator};
use crate::sort::{Key, KeyComparer};

/// Parsed formula spec.
///
/// `linear` coefficients are kept at full precision; the checked `i64` path
/// rejects coefficients that do not fit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormulaSpec {
    /// `add`
    Add,
    /// `sub`
    Sub,
    /// `mul`
    Mul,
    /// `linear:P,Q`
    Linear { p: BigInt, q: BigInt },
}

impl FromStr for FormulaSpec {
    type Err = SeqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "add" => Ok(Self::Add),
            "sub" => Ok(Self::Sub),
            "mul" => Ok(Self::Mul),
            _ => {
                let coefficients = s.strip_prefix("linear:").ok_or_else(|| {
                    SeqError::InvalidArgument(format!("unknown formula: {s}"))
                })?;
                let (p, q) = coefficients.split_once(',').ok_or_else(|| {
                    SeqError::InvalidArgument(format!(
                        "linear formula needs two coefficients, got '{coefficients}'"
                    ))
                })?;
                let parse = |c: &str| {
                    c.trim().parse::<BigInt>().map_err(|e| {
                        SeqError::InvalidArgument(format!("bad coefficient '{c}': {e}"))
                    })
                };
                Ok(Self::Linear {
                    p: parse(p)?,
                    q: parse(q)?,
                })
            }
        }
    }
}

impl fmt::Display for FormulaSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => f.write_str("add"),
            Self::Sub => f.write_str("sub"),
            Self::Mul => f.write_str("mul"),
            Self::Linear { p, q } => write!(f, "linear:{p},{q}"),
        }
    }
}

/// Parsed comparer spec: a base name plus direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparerSpec {
    /// Base comparer name.
    pub name: String,
    /// Whether the order is inverted.
    pub descending: bool,
}

impl FromStr for ComparerSpec {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, descending) = match s.strip_suffix(DESCENDING_SUFFIX) {
            Some(base) => (base, true),
            None => (s, false),
        };
        if !COMPARER_NAMES.contains(&name) {
            return Err(SortError::InvalidArgument(format!("unknown comparer: {s}")));
        }
        Ok(Self {
            name: name.to_string(),
            descending,
        })
    }
}

impl fmt::Display for ComparerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.descending {
            f.write_str(DESCENDING_SUFFIX)?;
        }
        Ok(())
    }
}

const FORMULA_NAMES: [&str; 4] = ["add", "sub", "mul", "linear"];
const COMPARER_NAMES: [&str; 4] = ["length-then-first", "sum", "max", "min"];

/// Factory trait for formulas.
pub trait FormulaFactory: Send + Sync {
    /// Get or create an arbitrary-precision formula by spec.
    fn get(&self, spec: &str) -> Result<Arc<dyn FormulaCalculator<BigInt>>, SeqError>;

    /// Get or create an overflow-checked `i64` formula by spec.
    fn get_checked(&self, spec: &str) -> Result<Arc<dyn CheckedFormula<i64>>, SeqError>;

    /// List all available formula names.
    fn available(&self) -> Vec<&str>;
}

/// Factory trait for comparers.
pub trait ComparerFactory: Send + Sync {
    /// Get or create a comparer by spec.
    fn get(&self, spec: &str) -> Result<Arc<dyn KeyComparer<Key>>, SortError>;

    /// List all available comparer names.
    fn available(&self) -> Vec<&str>;
}

/// Default formula factory with lazy creation and cache.
pub struct DefaultFormulaFactory {
    cache: RwLock<HashMap<FormulaSpec, Arc<dyn FormulaCalculator<BigInt>>>>,
    checked_cache: RwLock<HashMap<FormulaSpec, Arc<dyn CheckedFormula<i64>>>>,
}

impl DefaultFormulaFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            checked_cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_formula(spec: FormulaSpec) -> Arc<dyn FormulaCalculator<BigInt>> {
        match spec {
            FormulaSpec::Add => Arc::new(Additive),
            FormulaSpec::Sub => Arc::new(Subtractive),
            FormulaSpec::Mul => Arc::new(Multiplicative),
            FormulaSpec::Linear { p, q } => Arc::new(Linear::new(p, q)),
        }
    }

    fn create_checked(spec: &FormulaSpec) -> Result<Arc<dyn CheckedFormula<i64>>, SeqError> {
        let formula: Arc<dyn CheckedFormula<i64>> = match spec {
            FormulaSpec::Add => Arc::new(Additive),
            FormulaSpec::Sub => Arc::new(Subtractive),
            FormulaSpec::Mul => Arc::new(Multiplicative),
            FormulaSpec::Linear { p, q } => {
                let narrow = |c: &BigInt| {
                    i64::try_from(c).map_err(|_| {
                        SeqError::InvalidArgument(format!(
                            "coefficient {c} does not fit in a 64-bit integer"
                        ))
                    })
                };
                Arc::new(Linear::new(narrow(p)?, narrow(q)?))
            }
        };
        Ok(formula)
    }
}

impl Default for DefaultFormulaFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl FormulaFactory for DefaultFormulaFactory {
    fn get(&self, spec: &str) -> Result<Arc<dyn FormulaCalculator<BigInt>>, SeqError> {
        let spec: FormulaSpec = spec.parse()?;

        // Check cache first
        if let Some(formula) = self.cache.read().get(&spec) {
            return Ok(Arc::clone(formula));
        }

        // Create and cache
        debug!(%spec, "Creating formula");
        let formula = Self::create_formula(spec.clone());
        self.cache.write().insert(spec, Arc::clone(&formula));
        Ok(formula)
    }

    fn get_checked(&self, spec: &str) -> Result<Arc<dyn CheckedFormula<i64>>, SeqError> {
        let spec: FormulaSpec = spec.parse()?;

        if let Some(formula) = self.checked_cache.read().get(&spec) {
            return Ok(Arc::clone(formula));
        }

        debug!(%spec, "Creating checked formula");
        let formula = Self::create_checked(&spec)?;
        self.checked_cache
            .write()
            .insert(spec, Arc::clone(&formula));
        Ok(formula)
    }

    fn available(&self) -> Vec<&str> {
        FORMULA_NAMES.to_vec()
    }
}

/// Default comparer factory with lazy creation and cache.
pub struct DefaultComparerFactory {
    cache: RwLock<HashMap<String, Arc<dyn KeyComparer<Key>>>>,
}

impl DefaultComparerFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_comparer(spec: &ComparerSpec) -> Result<Arc<dyn KeyComparer<Key>>, SortError> {
        let comparer: Arc<dyn KeyComparer<Key>> = match (spec.name.as_str(), spec.descending) {
            ("length-then-first", false) => Arc::new(LengthThenFirst),
            ("length-then-first", true) => Arc::new(Reversed::new(LengthThenFirst)),
            ("sum", false) => Arc::new(BySum),
            ("sum", true) => Arc::new(Reversed::new(BySum)),
            ("max", false) => Arc::new(ByMax),
            ("max", true) => Arc::new(Reversed::new(ByMax)),
            ("min", false) => Arc::new(ByMin),
            ("min", true) => Arc::new(Reversed::new(ByMin)),
            (name, _) => {
                return Err(SortError::InvalidArgument(format!(
                    "unknown comparer: {name}"
                )))
            }
        };
        Ok(comparer)
    }
}

impl Default for DefaultComparerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparerFactory for DefaultComparerFactory {
    fn get(&self, spec: &str) -> Result<Arc<dyn KeyComparer<Key>>, SortError> {
        let spec: ComparerSpec = spec.parse()?;
        let key = spec.to_string();

        if let Some(comparer) = self.cache.read().get(&key) {
            return Ok(Arc::clone(comparer));
        }

        debug!(spec = %key, "Creating comparer");
        let comparer = Self::create_comparer(&spec)?;
        self.cache.write().insert(key, Arc::clone(&comparer));
        Ok(comparer)
    }

    fn available(&self) -> Vec<&str> {
        COMPARER_NAMES.to_vec()
    }
}
