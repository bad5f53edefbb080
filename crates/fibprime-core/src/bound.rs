//! Exclusive upper bound shared by all sequences.

use std::fmt;

use serde::Serialize;

/// Exclusive upper bound on generated values.
///
/// Built from a signed integer; zero and negative inputs collapse to an
/// empty bound, so every sequence below it is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Bound(u64);

impl Bound {
    /// Create a bound from a signed integer. Negative values map to 0.
    #[must_use]
    pub fn new(n: i64) -> Self {
        Self(u64::try_from(n).unwrap_or(0))
    }

    /// The bound as an unsigned limit.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether `value` lies strictly below the bound.
    #[inline]
    #[must_use]
    pub const fn admits(self, value: u64) -> bool {
        value < self.0
    }
}

impl From<u64> for Bound {
    fn from(n: u64) -> Self {
        Self(n)
    }
}

impl From<i64> for Bound {
    fn from(n: i64) -> Self {
        Self::new(n)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
