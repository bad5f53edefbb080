//! Lazy Fibonacci iterator bounded by an exclusive limit.

use std::iter::FusedIterator;

use crate::bound::Bound;

/// Lazy iterator over the Fibonacci numbers below a bound.
///
/// Yields 0, 1, 1, 2, 3, 5, ... and stops before the first term that
/// reaches the bound.
///
/// # Example
/// ```
/// use fibprime_core::fibonacci::Fibonacci;
/// use fibprime_core::Bound;
/// let fibs: Vec<u64> = Fibonacci::below(Bound::new(10)).collect();
/// assert_eq!(fibs, [0, 1, 1, 2, 3, 5, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct Fibonacci {
    bound: Bound,
    a: Option<u64>,
    b: Option<u64>,
}

impl Fibonacci {
    #[must_use]
    pub fn below(bound: Bound) -> Self {
        Self {
            bound,
            a: Some(0),
            b: Some(1),
        }
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(val) = self.a.filter(|&v| self.bound.admits(v)) else {
            self.a = None;
            return None;
        };
        // A term past u64::MAX ends the sequence instead of wrapping.
        let next = self.b.and_then(|b| val.checked_add(b));
        self.a = std::mem::replace(&mut self.b, next);
        Some(val)
    }
}

impl FusedIterator for Fibonacci {}
