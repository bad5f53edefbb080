//! Lazy prime iterator using incremental trial division.

use std::iter::FusedIterator;

use crate::bound::Bound;

/// Which of the known primes are tried as divisors of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivisorLimit {
    /// Try every prime found so far.
    All,
    /// Stop at the largest known prime not exceeding √candidate.
    #[default]
    SquareRoot,
}

/// Lazy iterator over the primes below a bound, in increasing order.
///
/// Each candidate from 2 upward is accepted when no previously found prime
/// divides it. Both divisor limits yield identical sequences.
///
/// # Example
/// ```
/// use fibprime_core::primes::PrimeNumbers;
/// use fibprime_core::Bound;
/// let primes: Vec<u64> = PrimeNumbers::below(Bound::new(20)).collect();
/// assert_eq!(primes, [2, 3, 5, 7, 11, 13, 17, 19]);
/// ```
#[derive(Debug, Clone)]
pub struct PrimeNumbers {
    bound: Bound,
    candidate: u64,
    found: Vec<u64>,
    limit: DivisorLimit,
}

impl PrimeNumbers {
    /// Primes below `bound`, trying divisors up to √candidate.
    #[must_use]
    pub fn below(bound: Bound) -> Self {
        Self::with_limit(bound, DivisorLimit::default())
    }

    #[must_use]
    pub fn with_limit(bound: Bound, limit: DivisorLimit) -> Self {
        Self {
            bound,
            candidate: 2,
            found: Vec::new(),
            limit,
        }
    }

    fn is_prime(&self, n: u64) -> bool {
        match self.limit {
            DivisorLimit::All => self.found.iter().all(|&p| n % p != 0),
            DivisorLimit::SquareRoot => self
                .found
                .iter()
                .take_while(|&&p| p.saturating_mul(p) <= n)
                .all(|&p| n % p != 0),
        }
    }
}

impl Iterator for PrimeNumbers {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        while self.bound.admits(self.candidate) {
            let n = self.candidate;
            self.candidate += 1;
            if self.is_prime(n) {
                self.found.push(n);
                return Some(n);
            }
        }
        None
    }
}

impl FusedIterator for PrimeNumbers {}
