//! Prime generator trait and its implementations.

use crate::bound::Bound;
use crate::error::FibPrimeError;
use crate::primes::{DivisorLimit, PrimeNumbers};
use crate::sieve::sieve_below;

/// Strategy for producing the primes below a bound.
///
/// Every implementation must return the same increasing sequence for the
/// same bound.
pub trait PrimeGenerator: Send + Sync {
    /// All primes strictly below `bound`, in increasing order.
    fn primes_below(&self, bound: Bound) -> Result<Vec<u64>, FibPrimeError>;

    /// Get the name of this generator.
    fn name(&self) -> &str;
}

/// Incremental trial division over the lazy [`PrimeNumbers`] iterator.
#[derive(Debug, Clone, Copy)]
pub struct TrialDivision {
    limit: DivisorLimit,
}

impl TrialDivision {
    /// Divide by every prime found so far.
    #[must_use]
    pub fn exhaustive() -> Self {
        Self {
            limit: DivisorLimit::All,
        }
    }

    /// Divide only by primes up to √candidate.
    #[must_use]
    pub fn bounded() -> Self {
        Self {
            limit: DivisorLimit::SquareRoot,
        }
    }
}

impl PrimeGenerator for TrialDivision {
    fn primes_below(&self, bound: Bound) -> Result<Vec<u64>, FibPrimeError> {
        Ok(PrimeNumbers::with_limit(bound, self.limit).collect())
    }

    fn name(&self) -> &'static str {
        match self.limit {
            DivisorLimit::All => "TrialDivision",
            DivisorLimit::SquareRoot => "BoundedTrialDivision",
        }
    }
}

/// Eager sieve of Eratosthenes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SieveOfEratosthenes;

impl SieveOfEratosthenes {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PrimeGenerator for SieveOfEratosthenes {
    fn primes_below(&self, bound: Bound) -> Result<Vec<u64>, FibPrimeError> {
        sieve_below(bound)
    }

    fn name(&self) -> &'static str {
        "SieveOfEratosthenes"
    }
}
