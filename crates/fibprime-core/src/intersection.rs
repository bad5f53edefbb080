//! Intersection of the Fibonacci numbers and the primes below a bound.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::bound::Bound;
use crate::error::FibPrimeError;
use crate::fibonacci::Fibonacci;
use crate::generator::PrimeGenerator;

/// Fibonacci primes below a bound, with the sizes of the sets intersected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Intersection {
    /// Exclusive upper bound.
    pub bound: Bound,
    /// Name of the prime generator used.
    pub algorithm: String,
    /// Distinct primes below the bound.
    pub primes_considered: usize,
    /// Distinct Fibonacci numbers below the bound.
    pub fibonaccis_considered: usize,
    /// Values that are both prime and Fibonacci.
    pub values: BTreeSet<u64>,
}

/// Intersect the Fibonacci numbers below `bound` with the primes from `generator`.
pub fn intersect(
    generator: &dyn PrimeGenerator,
    bound: Bound,
) -> Result<Intersection, FibPrimeError> {
    let primes: BTreeSet<u64> = generator.primes_below(bound)?.into_iter().collect();
    let fibs: BTreeSet<u64> = Fibonacci::below(bound).collect();
    let values = intersect_sets(&primes, &fibs);

    Ok(Intersection {
        bound,
        algorithm: generator.name().to_string(),
        primes_considered: primes.len(),
        fibonaccis_considered: fibs.len(),
        values,
    })
}

pub(crate) fn intersect_sets(primes: &BTreeSet<u64>, fibs: &BTreeSet<u64>) -> BTreeSet<u64> {
    tracing::info!(
        "Intersecting {} primes with {} fibonaccis.",
        primes.len(),
        fibs.len()
    );
    primes.intersection(fibs).copied().collect()
}
