//! # fibprime-core
//!
//! Prime numbers, Fibonacci numbers and Fibonacci primes below a bound.
//! Sequences are lazy iterators; the intersection is a sorted set.

pub mod bound;
pub mod constants;
pub mod error;
pub mod fibonacci;
pub mod generator;
pub mod intersection;
pub mod primes;
pub mod registry;
pub(crate) mod sieve;

// Re-exports
pub use bound::Bound;
pub use constants::{exit_codes, DEFAULT_BOUND, FIB_PRIME_INDICES, MAX_SIEVE_BOUND};
pub use error::FibPrimeError;
pub use fibonacci::Fibonacci;
pub use generator::{PrimeGenerator, SieveOfEratosthenes, TrialDivision};
pub use intersection::{intersect, Intersection};
pub use primes::{DivisorLimit, PrimeNumbers};
pub use registry::{DefaultFactory, GeneratorFactory};

use std::collections::BTreeSet;

/// Fibonacci numbers strictly below `n`.
///
/// # Example
/// ```
/// let fibs: Vec<u64> = fibprime_core::fibonacci(3).collect();
/// assert_eq!(fibs, [0, 1, 1, 2]);
/// ```
#[must_use]
pub fn fibonacci(n: i64) -> Fibonacci {
    Fibonacci::below(Bound::new(n))
}

/// Primes strictly below `n`, in increasing order.
///
/// # Example
/// ```
/// let primes: Vec<u64> = fibprime_core::prime_numbers(12).collect();
/// assert_eq!(primes, [2, 3, 5, 7, 11]);
/// ```
#[must_use]
pub fn prime_numbers(n: i64) -> PrimeNumbers {
    PrimeNumbers::below(Bound::new(n))
}

/// Numbers below `n` that are both prime and Fibonacci.
///
/// Non-positive bounds give an empty set. For a report that also carries
/// the set sizes, or to pick a prime generator, use [`intersect`].
///
/// # Example
/// ```
/// let fp = fibprime_core::fibonacci_primes(100);
/// assert_eq!(fp.into_iter().collect::<Vec<_>>(), [2, 3, 5, 13, 89]);
/// ```
#[must_use]
pub fn fibonacci_primes(n: i64) -> BTreeSet<u64> {
    let fibs: BTreeSet<u64> = fibonacci(n).collect();
    let primes: BTreeSet<u64> = prime_numbers(n).collect();
    intersection::intersect_sets(&primes, &fibs)
}
