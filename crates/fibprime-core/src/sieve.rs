//! Sieve of Eratosthenes.

use crate::bound::Bound;
use crate::constants::MAX_SIEVE_BOUND;
use crate::error::FibPrimeError;

/// Eagerly compute every prime below `bound`.
///
/// Allocates one flag per integer below the bound and refuses bounds above
/// [`MAX_SIEVE_BOUND`].
#[allow(clippy::cast_possible_truncation)]
pub fn sieve_below(bound: Bound) -> Result<Vec<u64>, FibPrimeError> {
    let n = bound.get();
    if n > MAX_SIEVE_BOUND {
        return Err(FibPrimeError::BoundTooLarge {
            bound: n,
            max: MAX_SIEVE_BOUND,
        });
    }
    if n <= 2 {
        return Ok(Vec::new());
    }

    // n <= MAX_SIEVE_BOUND, which fits in usize on every supported target.
    let n = n as usize;
    let mut composite = vec![false; n];
    let mut i = 2;
    while i * i < n {
        if !composite[i] {
            for multiple in (i * i..n).step_by(i) {
                composite[multiple] = true;
            }
        }
        i += 1;
    }

    Ok((2..n)
        .filter(|&k| !composite[k])
        .map(|k| k as u64)
        .collect())
}
