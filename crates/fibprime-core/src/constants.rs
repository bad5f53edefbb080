//! Constants for bounds, generator limits and exit codes.

/// Default bound used by the CLI when none is given.
pub const DEFAULT_BOUND: i64 = 10_000;

/// Largest bound the sieve will accept.
///
/// The sieve allocates one flag per integer below the bound, so this caps
/// its allocation at roughly 100 MB.
pub const MAX_SIEVE_BOUND: u64 = 100_000_000;

/// Indices into the Fibonacci sequence whose values are known to be prime.
///
/// F(3) = 2, F(4) = 3, F(5) = 5, F(7) = 13, F(11) = 89, ...
/// Every Fibonacci prime except F(4) = 3 has a prime index.
pub const FIB_PRIME_INDICES: [usize; 10] = [3, 4, 5, 7, 11, 13, 17, 23, 29, 43];

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: u8 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: u8 = 1;
    /// Generator results did not match during cross-validation.
    pub const ERROR_MISMATCH: u8 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: u8 = 4;
}
