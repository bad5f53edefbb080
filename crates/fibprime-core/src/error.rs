//! Error type shared by generators, the registry and orchestration.

/// Error type for prime generation and intersection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibPrimeError {
    /// Configuration error (unknown generator, invalid option).
    #[error("configuration error: {0}")]
    Config(String),

    /// The bound exceeds what a generator can handle.
    #[error("bound {bound} exceeds the maximum of {max} for this generator")]
    BoundTooLarge {
        /// Requested bound.
        bound: u64,
        /// Largest accepted bound.
        max: u64,
    },

    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Results from different generators don't match.
    #[error("result mismatch between generators")]
    Mismatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            FibPrimeError::Config("unknown generator: x".into()).to_string(),
            "configuration error: unknown generator: x"
        );
        assert_eq!(
            FibPrimeError::BoundTooLarge { bound: 10, max: 5 }.to_string(),
            "bound 10 exceeds the maximum of 5 for this generator"
        );
        assert_eq!(
            FibPrimeError::Mismatch.to_string(),
            "result mismatch between generators"
        );
    }
}
