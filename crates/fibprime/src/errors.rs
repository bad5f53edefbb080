//! Error handling and exit codes.

use fibprime_core::exit_codes;
use fibprime_core::FibPrimeError;

/// Map an application error to a process exit code.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<FibPrimeError>() {
        Some(FibPrimeError::Config(_) | FibPrimeError::BoundTooLarge { .. }) => {
            exit_codes::ERROR_CONFIG
        }
        Some(FibPrimeError::Mismatch) => exit_codes::ERROR_MISMATCH,
        Some(FibPrimeError::Calculation(_)) | None => exit_codes::ERROR_GENERIC,
    }
}
