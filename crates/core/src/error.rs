use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur while permuting a kernel or checking its results.
///
/// A result that does not match its expectation is not an error. Mismatches
/// are handed to the fail [`Reporter`](crate::Reporter) instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The results passed to a check do not line up with the parameter sequence.
    #[error(
        "invalid argument: {actual} results to check but the parameter sequence has {expected}"
    )]
    LengthMismatch { expected: usize, actual: usize },

    /// The result or index storage could not be allocated.
    #[error("failed to allocate permutation storage")]
    Allocation(#[from] TryReserveError),

    /// A fixed-size result container received the wrong number of results.
    #[error("result container holds {expected} slots but {actual} results were produced")]
    ResultShape { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_message() {
        let error = Error::LengthMismatch {
            expected: 2,
            actual: 1,
        };

        assert_eq!(
            error.to_string(),
            "invalid argument: 1 results to check but the parameter sequence has 2"
        );
    }

    #[test]
    fn allocation_error_converts() {
        let reserve_error = Vec::<u64>::new().try_reserve_exact(usize::MAX).unwrap_err();

        let error = Error::from(reserve_error);

        assert!(matches!(error, Error::Allocation(_)));
        assert!(std::error::Error::source(&error).is_some());
    }
}
