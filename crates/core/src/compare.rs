use crate::outcome::{Outcome, OutcomeEq};

/// Returns `true` if a kernel's actual outcome meets the expected outcome.
///
/// When both sides are successes the payloads are compared, and an expected
/// [`Valueless`](crate::Valueless) payload accepts any actual payload. If
/// either side is a failure the two outcomes must be structurally equal.
pub fn outcome_matches<A, X>(actual: &A, expected: &X) -> bool
where
    A: Outcome,
    X: Outcome + OutcomeEq<A>,
{
    expected.outcome_eq(actual)
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use super::*;
    use crate::outcome::{Valueless, present, succeeded};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Errc {
        NoSuchFile,
        Busy,
    }

    #[test]
    fn wildcard_accepts_any_success() {
        let expected = succeeded::<Errc>();

        assert!(outcome_matches(&Ok::<_, Errc>(4), &expected));
        assert!(outcome_matches(&Ok::<_, Errc>("text"), &expected));
        assert!(outcome_matches(&Ok::<_, Errc>(()), &expected));
        assert!(outcome_matches(&Ok::<_, Errc>(Valueless), &expected));
    }

    #[test]
    fn wildcard_still_rejects_failures() {
        let expected = succeeded::<Errc>();

        assert!(!outcome_matches(&Err::<i32, _>(Errc::Busy), &expected));
    }

    #[test]
    fn failure_expectation_needs_same_error() {
        let expected: Result<Valueless, Errc> = Err(Errc::NoSuchFile);

        let missing = Err::<File, _>(Errc::NoSuchFile);
        let busy = Err::<File, _>(Errc::Busy);

        assert!(outcome_matches(&missing, &expected));
        assert!(!outcome_matches(&busy, &expected));
        assert!(!outcome_matches(&Ok::<u8, _>(1), &expected));
    }

    #[test]
    fn payload_expectation_needs_equal_payload() {
        let expected: Result<i32, Errc> = Ok(5);

        assert!(outcome_matches(&Ok::<i32, Errc>(5), &expected));
        assert!(!outcome_matches(&Ok::<i32, Errc>(4), &expected));
    }

    #[test]
    fn optional_wildcard() {
        assert!(outcome_matches(&Some(9_u64), &present()));
        assert!(!outcome_matches(&None::<u64>, &present()));
        assert!(outcome_matches(&None::<u64>, &None::<Valueless>));
    }
}
