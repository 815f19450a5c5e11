use std::fmt;

/// A success/failure container the engine can inspect and compare.
///
/// The engine only needs three capabilities from an outcome: whether it holds
/// a value, access to that value, and a way to discard the payload while
/// keeping the shape. Implemented for the three outcome shapes a kernel can
/// return:
///
/// - `Result<T, E>`: a value or an error
/// - `Option<T>`: a value or nothing, where nothing is not an error
/// - `Result<(), E>`: an error or nothing, where success carries no payload
pub trait Outcome {
    /// The payload carried on success.
    type Value;

    /// The same outcome shape carrying a different payload.
    type Rebind<U>: Outcome<Value = U>;

    /// Returns `true` if this outcome is a success.
    fn has_value(&self) -> bool;

    /// Returns the success payload, if any.
    fn value(&self) -> Option<&Self::Value>;

    /// Discards the payload, keeping only success or failure.
    ///
    /// Useful for adapting a kernel whose outcome should only be checked for
    /// success against a [`Valueless`] expectation.
    #[must_use]
    fn into_valueless(self) -> Self::Rebind<Valueless>;
}

impl<T, E> Outcome for Result<T, E> {
    type Value = T;
    type Rebind<U> = Result<U, E>;

    fn has_value(&self) -> bool {
        self.is_ok()
    }

    fn value(&self) -> Option<&T> {
        self.as_ref().ok()
    }

    fn into_valueless(self) -> Result<Valueless, E> {
        self.map(|_| Valueless)
    }
}

impl<T> Outcome for Option<T> {
    type Value = T;
    type Rebind<U> = Option<U>;

    fn has_value(&self) -> bool {
        self.is_some()
    }

    fn value(&self) -> Option<&T> {
        self.as_ref()
    }

    fn into_valueless(self) -> Option<Valueless> {
        self.map(|_| Valueless)
    }
}

/// Payload of an expectation that only asserts success.
///
/// `Valueless` compares equal to every payload, so an expected `Ok(Valueless)`
/// is met by any `Ok(_)` and an expected `Some(Valueless)` by any `Some(_)`.
/// Failures are still compared structurally.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Valueless;

impl<T: ?Sized> PartialEq<T> for Valueless {
    fn eq(&self, _other: &T) -> bool {
        true
    }
}

impl Eq for Valueless {}

impl fmt::Display for Valueless {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<any value>")
    }
}

/// Returns the valueless success sentinel for a value-or-error expectation.
pub fn succeeded<E>() -> Result<Valueless, E> {
    Ok(Valueless)
}

/// Returns the valueless success sentinel for an optional expectation.
#[must_use]
pub fn present() -> Option<Valueless> {
    Some(Valueless)
}

/// Structural equality between an expected outcome and an actual one.
///
/// Both sides must share a shape and a failure representation. Payloads are
/// compared with `PartialEq<Actual payload>`, which lets an expectation with a
/// [`Valueless`] payload accept any success.
pub trait OutcomeEq<Actual: ?Sized> {
    /// Returns `true` if `actual` meets this expectation.
    fn outcome_eq(&self, actual: &Actual) -> bool;
}

impl<T, U, E> OutcomeEq<Result<U, E>> for Result<T, E>
where
    T: PartialEq<U>,
    E: PartialEq,
{
    fn outcome_eq(&self, actual: &Result<U, E>) -> bool {
        match (self, actual) {
            (Ok(expected), Ok(actual)) => expected == actual,
            (Err(expected), Err(actual)) => expected == actual,
            _ => false,
        }
    }
}

impl<T, U> OutcomeEq<Option<U>> for Option<T>
where
    T: PartialEq<U>,
{
    fn outcome_eq(&self, actual: &Option<U>) -> bool {
        match (self, actual) {
            (Some(expected), Some(actual)) => expected == actual,
            (None, None) => true,
            _ => false,
        }
    }
}
