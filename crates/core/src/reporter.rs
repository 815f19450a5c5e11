/// Receives the verdict for one parameter set during a check.
///
/// A check calls one reporter for every parameter set: the pass reporter when
/// the actual outcome met the expectation and the fail reporter when it did
/// not. The returned `bool` feeds the aggregate result of the check, and
/// returning `false` never stops the remaining parameter sets from being
/// reported.
///
/// Closures automatically implement `Reporter`, and a built-in impl for `()`
/// provides a silent reporter that always returns `true`.
///
/// # Example
///
/// ```rust
/// use kerneltest_core::Reporter;
///
/// let mut failures = Vec::new();
/// let mut fail = |index: usize, actual: &Result<i32, ()>, expected: &Result<i32, ()>| {
///     failures.push((index, *actual, *expected));
///     false
/// };
///
/// assert!(!fail.report(1, &Ok(4), &Ok(5)));
/// assert_eq!(failures, [(1, Ok(4), Ok(5))]);
/// ```
pub trait Reporter<X, A> {
    /// Reports the outcome at `index` and returns whether the check may still pass.
    fn report(&mut self, index: usize, actual: &A, expected: &X) -> bool;
}

/// Blanket implementation for reporter closures.
impl<X, A, F> Reporter<X, A> for F
where
    F: FnMut(usize, &A, &X) -> bool,
{
    fn report(&mut self, index: usize, actual: &A, expected: &X) -> bool {
        self(index, actual, expected)
    }
}

/// A silent reporter that always returns `true`.
impl<X, A> Reporter<X, A> for () {
    fn report(&mut self, _index: usize, _actual: &A, _expected: &X) -> bool {
        true
    }
}
