use kerneltest_core::Reporter;

/// A reporter that records the index of every parameter set it sees.
///
/// Pass `&mut recorder` to a check, then inspect [`Recorder::indices`].
///
/// ```rust
/// use kerneltest_core::{Parameters, st_permute_parameters};
/// use kerneltest_reporters::Recorder;
///
/// let permuter = st_permute_parameters([
///     Parameters::new(Some(2_u8), (1_u8,)),
///     Parameters::new(Some(3), (2,)),
/// ]);
/// let results = permuter.call(|x: &u8| x.checked_add(1))?;
///
/// let mut failed = Recorder::failing();
/// let mut passed = Recorder::passing();
/// let all_ok = permuter.check(&results, &mut failed, &mut passed)?;
///
/// assert!(all_ok);
/// assert!(failed.is_empty());
/// assert_eq!(passed.indices(), [0, 1]);
/// # Ok::<(), kerneltest_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorder {
    indices: Vec<usize>,
    verdict: bool,
}

impl Recorder {
    /// Creates a recorder that returns `true` for every report.
    #[must_use]
    pub fn passing() -> Self {
        Self {
            indices: Vec::new(),
            verdict: true,
        }
    }

    /// Creates a recorder that returns `false` for every report.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            indices: Vec::new(),
            verdict: false,
        }
    }

    /// Returns the recorded indices in report order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl<X, A> Reporter<X, A> for &mut Recorder {
    fn report(&mut self, index: usize, _actual: &A, _expected: &X) -> bool {
        self.indices.push(index);
        self.verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut recorder = Recorder::failing();
        let mut reporter = &mut recorder;

        assert!(!Reporter::<u8, u8>::report(&mut reporter, 3, &0, &0));
        assert!(!Reporter::<u8, u8>::report(&mut reporter, 1, &0, &0));

        assert_eq!(recorder.indices(), [3, 1]);
        assert_eq!(recorder.len(), 2);
    }
}
