use std::fmt::Debug;

use kerneltest_core::{ArgumentList, ParameterSequence, Reporter};
use log::{debug, warn};

use crate::pretty::render_call;

/// A reporter that writes each verdict to the `log` facade.
///
/// [`LogReporter::mismatches`] logs at `warn` and returns `false`, so it fits
/// the fail slot of a check. [`LogReporter::matches`] logs at `debug` and
/// returns `true`, so it fits the pass slot.
#[derive(Debug)]
pub struct LogReporter<'a, S> {
    sequence: &'a S,
    passing: bool,
}

impl<'a, S> LogReporter<'a, S> {
    /// Logs every failure at `warn` level.
    #[must_use]
    pub fn mismatches(sequence: &'a S) -> Self {
        Self {
            sequence,
            passing: false,
        }
    }

    /// Logs every success at `debug` level.
    #[must_use]
    pub fn matches(sequence: &'a S) -> Self {
        Self {
            sequence,
            passing: true,
        }
    }
}

impl<S, A> Reporter<S::Outcome, A> for LogReporter<'_, S>
where
    S: ParameterSequence,
    S::Args: ArgumentList,
    S::Outcome: Debug,
    A: Debug,
{
    fn report(&mut self, index: usize, actual: &A, expected: &S::Outcome) -> bool {
        let position = index + 1;
        let total = self.sequence.len();
        let call = render_call(self.sequence, index);

        if self.passing {
            debug!("{position}/{total}: {call} returned {actual:?}");
        } else {
            warn!("{position}/{total}: {call} should be {expected:?}, was {actual:?}");
        }
        self.passing
    }
}
