//! The permutation engine.
//!
//! A [`Permuter`] owns a [`ParameterSequence`] and runs a [`Kernel`] once per
//! parameter set, either in sequence order on the calling thread or fanned
//! out across a rayon thread pool. [`Permuter::check`] then walks the
//! sequence and the results in lockstep, compares each outcome with its
//! expectation, and hands the verdict to a [`Reporter`].

use log::debug;

use crate::{
    compare::outcome_matches,
    error::Error,
    hook::Hook,
    outcome::{Outcome, OutcomeEq},
    parameters::Kernel,
    reporter::Reporter,
    sequence::{ParameterSequence, ResultStorage},
};

/// How a permuter schedules kernel invocations.
///
/// The mode is fixed when the permuter is constructed. Both modes produce the
/// same results in the same order; only the order in which kernels run
/// differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// One invocation at a time, in sequence order, on the calling thread.
    #[default]
    Sequential,

    /// Invocations are independent and may run on any rayon worker thread.
    ///
    /// Without the `parallel` feature this falls back to [`Sequential`](Self::Sequential).
    Parallel,
}

impl Execution {
    /// Returns the mode that will actually run, given the enabled features.
    #[must_use]
    pub fn effective(self) -> Self {
        if cfg!(feature = "parallel") {
            self
        } else {
            Self::Sequential
        }
    }
}

/// Runs a kernel over every parameter set of a sequence and checks the results.
///
/// Construct with [`st_permute_parameters`] or [`mt_permute_parameters`], and
/// attach instrumentation with [`with_hooks`](Self::with_hooks) or the
/// `_with_hooks` factories.
#[derive(Debug, Clone)]
pub struct Permuter<S, H = ()> {
    sequence: S,
    execution: Execution,
    hooks: H,
}

/// Creates a permuter that invokes kernels sequentially.
pub fn st_permute_parameters<S: ParameterSequence>(sequence: S) -> Permuter<S> {
    Permuter::new(sequence, Execution::Sequential, ())
}

/// Creates a permuter that invokes kernels in parallel.
///
/// Falls back to sequential execution when the `parallel` feature is disabled.
pub fn mt_permute_parameters<S: ParameterSequence>(sequence: S) -> Permuter<S> {
    Permuter::new(sequence, Execution::Parallel, ())
}

/// Creates a sequential permuter that runs `hooks` around each invocation.
///
/// Hooks must be `Sync` even here, since [`Permuter::call`] serves both
/// execution modes. Record through a `Mutex` or atomics rather than a `RefCell`:
///
/// ```rust
/// use std::sync::Mutex;
///
/// use kerneltest_core::{Hook, Parameters, st_permute_parameters_with_hooks};
///
/// struct Visited(Mutex<Vec<usize>>);
///
/// impl<A, R> Hook<A, R> for Visited {
///     fn before(&self, index: usize, _args: &A) {
///         self.0.lock().unwrap().push(index);
///     }
/// }
///
/// let visited = Visited(Mutex::new(Vec::new()));
/// let permuter = st_permute_parameters_with_hooks(
///     [Parameters::new(Some(2_u8), (1_u8,)), Parameters::new(Some(3), (2,))],
///     &visited,
/// );
///
/// let results = permuter.call(|x: &u8| x.checked_add(1))?;
///
/// assert_eq!(results, [Some(2), Some(3)]);
/// assert_eq!(*visited.0.lock().unwrap(), [0, 1]);
/// # Ok::<(), kerneltest_core::Error>(())
/// ```
pub fn st_permute_parameters_with_hooks<S: ParameterSequence, H>(
    sequence: S,
    hooks: H,
) -> Permuter<S, H> {
    Permuter::new(sequence, Execution::Sequential, hooks)
}

/// Creates a parallel permuter that runs `hooks` around each invocation.
///
/// Hooks are shared by every rayon worker, so they must be `Sync`.
pub fn mt_permute_parameters_with_hooks<S: ParameterSequence, H>(
    sequence: S,
    hooks: H,
) -> Permuter<S, H> {
    Permuter::new(sequence, Execution::Parallel, hooks)
}

impl<S: ParameterSequence, H> Permuter<S, H> {
    /// Creates a permuter from a sequence, an execution mode, and hooks.
    pub fn new(sequence: S, execution: Execution, hooks: H) -> Self {
        Self {
            sequence,
            execution,
            hooks,
        }
    }

    /// Replaces the hooks run around each kernel invocation.
    #[must_use]
    pub fn with_hooks<H2>(self, hooks: H2) -> Permuter<S, H2> {
        Permuter {
            sequence: self.sequence,
            execution: self.execution,
            hooks,
        }
    }

    /// Returns the parameter sequence this permuter was constructed with.
    pub fn parameter_sequence(&self) -> &S {
        &self.sequence
    }

    /// Returns the configured execution mode.
    pub fn execution(&self) -> Execution {
        self.execution
    }

    /// Returns `true` if this permuter was constructed as multithreaded.
    pub fn is_multithreaded(&self) -> bool {
        self.execution == Execution::Parallel
    }

    /// Returns the number of parameter sets.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns `true` if the sequence holds no parameter sets.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Returns the expected outcome of parameter set `index`.
    pub fn outcome(&self, index: usize) -> Option<&S::Outcome> {
        self.sequence.get(index).map(|set| &set.outcome)
    }

    /// Returns the kernel inputs of parameter set `index`.
    pub fn args(&self, index: usize) -> Option<&S::Args> {
        self.sequence.get(index).map(|set| &set.args)
    }

    /// Invokes `kernel` once per parameter set and collects the outcomes.
    ///
    /// The results have one slot per parameter set, in sequence order, and the
    /// same shape as the sequence: `[R; N]` for arrays and `Vec<R>` otherwise.
    /// The kernel's outcome type must be comparable with the sequence's
    /// expected outcome type.
    ///
    /// A panicking kernel propagates to the caller. Sequentially, no further
    /// parameter sets are run; in parallel, rayon lets already running
    /// invocations finish before re-raising the panic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if the result or index storage cannot be
    /// allocated. This is the only error `call` produces, and it comes from
    /// `try_reserve_exact` before any kernel runs.
    pub fn call<K>(&self, kernel: K) -> Result<S::Results<K::Output>, Error>
    where
        K: Kernel<S::Args> + Sync,
        K::Output: Outcome + Send,
        S::Outcome: OutcomeEq<K::Output>,
        S::Args: Sync,
        H: Hook<S::Args, K::Output>,
    {
        let len = self.sequence.len();

        let mut index = Vec::new();
        index.try_reserve_exact(len)?;
        index.extend(self.sequence.iter().map(|set| &set.args));

        let mut slots = Vec::new();
        slots.try_reserve_exact(len)?;

        let execution = self.execution.effective();
        debug!("permuting kernel over {len} parameter sets ({execution:?})");

        let hooks = &self.hooks;
        let invoke = |i: usize, args: &S::Args| {
            hooks.before(i, args);
            let outcome = kernel.invoke(args);
            hooks.after(i, args, &outcome);
            outcome
        };

        match execution {
            Execution::Sequential => {
                let invocations = index.iter().enumerate();
                slots.extend(invocations.map(|(i, &args)| invoke(i, args)));
            }
            Execution::Parallel => fan_out(&index, &invoke, &mut slots),
        }

        ResultStorage::from_slots(slots)
    }

    /// Checks results against the expected outcomes of the sequence.
    ///
    /// Each parameter set is reported exactly once, in order: to `pass` when
    /// its result meets the expectation and to `fail` otherwise. Returns
    /// `true` only if every reporter call returned `true`, so an empty
    /// sequence always checks out.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] without calling any reporter if
    /// `results` does not have one entry per parameter set.
    pub fn check<A, F, P>(&self, results: &[A], mut fail: F, mut pass: P) -> Result<bool, Error>
    where
        A: Outcome,
        S::Outcome: Outcome + OutcomeEq<A>,
        F: Reporter<S::Outcome, A>,
        P: Reporter<S::Outcome, A>,
    {
        let expected = self.sequence.len();
        if results.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: results.len(),
            });
        }

        let mut all_ok = true;
        let mut matched = 0;

        for (index, (set, actual)) in self.sequence.iter().zip(results).enumerate() {
            let ok = if outcome_matches(actual, &set.outcome) {
                matched += 1;
                pass.report(index, actual, &set.outcome)
            } else {
                fail.report(index, actual, &set.outcome)
            };
            all_ok &= ok;
        }

        debug!(
            "checked {expected} results: {matched} matched, {} mismatched",
            expected - matched
        );

        Ok(all_ok)
    }

    /// Checks results, reporting only the mismatches.
    ///
    /// This is a convenience wrapper around [`check`](Self::check) that uses a
    /// silent pass reporter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if `results` does not have one entry
    /// per parameter set.
    pub fn check_failures<A, F>(&self, results: &[A], fail: F) -> Result<bool, Error>
    where
        A: Outcome,
        S::Outcome: Outcome + OutcomeEq<A>,
        F: Reporter<S::Outcome, A>,
    {
        self.check(results, fail, ())
    }

    /// Invokes `kernel` over the sequence and checks the results.
    ///
    /// # Errors
    ///
    /// Returns an error if invoking or checking fails.
    pub fn run<K, F, P>(&self, kernel: K, fail: F, pass: P) -> Result<bool, Error>
    where
        K: Kernel<S::Args> + Sync,
        K::Output: Outcome + Send,
        S::Outcome: Outcome + OutcomeEq<K::Output>,
        S::Args: Sync,
        H: Hook<S::Args, K::Output>,
        F: Reporter<S::Outcome, K::Output>,
        P: Reporter<S::Outcome, K::Output>,
    {
        let results = self.call(kernel)?;
        self.check(results.as_slice(), fail, pass)
    }
}

/// Runs `invoke` for every indexed parameter set on the rayon pool.
#[cfg(feature = "parallel")]
fn fan_out<A, R, F>(index: &[&A], invoke: &F, slots: &mut Vec<R>)
where
    A: Sync,
    R: Send,
    F: Fn(usize, &A) -> R + Sync,
{
    use rayon::prelude::*;

    index
        .par_iter()
        .enumerate()
        .map(|(i, &args)| invoke(i, args))
        .collect_into_vec(slots);
}

#[cfg(not(feature = "parallel"))]
fn fan_out<A, R, F>(index: &[&A], invoke: &F, slots: &mut Vec<R>)
where
    F: Fn(usize, &A) -> R,
{
    slots.extend(index.iter().enumerate().map(|(i, &args)| invoke(i, args)));
}
