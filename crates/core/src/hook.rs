use std::fmt::Debug;

use log::trace;

use crate::parameters::{ArgumentList, CallExpr};

/// Instrumentation run around every kernel invocation.
///
/// Hooks are shared by all worker threads of a parallel run, so they only get
/// `&self` and must be `Sync`. The bound holds for sequential permuters too,
/// so keep per-call state behind a `Mutex` or atomics. Both methods default to
/// doing nothing.
///
/// `()` is the empty hook. Pairs and triples of hooks run in order, `before`
/// front to back and `after` back to front.
pub trait Hook<A, R>: Sync {
    /// Called with the inputs of parameter set `index` before the kernel runs.
    fn before(&self, _index: usize, _args: &A) {}

    /// Called with the kernel's outcome for parameter set `index`.
    fn after(&self, _index: usize, _args: &A, _outcome: &R) {}
}

impl<A, R> Hook<A, R> for () {}

impl<A, R, H> Hook<A, R> for &H
where
    H: Hook<A, R> + ?Sized,
{
    fn before(&self, index: usize, args: &A) {
        (**self).before(index, args);
    }

    fn after(&self, index: usize, args: &A, outcome: &R) {
        (**self).after(index, args, outcome);
    }
}

impl<A, R, H1, H2> Hook<A, R> for (H1, H2)
where
    H1: Hook<A, R>,
    H2: Hook<A, R>,
{
    fn before(&self, index: usize, args: &A) {
        self.0.before(index, args);
        self.1.before(index, args);
    }

    fn after(&self, index: usize, args: &A, outcome: &R) {
        self.1.after(index, args, outcome);
        self.0.after(index, args, outcome);
    }
}

impl<A, R, H1, H2, H3> Hook<A, R> for (H1, H2, H3)
where
    H1: Hook<A, R>,
    H2: Hook<A, R>,
    H3: Hook<A, R>,
{
    fn before(&self, index: usize, args: &A) {
        self.0.before(index, args);
        self.1.before(index, args);
        self.2.before(index, args);
    }

    fn after(&self, index: usize, args: &A, outcome: &R) {
        self.2.after(index, args, outcome);
        self.1.after(index, args, outcome);
        self.0.after(index, args, outcome);
    }
}

/// Traces every kernel call and its outcome at `trace` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHook;

impl<A, R> Hook<A, R> for LogHook
where
    A: ArgumentList,
    R: Debug,
{
    fn before(&self, index: usize, args: &A) {
        trace!("[{index}] calling {}", CallExpr::new("kernel", args));
    }

    fn after(&self, index: usize, _args: &A, outcome: &R) {
        trace!("[{index}] kernel returned {outcome:?}");
    }
}
