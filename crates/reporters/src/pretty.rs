//! Colorized console reporters.
//!
//! A failure renders the failing call and both outcomes:
//!
//! ```text
//!   2/2: kernel(2, 2)
//!     FAILED (should be Ok(5), was Ok(4))
//! ```
//!
//! A success renders its position and the actual outcome:
//!
//! ```text
//!   1/2: Ok(4)
//! ```

use std::{
    fmt::Debug,
    io::{self, Stdout, Write},
    marker::PhantomData,
};

use kerneltest_core::{ArgumentList, CallExpr, ParameterSequence, Reporter};
use log::warn;

use crate::style::Style;

/// Renders parameter set `index` as a kernel call.
pub(crate) fn render_call<S>(sequence: &S, index: usize) -> String
where
    S: ParameterSequence,
    S::Args: ArgumentList,
{
    match sequence.get(index) {
        Some(set) => CallExpr::new("kernel", &set.args).to_string(),
        None => "kernel(?)".to_string(),
    }
}

/// A fail reporter that prints the failing call and outcomes, then returns `false`.
///
/// After printing, the callback receives the actual and expected outcomes.
/// Output goes to stdout unless redirected with [`writer`](Self::writer).
pub struct PrettyPrintFailure<'a, S, A, F, W = Stdout> {
    sequence: &'a S,
    callback: F,
    out: W,
    style: Style,
    _actual: PhantomData<fn(&A)>,
}

/// A pass reporter that prints the actual outcome, then returns `true`.
///
/// After printing, the callback receives the actual outcome.
/// Output goes to stdout unless redirected with [`writer`](Self::writer).
pub struct PrettyPrintSuccess<'a, S, A, F, W = Stdout> {
    sequence: &'a S,
    callback: F,
    out: W,
    style: Style,
    _actual: PhantomData<fn(&A)>,
}

/// The callback of a [`PrettyPrintFailure`] built without one.
pub type IgnoreFailure<A, X> = fn(&A, &X);

/// The callback of a [`PrettyPrintSuccess`] built without one.
pub type IgnoreSuccess<A> = fn(&A);

fn ignore_failure<A, X>(_actual: &A, _expected: &X) {}

fn ignore_success<A>(_actual: &A) {}

/// Colorfully prints a failed result.
pub fn pretty_print_failure<S, A>(
    sequence: &S,
) -> PrettyPrintFailure<'_, S, A, IgnoreFailure<A, S::Outcome>>
where
    S: ParameterSequence,
{
    pretty_print_failure_with(sequence, ignore_failure::<A, S::Outcome>)
}

/// Colorfully prints a failed result, then calls `callback(actual, expected)`.
pub fn pretty_print_failure_with<S, A, F>(
    sequence: &S,
    callback: F,
) -> PrettyPrintFailure<'_, S, A, F>
where
    S: ParameterSequence,
    F: FnMut(&A, &S::Outcome),
{
    PrettyPrintFailure {
        sequence,
        callback,
        out: io::stdout(),
        style: Style::default(),
        _actual: PhantomData,
    }
}

/// Colorfully prints a successful result.
pub fn pretty_print_success<S, A>(sequence: &S) -> PrettyPrintSuccess<'_, S, A, IgnoreSuccess<A>>
where
    S: ParameterSequence,
{
    pretty_print_success_with(sequence, ignore_success::<A>)
}

/// Colorfully prints a successful result, then calls `callback(actual)`.
pub fn pretty_print_success_with<S, A, F>(
    sequence: &S,
    callback: F,
) -> PrettyPrintSuccess<'_, S, A, F>
where
    S: ParameterSequence,
    F: FnMut(&A),
{
    PrettyPrintSuccess {
        sequence,
        callback,
        out: io::stdout(),
        style: Style::default(),
        _actual: PhantomData,
    }
}

impl<'a, S, A, F, W> PrettyPrintFailure<'a, S, A, F, W> {
    /// Redirects the report to another writer.
    #[must_use]
    pub fn writer<W2: Write>(self, out: W2) -> PrettyPrintFailure<'a, S, A, F, W2> {
        PrettyPrintFailure {
            sequence: self.sequence,
            callback: self.callback,
            out,
            style: self.style,
            _actual: PhantomData,
        }
    }

    /// Sets the styling tokens.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl<'a, S, A, F, W> PrettyPrintSuccess<'a, S, A, F, W> {
    /// Redirects the report to another writer.
    #[must_use]
    pub fn writer<W2: Write>(self, out: W2) -> PrettyPrintSuccess<'a, S, A, F, W2> {
        PrettyPrintSuccess {
            sequence: self.sequence,
            callback: self.callback,
            out,
            style: self.style,
            _actual: PhantomData,
        }
    }

    /// Sets the styling tokens.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl<S, A, F, W> PrettyPrintFailure<'_, S, A, F, W>
where
    S: ParameterSequence,
    S::Args: ArgumentList,
    S::Outcome: Debug,
    A: Debug,
    W: Write,
{
    fn print(&mut self, index: usize, actual: &A, expected: &S::Outcome) -> io::Result<()> {
        let Style {
            bold,
            red,
            yellow,
            normal,
            ..
        } = self.style;
        let position = index + 1;
        let total = self.sequence.len();
        let call = render_call(self.sequence, index);

        writeln!(self.out, "  {yellow}{position}/{total}: {normal}{call}")?;
        write!(self.out, "    {bold}{red}FAILED{normal} ")?;
        writeln!(
            self.out,
            "(should be {bold}{expected:?}{normal}, was {bold}{actual:?}{normal})"
        )?;
        self.out.flush()
    }
}

impl<S, A, F, W> PrettyPrintSuccess<'_, S, A, F, W>
where
    S: ParameterSequence,
    A: Debug,
    W: Write,
{
    fn print(&mut self, index: usize, actual: &A) -> io::Result<()> {
        let Style {
            bold,
            green,
            yellow,
            normal,
            ..
        } = self.style;
        let position = index + 1;
        let total = self.sequence.len();

        write!(self.out, "  {yellow}{position}/{total}: {normal}")?;
        writeln!(self.out, "{bold}{green}{actual:?}{normal}")?;
        self.out.flush()
    }
}

impl<S, A, F, W> Reporter<S::Outcome, A> for PrettyPrintFailure<'_, S, A, F, W>
where
    S: ParameterSequence,
    S::Args: ArgumentList,
    S::Outcome: Debug,
    A: Debug,
    F: FnMut(&A, &S::Outcome),
    W: Write,
{
    fn report(&mut self, index: usize, actual: &A, expected: &S::Outcome) -> bool {
        if let Err(error) = self.print(index, actual, expected) {
            let position = index + 1;
            warn!("could not print failure report {position}: {error}");
        }
        (self.callback)(actual, expected);
        false
    }
}

impl<S, A, F, W> Reporter<S::Outcome, A> for PrettyPrintSuccess<'_, S, A, F, W>
where
    S: ParameterSequence,
    A: Debug,
    F: FnMut(&A),
    W: Write,
{
    fn report(&mut self, index: usize, actual: &A, _expected: &S::Outcome) -> bool {
        if let Err(error) = self.print(index, actual) {
            let position = index + 1;
            warn!("could not print success report {position}: {error}");
        }
        (self.callback)(actual);
        true
    }
}
