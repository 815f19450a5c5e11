use std::collections::VecDeque;

use crate::{error::Error, parameters::Parameters};

/// An ordered collection of parameter sets driving one permutation run.
///
/// The sequence decides the shape of the results: a fixed-length array of
/// parameter sets produces a fixed-length array of results, while dynamically
/// sized collections produce a `Vec`. The same ordering is kept either way.
pub trait ParameterSequence {
    /// The expected outcome type shared by every parameter set.
    type Outcome;

    /// The kernel input tuple shared by every parameter set.
    type Args;

    /// The result container that mirrors this sequence's storage.
    type Results<R>: ResultStorage<R>;

    /// Returns the number of parameter sets.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no parameter sets.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the parameter sets in order.
    fn iter(&self) -> impl Iterator<Item = &Parameters<Self::Outcome, Self::Args>>;

    /// Returns the parameter set at `index`, if any.
    fn get(&self, index: usize) -> Option<&Parameters<Self::Outcome, Self::Args>>;
}

/// Storage for the outcomes of one permutation run.
pub trait ResultStorage<R>: Sized {
    /// Builds the container from one filled slot per parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResultShape`] if a fixed-size container cannot hold
    /// exactly `slots.len()` results.
    fn from_slots(slots: Vec<R>) -> Result<Self, Error>;

    /// Returns the results in sequence order.
    fn as_slice(&self) -> &[R];
}

impl<R, const N: usize> ResultStorage<R> for [R; N] {
    fn from_slots(slots: Vec<R>) -> Result<Self, Error> {
        let shape = Error::ResultShape {
            expected: N,
            actual: slots.len(),
        };
        slots.try_into().map_err(|_| shape)
    }

    fn as_slice(&self) -> &[R] {
        self
    }
}

impl<R> ResultStorage<R> for Vec<R> {
    fn from_slots(slots: Vec<R>) -> Result<Self, Error> {
        Ok(slots)
    }

    fn as_slice(&self) -> &[R] {
        self
    }
}

impl<O, A, const N: usize> ParameterSequence for [Parameters<O, A>; N] {
    type Outcome = O;
    type Args = A;
    type Results<R> = [R; N];

    fn len(&self) -> usize {
        N
    }

    fn iter(&self) -> impl Iterator<Item = &Parameters<O, A>> {
        self.as_slice().iter()
    }

    fn get(&self, index: usize) -> Option<&Parameters<O, A>> {
        self.as_slice().get(index)
    }
}

impl<O, A> ParameterSequence for Vec<Parameters<O, A>> {
    type Outcome = O;
    type Args = A;
    type Results<R> = Vec<R>;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn iter(&self) -> impl Iterator<Item = &Parameters<O, A>> {
        self.as_slice().iter()
    }

    fn get(&self, index: usize) -> Option<&Parameters<O, A>> {
        self.as_slice().get(index)
    }
}

impl<O, A> ParameterSequence for Box<[Parameters<O, A>]> {
    type Outcome = O;
    type Args = A;
    type Results<R> = Vec<R>;

    fn len(&self) -> usize {
        <[Parameters<O, A>]>::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = &Parameters<O, A>> {
        <[Parameters<O, A>]>::iter(self)
    }

    fn get(&self, index: usize) -> Option<&Parameters<O, A>> {
        <[Parameters<O, A>]>::get(self, index)
    }
}

impl<O, A> ParameterSequence for VecDeque<Parameters<O, A>> {
    type Outcome = O;
    type Args = A;
    type Results<R> = Vec<R>;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = &Parameters<O, A>> {
        VecDeque::iter(self)
    }

    fn get(&self, index: usize) -> Option<&Parameters<O, A>> {
        VecDeque::get(self, index)
    }
}
