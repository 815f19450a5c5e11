//! A parameter-permutation engine for test kernels.
//!
//! Instead of writing one assertion per input combination, a test describes a
//! sequence of parameter sets, each pairing the kernel inputs with the outcome
//! the kernel should produce. The engine runs the kernel once per set and
//! checks every outcome against its expectation:
//!
//! - [`Parameters`]: the expected outcome and inputs for one kernel call
//! - [`ParameterSequence`]: an ordered collection of parameter sets, either a
//!   fixed-size array or a dynamically sized collection
//! - [`Permuter`]: invokes a [`Kernel`] over a sequence, sequentially or in
//!   parallel, and checks the results
//! - [`Outcome`]: the success/failure shapes a kernel can return
//! - [`Reporter`]: receives the pass/fail verdict for each parameter set
//! - [`Hook`]: instrumentation run around each kernel invocation
//!
//! # Example
//!
//! ```rust
//! use kerneltest_core::{Parameters, st_permute_parameters};
//!
//! let permuter = st_permute_parameters([
//!     Parameters::new(Ok::<i32, ()>(4), (2, 2)),
//!     Parameters::new(Ok(5), (2, 2)),
//! ]);
//!
//! let results = permuter.call(|a: &i32, b: &i32| -> Result<i32, ()> { Ok(a + b) })?;
//! assert_eq!(results, [Ok(4), Ok(4)]);
//!
//! let mut failed = Vec::new();
//! let all_ok = permuter.check_failures(&results, |index: usize, _: &_, _: &_| {
//!     failed.push(index);
//!     false
//! })?;
//!
//! assert!(!all_ok);
//! assert_eq!(failed, [1]);
//! # Ok::<(), kerneltest_core::Error>(())
//! ```
//!
//! # Features
//!
//! - `parallel` (default): runs [`mt_permute_parameters`] permuters on the
//!   rayon thread pool. Without it they run sequentially.
//! - `serde`: derives `Serialize` and `Deserialize` for [`Parameters`] and
//!   [`Valueless`], so dynamic sequences can be loaded from data files.

mod compare;
mod error;
mod hook;
mod outcome;
mod parameters;
mod permuter;
mod reporter;
mod sequence;

pub use compare::outcome_matches;
pub use error::Error;
pub use hook::{Hook, LogHook};
pub use outcome::{Outcome, OutcomeEq, Valueless, present, succeeded};
pub use parameters::{ArgumentList, CallExpr, Kernel, Parameters};
pub use permuter::{
    Execution, Permuter, mt_permute_parameters, mt_permute_parameters_with_hooks,
    st_permute_parameters, st_permute_parameters_with_hooks,
};
pub use reporter::Reporter;
pub use sequence::{ParameterSequence, ResultStorage};
