use std::fmt;

/// One parameter set: the expected outcome and the kernel inputs for one call.
///
/// `args` is a tuple holding the positional kernel inputs, `()` for a kernel
/// that takes no arguments and `(a,)` for a single argument.
///
/// # Example
///
/// ```rust
/// use kerneltest_core::Parameters;
///
/// let set: Parameters<Result<i32, ()>, (i32, i32)> = Parameters::new(Ok(4), (2, 2));
/// assert_eq!(set.args, (2, 2));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters<O, A> {
    /// The outcome the kernel should produce.
    pub outcome: O,

    /// The kernel inputs.
    pub args: A,
}

impl<O, A> Parameters<O, A> {
    /// Creates a parameter set from an expected outcome and kernel inputs.
    pub fn new(outcome: O, args: A) -> Self {
        Self { outcome, args }
    }
}

impl<O, A> From<(O, A)> for Parameters<O, A> {
    fn from((outcome, args): (O, A)) -> Self {
        Self::new(outcome, args)
    }
}

/// A function that can be invoked with the inputs of a parameter set.
///
/// Implemented for every `Fn(&A1, .., &Ak) -> R` with the matching argument
/// tuple `(A1, .., Ak)`, for arities up to eight. Inputs are passed by
/// reference since the sequence is shared across invocations.
///
/// Closures should annotate their argument types, e.g.
/// `|a: &i32, b: &i32| -> Result<i32, E> { Ok(a + b) }`.
pub trait Kernel<A> {
    type Output;

    /// Calls the kernel with the tuple's elements as positional arguments.
    fn invoke(&self, args: &A) -> Self::Output;
}

/// A tuple of kernel inputs that can be rendered as an argument list.
pub trait ArgumentList {
    /// The number of inputs in the tuple.
    const ARITY: usize;

    /// Writes the inputs in order, separated by `", "`.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatter fails.
    fn fmt_list(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Renders a kernel call such as `kernel(2, 2)`.
pub struct CallExpr<'a, A> {
    name: &'a str,
    args: &'a A,
}

impl<'a, A: ArgumentList> CallExpr<'a, A> {
    pub fn new(name: &'a str, args: &'a A) -> Self {
        Self { name, args }
    }
}

impl<A: ArgumentList> fmt::Display for CallExpr<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        self.args.fmt_list(f)?;
        f.write_str(")")
    }
}

macro_rules! impl_tuple_kernel {
    ($arity:literal; $($ty:ident . $idx:tt),*) => {
        impl<F, R, $($ty,)*> Kernel<($($ty,)*)> for F
        where
            F: Fn($(&$ty),*) -> R,
        {
            type Output = R;

            #[allow(unused_variables)]
            fn invoke(&self, args: &($($ty,)*)) -> R {
                (self)($(&args.$idx),*)
            }
        }

        impl<$($ty: fmt::Debug,)*> ArgumentList for ($($ty,)*) {
            const ARITY: usize = $arity;

            fn fmt_list(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let items: [&dyn fmt::Debug; $arity] = [$(&self.$idx),*];
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item:?}")?;
                }
                Ok(())
            }
        }
    };
}

impl_tuple_kernel!(0;);
impl_tuple_kernel!(1; A1.0);
impl_tuple_kernel!(2; A1.0, A2.1);
impl_tuple_kernel!(3; A1.0, A2.1, A3.2);
impl_tuple_kernel!(4; A1.0, A2.1, A3.2, A4.3);
impl_tuple_kernel!(5; A1.0, A2.1, A3.2, A4.3, A5.4);
impl_tuple_kernel!(6; A1.0, A2.1, A3.2, A4.3, A5.4, A6.5);
impl_tuple_kernel!(7; A1.0, A2.1, A3.2, A4.3, A5.4, A6.5, A7.6);
impl_tuple_kernel!(8; A1.0, A2.1, A3.2, A4.3, A5.4, A6.5, A7.6, A8.7);
