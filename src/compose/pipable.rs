//! Pipe-syntax wrapper.
//!
//! [`Pipable`] wraps a function so a value can be piped into it with
//! [`PipeExt::pipe`]. Binding extra arguments with [`Pipable::bind`] gives a
//! [`Piped`] target that receives the piped value as its first argument.
//!
//! A `Pipable` is still an ordinary callable: it forwards every call to the
//! wrapped function unchanged, so wrapping a function before handing it to
//! [`partial`](crate::partial::partial) or a pack changes nothing.
//!
//! # Examples
//!
//! ```rust
//! use fnpack::compose::{pipable, PipeExt};
//!
//! fn clamp(value: i32, low: i32, high: i32) -> i32 {
//!     value.max(low).min(high)
//! }
//!
//! fn double(value: i32) -> i32 {
//!     value * 2
//! }
//!
//! assert_eq!(21_i32.pipe(pipable(double)), 42);
//! assert_eq!(42_i32.pipe(pipable(clamp).bind((0, 10))), 10);
//! ```

use std::any::type_name;
use std::fmt;

use crate::pack::{Callable, CallableOnce, DebugSlots, Decay, HCons, IntoHList, IntoTuple, Pack};

/// A function that values can be piped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pipable<F> {
    function: F,
}

/// Wraps `function` so that values can be piped into it.
#[inline]
pub const fn pipable<F>(function: F) -> Pipable<F> {
    Pipable { function }
}

impl<F> Pipable<F> {
    /// Captures the trailing arguments of a pipe call.
    ///
    /// Piping `value` into the result calls the function with `value`
    /// followed by `arguments`.
    #[inline]
    pub fn bind<T: IntoHList>(self, arguments: T) -> Piped<F, T::HList> {
        Piped {
            function: self.function,
            pack: Pack::new(arguments),
        }
    }

    /// Borrows the wrapped function.
    #[inline]
    pub const fn get_ref(&self) -> &F {
        &self.function
    }

    /// Unwraps the function.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F, Args> CallableOnce<Args> for Pipable<F>
where
    F: CallableOnce<Args>,
{
    type Output = F::Output;

    #[inline]
    fn invoke_once(self, arguments: Args) -> Self::Output {
        self.function.invoke_once(arguments)
    }
}

impl<F, Args> Callable<Args> for Pipable<F>
where
    F: Callable<Args>,
{
    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        self.function.invoke(arguments)
    }
}

/// A pipe target with trailing arguments already bound.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piped<F, L> {
    function: F,
    pack: Pack<Decay, L>,
}

impl<F, L: DebugSlots> fmt::Debug for Piped<F, L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Piped")
            .field("function", &format_args!("{}", type_name::<F>()))
            .field("pack", &self.pack)
            .finish()
    }
}

/// Something a value of type `T` can be piped into.
pub trait PipeTarget<T> {
    /// The result of the pipe.
    type Output;

    /// Calls the target with `value` as its first argument.
    fn pipe_into(self, value: T) -> Self::Output;
}

impl<F, T> PipeTarget<T> for Pipable<F>
where
    F: CallableOnce<(T,)>,
{
    type Output = F::Output;

    #[inline]
    fn pipe_into(self, value: T) -> Self::Output {
        self.function.invoke_once((value,))
    }
}

impl<F, T, L> PipeTarget<T> for Piped<F, L>
where
    HCons<T, L>: IntoTuple,
    F: CallableOnce<<HCons<T, L> as IntoTuple>::Tuple>,
{
    type Output = F::Output;

    #[inline]
    fn pipe_into(self, value: T) -> Self::Output {
        let arguments = HCons {
            head: value,
            tail: self.pack.into_hlist(),
        };
        self.function.invoke_once(arguments.into_tuple())
    }
}

/// Method-call syntax for piping.
pub trait PipeExt: Sized {
    /// Pipes `self` into `target`.
    #[inline]
    fn pipe<P: PipeTarget<Self>>(self, target: P) -> P::Output {
        trace_event!(target: "fnpack::compose", into = std::any::type_name::<P>(), "pipe");
        target.pipe_into(self)
    }
}

impl<T> PipeExt for T {}
