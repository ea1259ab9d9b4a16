//! Static-storage wrapper for stateless callables.
//!
//! [`Static<F>`] holds no value at all: each call builds a fresh `F` with
//! `Default` and invokes it. It is zero-size whatever `F` is, which makes it
//! the natural handle for callables that are types rather than values.
//!
//! # Examples
//!
//! ```rust
//! use fnpack::compose::Static;
//! use fnpack::pack::{Callable, CallableOnce};
//!
//! #[derive(Default)]
//! struct Square;
//!
//! impl CallableOnce<(i64,)> for Square {
//!     type Output = i64;
//!
//!     fn invoke_once(self, (value,): (i64,)) -> i64 {
//!         value * value
//!     }
//! }
//!
//! impl Callable<(i64,)> for Square {
//!     fn invoke(&self, (value,): (i64,)) -> i64 {
//!         value * value
//!     }
//! }
//!
//! const SQUARE: Static<Square> = Static::new();
//!
//! assert_eq!(SQUARE.invoke((12,)), 144);
//! assert_eq!(std::mem::size_of_val(&SQUARE), 0);
//! ```

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use crate::pack::{Callable, CallableOnce};

/// A zero-size handle to a `Default` callable.
pub struct Static<F>(PhantomData<fn() -> F>);

impl<F> Static<F> {
    /// Creates the handle.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    /// Builds the callable.
    #[inline]
    pub fn get(self) -> F
    where
        F: Default,
    {
        F::default()
    }
}

impl<F> Clone for Static<F> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Static<F> {}

impl<F> Default for Static<F> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<F> fmt::Debug for Static<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Static<{}>", type_name::<F>())
    }
}

impl<F, Args> CallableOnce<Args> for Static<F>
where
    F: Default + CallableOnce<Args>,
{
    type Output = F::Output;

    #[inline]
    fn invoke_once(self, arguments: Args) -> Self::Output {
        F::default().invoke_once(arguments)
    }
}

impl<F, Args> Callable<Args> for Static<F>
where
    F: Default + CallableOnce<Args>,
{
    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        F::default().invoke_once(arguments)
    }
}
