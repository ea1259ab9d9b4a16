//! The partial-application adaptor.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use crate::pack::{Callable, CallableOnce, DebugSlots, Decay, HList, HNil, IntoHList, Pack, Strip};

use super::dispatch::{Remaining, Supply, SupplyOnce};

/// A function together with the arguments captured for it so far.
///
/// `F` is the wrapped function, `Full` the slot list of its parameters and
/// `Acc` the slot list of the arguments captured so far. Calling the
/// adaptor either invokes `F`, when the new arguments complete `Full`, or
/// returns a new adaptor that has captured them too. The adaptor itself is
/// never modified.
///
/// # Examples
///
/// ```rust
/// use fnpack::partial::partial;
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 {
///     width * height * depth
/// }
///
/// let base = partial(volume).call((2,));
/// let slab = base.call((3,));
///
/// assert_eq!(slab.call((4,)), 24);
/// assert_eq!(slab.call((5,)), 30);
/// assert_eq!(base.call((1, 1)), 2);
/// ```
///
/// Arguments that can never complete the signature are rejected at build
/// time:
///
/// ```compile_fail
/// use fnpack::partial::partial;
///
/// fn add(first: i32, second: i32) -> i32 {
///     first + second
/// }
///
/// partial(add).call((1, 2, 3));
/// ```
///
/// ```compile_fail
/// use fnpack::partial::partial;
///
/// fn add(first: i32, second: i32) -> i32 {
///     first + second
/// }
///
/// partial(add).call(("one",));
/// ```
pub struct Partial<F, Full, Acc = HNil> {
    function: F,
    pack: Pack<Decay, Acc>,
    signature: PhantomData<fn(Full)>,
}

/// Wraps `function` in a partial-application adaptor with nothing captured.
///
/// The parameter list is taken from `function` itself, which must have a
/// single signature. For callables with several (such as another
/// [`Partial`]), use [`partial_with`] with explicit types.
///
/// # Examples
///
/// ```rust
/// use fnpack::partial::partial;
///
/// let add = partial(|first: i32, second: i32| first + second);
///
/// assert_eq!(add.call((1,)).call((2,)), 3);
/// assert_eq!(add.call((1, 2)), 3);
/// assert_eq!(add.call(()).call((1,)).call((2,)), 3);
/// ```
#[inline]
pub fn partial<F, Args>(function: F) -> Partial<F, Args::HList>
where
    F: CallableOnce<Args>,
    Args: IntoHList,
{
    Partial::from_parts(function, Pack::empty())
}

/// Wraps `function` in a partial-application adaptor that has already
/// captured `pack`.
///
/// The slots of `pack` must match the first parameters of `function`.
///
/// # Examples
///
/// ```rust
/// use fnpack::pack;
/// use fnpack::partial::partial_with;
///
/// fn greet(greeting: &str, name: &str) -> String {
///     format!("{greeting}, {name}")
/// }
///
/// let hello = partial_with(greet, pack!("Hello"));
/// assert_eq!(hello.call(("world",)), "Hello, world");
/// ```
#[inline]
pub fn partial_with<F, Args, Acc>(
    function: F,
    pack: Pack<Decay, Acc>,
) -> Partial<F, Args::HList, Acc>
where
    F: CallableOnce<Args>,
    Args: IntoHList,
    Args::HList: Strip<Acc>,
{
    Partial::from_parts(function, pack)
}

impl<F, Full, Acc> Partial<F, Full, Acc> {
    pub(crate) const fn from_parts(function: F, pack: Pack<Decay, Acc>) -> Self {
        Self {
            function,
            pack,
            signature: PhantomData,
        }
    }

    /// Supplies `arguments`, leaving this adaptor usable for further calls.
    ///
    /// Returns the function's result when `arguments` complete the
    /// signature, and otherwise a new adaptor that has captured them.
    #[inline]
    pub fn call<Args>(&self, arguments: Args) -> <Self as Supply<Args::HList>>::Output
    where
        Args: IntoHList,
        Self: Supply<Args::HList>,
    {
        self.supply(arguments.into_hlist())
    }

    /// Supplies `arguments`, consuming this adaptor.
    ///
    /// Unlike [`call`](Self::call), neither the function nor the captured
    /// slots need to be `Clone`, so move-only values can be captured.
    ///
    /// ```rust
    /// use fnpack::partial::partial;
    ///
    /// let sum = partial(|first: Box<i32>, second: Box<i32>| *first + *second);
    /// let pending = sum.call_once((Box::new(1),));
    ///
    /// assert_eq!(pending.call_once((Box::new(2),)), 3);
    /// ```
    #[inline]
    pub fn call_once<Args>(self, arguments: Args) -> <Self as SupplyOnce<Args::HList>>::Output
    where
        Args: IntoHList,
        Self: SupplyOnce<Args::HList>,
    {
        self.supply_once(arguments.into_hlist())
    }

    /// The wrapped function.
    #[inline]
    pub const fn function(&self) -> &F {
        &self.function
    }

    /// The arguments captured so far.
    #[inline]
    pub const fn pack(&self) -> &Pack<Decay, Acc> {
        &self.pack
    }

    /// Splits the adaptor into the wrapped function and its captured pack.
    #[inline]
    pub fn into_parts(self) -> (F, Pack<Decay, Acc>) {
        (self.function, self.pack)
    }

    /// Number of arguments captured so far.
    #[inline]
    pub const fn captured(&self) -> usize
    where
        Acc: HList,
    {
        Acc::LEN
    }

    /// Number of parameters still to be supplied.
    #[inline]
    pub const fn remaining(&self) -> usize
    where
        Full: Strip<Acc>,
        Remaining<Full, Acc>: HList,
    {
        <Remaining<Full, Acc> as HList>::LEN
    }
}

impl<F: Clone, Full, Acc: Clone> Clone for Partial<F, Full, Acc> {
    fn clone(&self) -> Self {
        Self::from_parts(self.function.clone(), self.pack.clone())
    }
}

impl<F: Default, Full, Acc: Default> Default for Partial<F, Full, Acc> {
    #[inline]
    fn default() -> Self {
        Self::from_parts(F::default(), Pack::default())
    }
}

impl<F, Full, Acc: DebugSlots> fmt::Debug for Partial<F, Full, Acc> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Partial")
            .field("function", &format_args!("{}", type_name::<F>()))
            .field("pack", &self.pack)
            .finish()
    }
}

impl<F, Full, Acc, Args> CallableOnce<Args> for Partial<F, Full, Acc>
where
    Args: IntoHList,
    Self: SupplyOnce<Args::HList>,
{
    type Output = <Self as SupplyOnce<Args::HList>>::Output;

    #[inline]
    fn invoke_once(self, arguments: Args) -> Self::Output {
        self.supply_once(arguments.into_hlist())
    }
}

impl<F, Full, Acc, Args> Callable<Args> for Partial<F, Full, Acc>
where
    Args: IntoHList,
    Self: SupplyOnce<Args::HList>
        + Supply<Args::HList, Output = <Self as SupplyOnce<Args::HList>>::Output>,
{
    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        self.supply(arguments.into_hlist())
    }
}
