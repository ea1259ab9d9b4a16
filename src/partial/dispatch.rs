//! The invoke-or-curry decision.
//!
//! A call first removes the captured slot types and then the supplied
//! argument types from the front of the signature, with [`Strip`]. The
//! list that is left selects one of two [`Dispatch`] impls:
//!
//! - [`HNil`]: the signature is complete, so the function is invoked with
//!   the captured pack joined to a transient view of the new arguments;
//! - [`HCons`]: parameters remain, so the new arguments are moved into a
//!   longer decay pack held by a new [`Partial`].
//!
//! Both impls are chosen by the type checker; no branch exists at run time.

use crate::pack::{
    Callable, CallableOnce, Concat, Decay, HCons, HList, HNil, IntoTuple, Pack, Strip,
    with_transient,
};

use super::adaptor::Partial;

/// Parameter types of `Full` not yet covered by the captured slots `Acc`.
pub type Remaining<Full, Acc> = <Full as Strip<Acc>>::Rest;

/// Parameter types left after supplying `Xs` to an adaptor that captured
/// `Acc`.
pub type Leftover<Full, Acc, Xs> = <Remaining<Full, Acc> as Strip<Xs>>::Rest;

/// One step of a by-reference call, selected by the leftover parameters.
pub trait Dispatch<F, Full, Acc, Xs> {
    /// The function's result, or the next adaptor.
    type Output;

    /// Invokes `function` or captures `arguments` after `pack`.
    fn dispatch(function: &F, pack: &Pack<Decay, Acc>, arguments: Xs) -> Self::Output;
}

/// One step of a consuming call, selected by the leftover parameters.
pub trait DispatchOnce<F, Full, Acc, Xs> {
    /// The function's result, or the next adaptor.
    type Output;

    /// Invokes `function` or captures `arguments` after `pack`.
    fn dispatch_once(function: F, pack: Pack<Decay, Acc>, arguments: Xs) -> Self::Output;
}

impl<F, Full, Acc, Xs> Dispatch<F, Full, Acc, Xs> for HNil
where
    Acc: HList + Clone + Concat<Xs>,
    Xs: HList,
    <Acc as Concat<Xs>>::Output: IntoTuple,
    F: Callable<<<Acc as Concat<Xs>>::Output as IntoTuple>::Tuple>,
{
    type Output = F::Output;

    #[inline]
    fn dispatch(function: &F, pack: &Pack<Decay, Acc>, arguments: Xs) -> Self::Output {
        trace_event!(
            target: "fnpack::partial",
            captured = Acc::LEN,
            supplied = Xs::LEN,
            remaining = 0_usize,
            "invoking"
        );
        with_transient(arguments, |view| {
            pack.clone().join(view).apply_with(function)
        })
    }
}

impl<F, Full, Acc, Xs> DispatchOnce<F, Full, Acc, Xs> for HNil
where
    Acc: HList + Concat<Xs>,
    Xs: HList,
    <Acc as Concat<Xs>>::Output: IntoTuple,
    F: CallableOnce<<<Acc as Concat<Xs>>::Output as IntoTuple>::Tuple>,
{
    type Output = F::Output;

    #[inline]
    fn dispatch_once(function: F, pack: Pack<Decay, Acc>, arguments: Xs) -> Self::Output {
        trace_event!(
            target: "fnpack::partial",
            captured = Acc::LEN,
            supplied = Xs::LEN,
            remaining = 0_usize,
            "invoking once"
        );
        with_transient(arguments, |view| pack.join(view).apply(function))
    }
}

impl<F, Full, Acc, Xs, H, T> Dispatch<F, Full, Acc, Xs> for HCons<H, T>
where
    F: Clone,
    Acc: HList + Clone + Concat<Xs>,
    Xs: HList,
    T: HList,
{
    type Output = Partial<F, Full, <Acc as Concat<Xs>>::Output>;

    #[inline]
    fn dispatch(function: &F, pack: &Pack<Decay, Acc>, arguments: Xs) -> Self::Output {
        trace_event!(
            target: "fnpack::partial",
            captured = Acc::LEN,
            supplied = Xs::LEN,
            remaining = 1 + T::LEN,
            "currying"
        );
        Partial::from_parts(
            function.clone(),
            pack.clone().join(Pack::<Decay, Xs>::from_hlist(arguments)),
        )
    }
}

impl<F, Full, Acc, Xs, H, T> DispatchOnce<F, Full, Acc, Xs> for HCons<H, T>
where
    Acc: HList + Concat<Xs>,
    Xs: HList,
    T: HList,
{
    type Output = Partial<F, Full, <Acc as Concat<Xs>>::Output>;

    #[inline]
    fn dispatch_once(function: F, pack: Pack<Decay, Acc>, arguments: Xs) -> Self::Output {
        trace_event!(
            target: "fnpack::partial",
            captured = Acc::LEN,
            supplied = Xs::LEN,
            remaining = 1 + T::LEN,
            "currying once"
        );
        Partial::from_parts(
            function,
            pack.join(Pack::<Decay, Xs>::from_hlist(arguments)),
        )
    }
}

/// Supplies the argument list `Xs` to a borrowed adaptor.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot accept the arguments `{Xs}`",
    label = "these arguments do not continue the wrapped function's signature",
    note = "supply the remaining parameters in order, with their exact types"
)]
pub trait Supply<Xs> {
    /// The function's result, or the next adaptor.
    type Output;

    /// Supplies `arguments`.
    fn supply(&self, arguments: Xs) -> Self::Output;
}

/// Supplies the argument list `Xs` to an adaptor, consuming it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot accept the arguments `{Xs}`",
    label = "these arguments do not continue the wrapped function's signature",
    note = "supply the remaining parameters in order, with their exact types"
)]
pub trait SupplyOnce<Xs> {
    /// The function's result, or the next adaptor.
    type Output;

    /// Supplies `arguments`, consuming the adaptor.
    fn supply_once(self, arguments: Xs) -> Self::Output;
}

impl<F, Full, Acc, Xs> Supply<Xs> for Partial<F, Full, Acc>
where
    Full: Strip<Acc>,
    Remaining<Full, Acc>: Strip<Xs>,
    Leftover<Full, Acc, Xs>: Dispatch<F, Full, Acc, Xs>,
{
    type Output = <Leftover<Full, Acc, Xs> as Dispatch<F, Full, Acc, Xs>>::Output;

    #[inline]
    fn supply(&self, arguments: Xs) -> Self::Output {
        <Leftover<Full, Acc, Xs> as Dispatch<F, Full, Acc, Xs>>::dispatch(
            self.function(),
            self.pack(),
            arguments,
        )
    }
}

impl<F, Full, Acc, Xs> SupplyOnce<Xs> for Partial<F, Full, Acc>
where
    Full: Strip<Acc>,
    Remaining<Full, Acc>: Strip<Xs>,
    Leftover<Full, Acc, Xs>: DispatchOnce<F, Full, Acc, Xs>,
{
    type Output = <Leftover<Full, Acc, Xs> as DispatchOnce<F, Full, Acc, Xs>>::Output;

    #[inline]
    fn supply_once(self, arguments: Xs) -> Self::Output {
        let (function, pack) = self.into_parts();
        <Leftover<Full, Acc, Xs> as DispatchOnce<F, Full, Acc, Xs>>::dispatch_once(
            function,
            pack,
            arguments,
        )
    }
}
