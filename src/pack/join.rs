//! Pack concatenation.
//!
//! Joining keeps every slot exactly as it was captured: owned slots stay
//! owned, reference slots keep their reference. Only the mode of the result
//! changes, as decided by [`MergeMode`].
//!
//! # Examples
//!
//! ```rust
//! use fnpack::pack::{join_all, pack_decay, Pack};
//!
//! fn add(first: i32, second: i32) -> i32 {
//!     first + second
//! }
//!
//! assert_eq!(Pack::empty().join(pack_decay((1, 2))).apply(add), 3);
//! assert_eq!(join_all((pack_decay((1,)), Pack::empty(), pack_decay((2,)))).apply(add), 3);
//! assert_eq!(join_all(()).apply(|| 0), 0);
//! ```

use super::argument_pack::Pack;
use super::capture::{CaptureMode, Decay, MergeMode};
use super::hlist::{Concat, HNil};

/// Concatenates two packs.
pub trait Join<Rhs> {
    /// The joined pack.
    type Output;

    /// Returns a pack holding the slots of `self` followed by those of
    /// `rhs`.
    fn join(self, rhs: Rhs) -> Self::Output;
}

impl<M, L, N, R> Join<Pack<N, R>> for Pack<M, L>
where
    M: MergeMode<N>,
    N: CaptureMode,
    L: Concat<R>,
{
    type Output = Pack<M::Merged, L::Output>;

    #[inline]
    fn join(self, rhs: Pack<N, R>) -> Self::Output {
        Pack::from_hlist(self.into_hlist().concat(rhs.into_hlist()))
    }
}

impl<M: CaptureMode, L> Pack<M, L> {
    /// Returns a pack holding the slots of `self` followed by those of
    /// `rhs`.
    ///
    /// ```rust
    /// use fnpack::pack::{pack_decay, pack_forward, CaptureKind};
    ///
    /// let suffix = String::from("!");
    /// let joined = pack_decay((String::from("hi"),)).join(pack_forward((&suffix,)));
    ///
    /// assert_eq!(joined.mode(), CaptureKind::ForwardReference);
    /// assert_eq!(joined.apply(|text: String, tail: &String| text + tail), "hi!");
    /// ```
    #[inline]
    pub fn join<N, R>(self, rhs: Pack<N, R>) -> Pack<M::Merged, L::Output>
    where
        M: MergeMode<N>,
        N: CaptureMode,
        L: Concat<R>,
    {
        Join::join(self, rhs)
    }
}

/// A tuple of packs that can be folded into one.
///
/// Implemented for tuples of zero to eight packs. The fold is right
/// associated: `(a, b, c)` joins as `a.join(b.join(c))`.
pub trait JoinAll {
    /// The joined pack.
    type Output;

    /// Joins every pack in order.
    fn join_all(self) -> Self::Output;
}

impl JoinAll for () {
    type Output = Pack<Decay, HNil>;

    #[inline]
    fn join_all(self) -> Self::Output {
        Pack::empty()
    }
}

impl<M: CaptureMode, L> JoinAll for (Pack<M, L>,) {
    type Output = Pack<M, L>;

    #[inline]
    fn join_all(self) -> Self::Output {
        self.0
    }
}

macro_rules! impl_join_all {
    ($first:ident, $($rest:ident),+) => {
        paste::paste! {
            impl<$first, $($rest),+> JoinAll for ($first, $($rest),+)
            where
                ($($rest,)+): JoinAll,
                $first: Join<<($($rest,)+) as JoinAll>::Output>,
            {
                type Output = <$first as Join<<($($rest,)+) as JoinAll>::Output>>::Output;

                #[inline]
                fn join_all(self) -> Self::Output {
                    let ([<$first:lower>], $([<$rest:lower>]),+) = self;
                    [<$first:lower>].join(($([<$rest:lower>],)+).join_all())
                }
            }
        }
    };
}

impl_join_all!(P0, P1);
impl_join_all!(P0, P1, P2);
impl_join_all!(P0, P1, P2, P3);
impl_join_all!(P0, P1, P2, P3, P4);
impl_join_all!(P0, P1, P2, P3, P4, P5);
impl_join_all!(P0, P1, P2, P3, P4, P5, P6);
impl_join_all!(P0, P1, P2, P3, P4, P5, P6, P7);

/// Joins a tuple of up to eight packs, left to right.
///
/// An empty tuple yields the empty decay pack and a single pack is returned
/// unchanged. For more packs, use [`pack_join!`](crate::pack_join!).
#[inline]
pub fn join_all<P: JoinAll>(packs: P) -> P::Output {
    packs.join_all()
}
