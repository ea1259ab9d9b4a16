//! The argument pack.
//!
//! A [`Pack`] is an immutable, fixed-length, ordered sequence of captured
//! argument slots. Its only behavior is [`apply`](Pack::apply): invoke a
//! callable with the stored slots in their original order.
//!
//! # Examples
//!
//! ```rust
//! use fnpack::pack::{pack_decay, pack_forward, CaptureKind};
//!
//! fn describe(name: &str, count: usize) -> String {
//!     format!("{count} x {name}")
//! }
//!
//! let owned = pack_decay(("apple", 3));
//! assert_eq!(owned.mode(), CaptureKind::Decay);
//! assert_eq!(owned.apply(describe), "3 x apple");
//!
//! let total = 10;
//! let borrowed = pack_forward((&total,));
//! assert_eq!(borrowed.apply(|value: &i32| *value * 2), 20);
//! ```
//!
//! A decay pack owns its slots, so applying it moves them out and the pack
//! cannot be used again:
//!
//! ```compile_fail
//! use fnpack::pack::pack_decay;
//!
//! let boxed = pack_decay((Box::new(7),));
//! assert_eq!(boxed.apply(|value: Box<i32>| *value), 7);
//! boxed.apply(|value: Box<i32>| *value);
//! ```
//!
//! A forward pack stores references only:
//!
//! ```compile_fail
//! use fnpack::pack::pack_forward;
//!
//! let value = 1;
//! let mixed = pack_forward((&value, 2));
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::callable::{Callable, CallableOnce};
use super::capture::{CaptureKind, CaptureMode, DecaySlots, Decay, Forward, ForwardSlots};
use super::hlist::{AsMuts, AsRefs, DebugSlots, HList, HNil, IntoHList, IntoTuple};

/// An immutable sequence of captured arguments.
///
/// `M` is the [capture mode](super::capture) and `L` the slot list. Packs
/// are `Clone`/`Copy` when their slots are, except transient packs, which
/// never are. Only decay packs implement `Default`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pack<M, L> {
    slots: L,
    mode: PhantomData<M>,
}

impl<M: CaptureMode, L> Pack<M, L> {
    pub(crate) const fn from_hlist(slots: L) -> Self {
        Self {
            slots,
            mode: PhantomData,
        }
    }

    /// Invokes `function` with the stored slots, in order, consuming the
    /// pack.
    ///
    /// Decay slots are moved into the call; reference slots pass the
    /// reference they hold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnpack::pack::Pack;
    ///
    /// assert_eq!(Pack::new((2, 3)).apply(|a: i32, b: i32| a * b), 6);
    /// assert_eq!(Pack::empty().apply(|| "nothing"), "nothing");
    /// ```
    #[inline]
    pub fn apply<F>(self, function: F) -> F::Output
    where
        L: IntoTuple,
        F: CallableOnce<L::Tuple>,
    {
        function.invoke_once(self.slots.into_tuple())
    }

    /// Invokes a borrowed `function` with the stored slots, in order,
    /// consuming the pack.
    #[inline]
    pub fn apply_with<F>(self, function: &F) -> F::Output
    where
        L: IntoTuple,
        F: Callable<L::Tuple>,
    {
        function.invoke(self.slots.into_tuple())
    }

    /// Builds a forward pack of shared references to every slot.
    ///
    /// This is how a pack is applied without being consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnpack::pack::pack_decay;
    ///
    /// let words = pack_decay((String::from("left"), String::from("right")));
    /// let total = words.by_ref().apply(|a: &String, b: &String| a.len() + b.len());
    ///
    /// assert_eq!(total, 9);
    /// assert_eq!(words.into_tuple().0, "left");
    /// ```
    #[inline]
    pub fn by_ref<'a>(&'a self) -> Pack<Forward<'a>, L::Refs>
    where
        L: AsRefs<'a>,
    {
        Pack::from_hlist(self.slots.as_refs())
    }

    /// Builds a forward pack of exclusive references to every slot.
    #[inline]
    pub fn by_mut<'a>(&'a mut self) -> Pack<Forward<'a>, L::Muts>
    where
        L: AsMuts<'a>,
    {
        Pack::from_hlist(self.slots.as_muts())
    }

    /// Returns the slots as a tuple.
    #[inline]
    pub fn into_tuple(self) -> L::Tuple
    where
        L: IntoTuple,
    {
        self.slots.into_tuple()
    }

    /// Returns the slot list.
    #[inline]
    pub fn into_hlist(self) -> L {
        self.slots
    }

    /// Borrows the slot list.
    #[inline]
    pub const fn slots(&self) -> &L {
        &self.slots
    }

    /// Number of slots.
    #[inline]
    pub const fn len(&self) -> usize
    where
        L: HList,
    {
        L::LEN
    }

    /// Returns `true` if the pack has no slots.
    #[inline]
    pub const fn is_empty(&self) -> bool
    where
        L: HList,
    {
        L::LEN == 0
    }

    /// The capture mode this pack was built with.
    #[inline]
    pub const fn mode(&self) -> CaptureKind {
        M::KIND
    }
}

impl<L> Pack<Decay, L> {
    /// Builds a decay pack that takes ownership of every element of
    /// `arguments`.
    #[inline]
    pub fn new<T>(arguments: T) -> Self
    where
        T: IntoHList<HList = L>,
    {
        Self::from_hlist(arguments.into_hlist())
    }
}

impl Pack<Decay, HNil> {
    /// The pack with no slots.
    #[inline]
    pub const fn empty() -> Self {
        Self::from_hlist(HNil)
    }
}

impl<L: DecaySlots> Pack<Forward<'_>, L> {
    /// Copies every referent into an owned decay pack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnpack::pack::{pack_forward, CaptureKind};
    ///
    /// let mut name = String::from("pack");
    /// let owned = pack_forward((&name,)).decay();
    /// name.clear();
    ///
    /// assert_eq!(owned.mode(), CaptureKind::Decay);
    /// assert_eq!(owned.into_tuple(), (String::from("pack"),));
    /// ```
    #[inline]
    pub fn decay(self) -> Pack<Decay, L::Owned> {
        Pack::from_hlist(self.slots.decay_slots())
    }
}

impl<L: Default> Default for Pack<Decay, L> {
    #[inline]
    fn default() -> Self {
        Self::from_hlist(L::default())
    }
}

impl<M: CaptureMode, L: DebugSlots> fmt::Debug for Pack<M, L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = format!("Pack<{}>", M::KIND);
        let mut builder = formatter.debug_tuple(&name);
        self.slots.debug_slots(&mut builder);
        builder.finish()
    }
}

/// Builds a decay pack owning every element of `arguments`.
///
/// Equivalent to [`Pack::new`] and the [`pack!`](crate::pack!) macro.
#[inline]
pub fn pack_decay<T: IntoHList>(arguments: T) -> Pack<Decay, T::HList> {
    Pack::from_hlist(arguments.into_hlist())
}

/// Builds a forward pack from a tuple of references.
///
/// Every element must be `&T` or `&mut T`; the pack lives no longer than
/// the shortest of those borrows.
#[inline]
pub fn pack_forward<'a, T>(arguments: T) -> Pack<Forward<'a>, T::HList>
where
    T: IntoHList,
    T::HList: ForwardSlots<'a>,
{
    Pack::from_hlist(arguments.into_hlist())
}
