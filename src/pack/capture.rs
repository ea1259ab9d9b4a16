//! Capture modes and slot classification.
//!
//! Every [`Pack`](super::Pack) is parameterized by a capture mode, chosen
//! when the pack is built and never changed afterwards:
//!
//! | Mode | [`CaptureKind`] | Slots | Lifetime |
//! |------|-----------------|-------|----------|
//! | [`Decay`] | `Decay` | owned values, moved in | as long as the values |
//! | [`Forward<'a>`](Forward) | `ForwardReference` | `&'a T` or `&'a mut T` only | bound to `'a` |
//! | [`Transient<'s>`](Transient) | `RawForward` | anything | one [`forward_scope`](super::forward_scope) call |
//!
//! Which types a mode accepts is decided by traits on the slot list
//! ([`ForwardSlots`] for forward packs), so storing the wrong kind of value
//! is a build error rather than a runtime check.
//!
//! Default constructibility follows the `Default` trait: a decay pack is
//! `Default` exactly when every slot type is, and reference-mode packs never
//! are.

use std::borrow::ToOwned;
use std::fmt;
use std::marker::PhantomData;

use super::hlist::{HCons, HNil};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Decay {}
    impl Sealed for super::Forward<'_> {}
    impl Sealed for super::Transient<'_> {}
}

/// The runtime name of a capture mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureKind {
    /// Arguments are moved into owned storage.
    Decay,
    /// Arguments are references whose referents outlive the pack.
    ForwardReference,
    /// Arguments are forwarded within a single scope and never retained.
    RawForward,
}

impl CaptureKind {
    /// Returns `true` if packs of this kind may be stored or returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnpack::pack::CaptureKind;
    ///
    /// assert!(CaptureKind::Decay.is_retainable());
    /// assert!(!CaptureKind::RawForward.is_retainable());
    /// ```
    #[inline]
    pub const fn is_retainable(self) -> bool {
        !matches!(self, Self::RawForward)
    }

    /// Returns `true` if packs of this kind own every slot they were built
    /// from.
    #[inline]
    pub const fn owns_slots(self) -> bool {
        matches!(self, Self::Decay)
    }
}

impl fmt::Display for CaptureKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Decay => "decay",
            Self::ForwardReference => "forward",
            Self::RawForward => "raw-forward",
        };
        formatter.write_str(name)
    }
}

/// A capture mode. Implemented only by [`Decay`], [`Forward`] and
/// [`Transient`].
pub trait CaptureMode: sealed::Sealed {
    /// The runtime name of this mode.
    const KIND: CaptureKind;
}

/// Capture mode that moves every argument into owned storage.
///
/// A reference written explicitly at the call site (`&value`) is stored as
/// a by-reference capture; the borrow checker then bounds the pack's
/// lifetime by that borrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Decay;

impl CaptureMode for Decay {
    const KIND: CaptureKind = CaptureKind::Decay;
}

/// Capture mode that keeps references to arguments owned by the caller.
///
/// Shared references model the lvalue category, exclusive references the
/// movable-from category. The pack cannot outlive `'a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Forward<'a>(PhantomData<&'a ()>);

impl CaptureMode for Forward<'_> {
    const KIND: CaptureKind = CaptureKind::ForwardReference;
}

/// Capture mode of packs that live for a single
/// [`forward_scope`](super::forward_scope) call.
///
/// `'s` is an invariant brand: a `Transient<'s>` pack only exists inside the
/// closure that received it and cannot be returned from or stored outside
/// of it. It is neither `Clone` nor `Copy`, so neither are its packs.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Transient<'s>(PhantomData<fn(&'s ()) -> &'s ()>);

impl CaptureMode for Transient<'_> {
    const KIND: CaptureKind = CaptureKind::RawForward;
}

// =============================================================================
// Slot classification
// =============================================================================

/// How a reference slot holds its referent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotCategory {
    /// `&T`: the referent is read through the slot.
    Shared,
    /// `&mut T`: the referent may be modified or moved from through the slot.
    Exclusive,
}

/// A slot type that stores a reference.
///
/// Implemented for `&T` and `&mut T` only.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a reference",
    label = "forward packs store only `&T` or `&mut T`",
    note = "borrow the argument (`&value`) or build a decay pack instead"
)]
pub trait ReferenceSlot: Sized {
    /// The referenced type.
    type Target: ?Sized;

    /// How the slot holds its referent.
    const CATEGORY: SlotCategory;

    /// Copies the referent into owned storage.
    fn decay(self) -> <Self::Target as ToOwned>::Owned
    where
        Self::Target: ToOwned;
}

impl<T: ?Sized> ReferenceSlot for &T {
    type Target = T;

    const CATEGORY: SlotCategory = SlotCategory::Shared;

    #[inline]
    fn decay(self) -> T::Owned
    where
        T: ToOwned,
    {
        self.to_owned()
    }
}

impl<T: ?Sized> ReferenceSlot for &mut T {
    type Target = T;

    const CATEGORY: SlotCategory = SlotCategory::Exclusive;

    #[inline]
    fn decay(self) -> T::Owned
    where
        T: ToOwned,
    {
        T::to_owned(self)
    }
}

/// A slot list in which every slot is a [`ReferenceSlot`] valid for `'a`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` contains a slot that is not a reference",
    label = "forward packs store only `&T` or `&mut T`",
    note = "borrow the argument (`&value`) or build a decay pack instead"
)]
pub trait ForwardSlots<'a> {
    /// Appends the category of every slot, in order, to `categories`.
    fn categories(categories: &mut Vec<SlotCategory>);
}

impl ForwardSlots<'_> for HNil {
    #[inline]
    fn categories(_categories: &mut Vec<SlotCategory>) {}
}

impl<'a, H, T> ForwardSlots<'a> for HCons<H, T>
where
    H: ReferenceSlot + 'a,
    T: ForwardSlots<'a>,
{
    fn categories(categories: &mut Vec<SlotCategory>) {
        categories.push(H::CATEGORY);
        T::categories(categories);
    }
}

/// A slot list of references whose referents can be copied into owned
/// storage.
pub trait DecaySlots {
    /// The slot list of owned copies.
    type Owned;

    /// Replaces every reference with an owned copy of its referent.
    fn decay_slots(self) -> Self::Owned;
}

impl DecaySlots for HNil {
    type Owned = HNil;

    #[inline]
    fn decay_slots(self) -> HNil {
        HNil
    }
}

impl<H, T> DecaySlots for HCons<H, T>
where
    H: ReferenceSlot,
    H::Target: ToOwned,
    T: DecaySlots,
{
    type Owned = HCons<<H::Target as ToOwned>::Owned, T::Owned>;

    #[inline]
    fn decay_slots(self) -> Self::Owned {
        HCons {
            head: self.head.decay(),
            tail: self.tail.decay_slots(),
        }
    }
}

// =============================================================================
// Mode merging
// =============================================================================

/// The capture mode of a pack joined from a `Self` pack and an `Other`
/// pack.
///
/// Joining never re-captures slots; the merged mode only records the most
/// restrictive lifetime of the inputs. Anything joined with a transient
/// pack is transient. Two transient packs from nested scopes join under the
/// brand of the right-hand pack, so the result never outlives that pack's
/// scope.
pub trait MergeMode<Other: CaptureMode>: CaptureMode {
    /// The mode of the joined pack.
    type Merged: CaptureMode;
}

impl MergeMode<Decay> for Decay {
    type Merged = Decay;
}

impl<'a> MergeMode<Forward<'a>> for Decay {
    type Merged = Forward<'a>;
}

impl<'a> MergeMode<Decay> for Forward<'a> {
    type Merged = Forward<'a>;
}

impl<'a> MergeMode<Forward<'a>> for Forward<'a> {
    type Merged = Forward<'a>;
}

impl<'s> MergeMode<Transient<'s>> for Decay {
    type Merged = Transient<'s>;
}

impl<'s> MergeMode<Transient<'s>> for Forward<'_> {
    type Merged = Transient<'s>;
}

impl<'s> MergeMode<Decay> for Transient<'s> {
    type Merged = Transient<'s>;
}

impl<'s> MergeMode<Forward<'_>> for Transient<'s> {
    type Merged = Transient<'s>;
}

impl<'s, 't> MergeMode<Transient<'t>> for Transient<'s> {
    type Merged = Transient<'t>;
}

static_assertions::assert_eq_size!(Decay, ());
static_assertions::assert_eq_size!(Forward<'static>, ());
static_assertions::assert_eq_size!(Transient<'static>, ());
