//! Type-level lists used as pack storage.
//!
//! A pack stores its slots as a heterogeneous cons list: [`HNil`] is the
//! empty list and [`HCons<H, T>`] prepends a slot of type `H` to the list
//! `T`. Unlike tuples, cons lists can be concatenated, split and walked by a
//! handful of recursive trait impls, so joining packs and deciding whether
//! a partial application is complete need no per-arity code.
//!
//! Rust tuples of up to [`MAX_ARITY`] elements convert to and from cons
//! lists through [`IntoHList`] and [`IntoTuple`]. Tuples remain the
//! user-facing shape of argument lists.
//!
//! # Examples
//!
//! ```rust
//! use fnpack::pack::{Concat, HCons, HNil, IntoHList, IntoTuple};
//!
//! let left = (1, "two").into_hlist();
//! let right = (3.0,).into_hlist();
//!
//! let joined: HCons<i32, HCons<&str, HCons<f64, HNil>>> = left.concat(right);
//! assert_eq!(joined.into_tuple(), (1, "two", 3.0));
//! ```

use std::fmt;

/// The largest tuple arity that converts to and from a slot list.
pub const MAX_ARITY: usize = 12;

/// The empty slot list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HNil;

/// A slot list with a first slot of type `H` followed by the list `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HCons<H, T> {
    /// The first slot.
    pub head: H,
    /// The remaining slots.
    pub tail: T,
}

/// Common interface of slot lists.
pub trait HList: Sized {
    /// Number of slots in the list.
    const LEN: usize;

    /// Prepends `head` to this list.
    #[inline]
    fn prepend<H>(self, head: H) -> HCons<H, Self> {
        HCons { head, tail: self }
    }
}

impl HList for HNil {
    const LEN: usize = 0;
}

impl<H, T: HList> HList for HCons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

// =============================================================================
// Concatenation
// =============================================================================

/// Appends the list `Rhs` after `Self`, preserving slot order and types.
pub trait Concat<Rhs> {
    /// The concatenated list.
    type Output;

    /// Consumes both lists and returns `self` followed by `rhs`.
    fn concat(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs> Concat<Rhs> for HNil {
    type Output = Rhs;

    #[inline]
    fn concat(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<H, T, Rhs> Concat<Rhs> for HCons<H, T>
where
    T: Concat<Rhs>,
{
    type Output = HCons<H, T::Output>;

    #[inline]
    fn concat(self, rhs: Rhs) -> Self::Output {
        HCons {
            head: self.head,
            tail: self.tail.concat(rhs),
        }
    }
}

// =============================================================================
// Prefix removal
// =============================================================================

/// Removes the slot types of `Prefix` from the front of `Self`.
///
/// `Strip` is purely type-level: it holds only when `Prefix` matches the
/// leading slot types of `Self` exactly, and [`Strip::Rest`] names what is
/// left. The partial-application adaptor uses it to decide, at compile time,
/// whether the arguments supplied so far complete a signature.
#[diagnostic::on_unimplemented(
    message = "the arguments `{Prefix}` do not match the start of the remaining parameters `{Self}`",
    label = "argument types or count do not fit the signature",
    note = "each supplied argument must have exactly the type of the next parameter"
)]
pub trait Strip<Prefix> {
    /// The slots of `Self` following `Prefix`.
    type Rest;
}

impl<L> Strip<HNil> for L {
    type Rest = L;
}

impl<H, T, PrefixTail> Strip<HCons<H, PrefixTail>> for HCons<H, T>
where
    T: Strip<PrefixTail>,
{
    type Rest = T::Rest;
}

// =============================================================================
// Borrowing views
// =============================================================================

/// Produces a list of shared references to every slot.
pub trait AsRefs<'a> {
    /// The list of `&'a` references.
    type Refs;

    /// Borrows every slot.
    fn as_refs(&'a self) -> Self::Refs;
}

impl<'a> AsRefs<'a> for HNil {
    type Refs = HNil;

    #[inline]
    fn as_refs(&'a self) -> HNil {
        HNil
    }
}

impl<'a, H: 'a, T: AsRefs<'a> + 'a> AsRefs<'a> for HCons<H, T> {
    type Refs = HCons<&'a H, T::Refs>;

    #[inline]
    fn as_refs(&'a self) -> Self::Refs {
        HCons {
            head: &self.head,
            tail: self.tail.as_refs(),
        }
    }
}

/// Produces a list of exclusive references to every slot.
pub trait AsMuts<'a> {
    /// The list of `&'a mut` references.
    type Muts;

    /// Exclusively borrows every slot.
    fn as_muts(&'a mut self) -> Self::Muts;
}

impl<'a> AsMuts<'a> for HNil {
    type Muts = HNil;

    #[inline]
    fn as_muts(&'a mut self) -> HNil {
        HNil
    }
}

impl<'a, H: 'a, T: AsMuts<'a> + 'a> AsMuts<'a> for HCons<H, T> {
    type Muts = HCons<&'a mut H, T::Muts>;

    #[inline]
    fn as_muts(&'a mut self) -> Self::Muts {
        HCons {
            head: &mut self.head,
            tail: self.tail.as_muts(),
        }
    }
}

// =============================================================================
// Debug output
// =============================================================================

/// Writes every slot of a list into a [`fmt::DebugTuple`].
pub trait DebugSlots {
    /// Appends each slot, in order, as a field of `builder`.
    fn debug_slots(&self, builder: &mut fmt::DebugTuple<'_, '_>);
}

impl DebugSlots for HNil {
    #[inline]
    fn debug_slots(&self, _builder: &mut fmt::DebugTuple<'_, '_>) {}
}

impl<H: fmt::Debug, T: DebugSlots> DebugSlots for HCons<H, T> {
    fn debug_slots(&self, builder: &mut fmt::DebugTuple<'_, '_>) {
        builder.field(&self.head);
        self.tail.debug_slots(builder);
    }
}

// =============================================================================
// Tuple conversions
// =============================================================================

/// Converts a tuple into the equivalent slot list.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an argument tuple",
    label = "expected a tuple of at most 12 arguments, such as `(a, b)` or `(a,)`",
    note = "a single argument still needs the trailing comma: `(value,)`"
)]
pub trait IntoHList {
    /// The slot list holding the tuple's elements in order.
    type HList: HList + IntoTuple<Tuple = Self>;

    /// Moves the tuple's elements into a slot list.
    fn into_hlist(self) -> Self::HList;
}

/// Converts a slot list back into the equivalent tuple.
pub trait IntoTuple {
    /// The tuple holding the list's slots in order.
    type Tuple;

    /// Moves the list's slots into a tuple.
    fn into_tuple(self) -> Self::Tuple;
}

macro_rules! hlist_type {
    () => { HNil };
    ($head:ident $(, $tail:ident)*) => { HCons<$head, hlist_type!($($tail),*)> };
}

/// Builds, or destructures when used as a pattern, a list of bindings.
macro_rules! hlist_value {
    () => { HNil };
    ($head:ident $(, $tail:ident)*) => {
        HCons { head: $head, tail: hlist_value!($($tail),*) }
    };
}

macro_rules! impl_tuple_conversions {
    ($($name:ident),*) => {
        paste::paste! {
            impl<$($name),*> IntoHList for ($($name,)*) {
                type HList = hlist_type!($($name),*);

                #[inline]
                fn into_hlist(self) -> Self::HList {
                    let ($([<$name:lower>],)*) = self;
                    hlist_value!($([<$name:lower>]),*)
                }
            }

            impl<$($name),*> IntoTuple for hlist_type!($($name),*) {
                type Tuple = ($($name,)*);

                #[inline]
                fn into_tuple(self) -> Self::Tuple {
                    let hlist_value!($([<$name:lower>]),*) = self;
                    ($([<$name:lower>],)*)
                }
            }
        }
    };
}

/// Invokes `$macro` once per arity, from zero up to the full parameter list.
macro_rules! for_each_arity {
    ($macro:ident; $($done:ident),* ;) => {
        $macro!($($done),*);
    };
    ($macro:ident; $($done:ident),* ; $next:ident $(, $rest:ident)*) => {
        $macro!($($done),*);
        for_each_arity!($macro; $($done,)* $next ; $($rest),*);
    };
}

pub(crate) use for_each_arity;

for_each_arity!(impl_tuple_conversions; ; T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
