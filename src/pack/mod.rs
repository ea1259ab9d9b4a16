//! Argument packs.
//!
//! This module provides the storage half of the crate:
//!
//! - [`HCons`] / [`HNil`]: type-level slot lists, convertible to and from
//!   tuples of up to [`MAX_ARITY`] elements
//! - [`CallableOnce`] / [`Callable`]: invocation with an argument tuple
//! - [`Decay`], [`Forward`] and [`Transient`]: the three capture modes
//! - [`Pack`]: an immutable sequence of captured arguments that can be
//!   applied to a callable
//! - [`Join`] and [`join_all`]: pack concatenation
//!
//! # Capture Modes
//!
//! | Constructor | Mode | Stores |
//! |-------------|------|--------|
//! | [`pack_decay`], [`Pack::new`], [`pack!`](crate::pack!) | [`Decay`] | owned values |
//! | [`pack_forward`], [`pack_forward!`](crate::pack_forward!) | [`Forward`] | `&T` / `&mut T` |
//! | [`forward_scope`] | [`Transient`] | anything, for one scope |
//!
//! # Examples
//!
//! ```rust
//! use fnpack::pack::{forward_scope, pack_decay, pack_forward};
//!
//! fn add(first: i32, second: i32) -> i32 {
//!     first + second
//! }
//!
//! let one = 1;
//! let two = 2;
//!
//! assert_eq!(pack_decay((1, 2)).apply(add), 3);
//! assert_eq!(pack_forward((&one, &two)).apply(|a: &i32, b: &i32| a + b), 3);
//! assert_eq!(forward_scope((1, 2), |pack| pack.apply(add)), 3);
//! ```
//!
//! # Default Construction
//!
//! A decay pack is `Default` exactly when every slot type is. Reference
//! packs never are.
//!
//! ```rust
//! use fnpack::pack::{Decay, HCons, HNil, Pack};
//!
//! let pack: Pack<Decay, HCons<u32, HCons<String, HNil>>> = Pack::default();
//! assert_eq!(pack.into_tuple(), (0, String::new()));
//! ```

mod argument_pack;
mod callable;
mod capture;
mod hlist;
mod join;
mod pack_macro;
mod scope;

pub use argument_pack::{Pack, pack_decay, pack_forward};
pub use callable::{Callable, CallableOnce};
pub use capture::{
    CaptureKind, CaptureMode, Decay, DecaySlots, Forward, ForwardSlots, MergeMode, ReferenceSlot,
    SlotCategory, Transient,
};
pub use hlist::{
    AsMuts, AsRefs, Concat, DebugSlots, HCons, HList, HNil, IntoHList, IntoTuple, MAX_ARITY, Strip,
};
pub use join::{Join, JoinAll, join_all};
pub use scope::forward_scope;

#[cfg(feature = "partial")]
pub(crate) use scope::with_transient;
