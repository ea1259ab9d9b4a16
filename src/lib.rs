//! # fnpack
//!
//! Argument packs and partial application for composing Rust callables.
//!
//! ## Overview
//!
//! This library captures a variable number of arguments, stores them in a
//! fixed-size anonymous aggregate, and later invokes a target callable with
//! those arguments combined with arguments supplied later. It includes:
//!
//! - **Argument Packs**: [`Pack`](pack::Pack) with three capture modes
//!   (decay, forward reference, transient forward)
//! - **Pack Concatenation**: [`Pack::join`](pack::Pack::join),
//!   [`join_all`](pack::join_all) and the [`pack_join!`] macro
//! - **Partial Application**: [`partial`](partial::partial), an adaptor that
//!   keeps currying until the wrapped callable can be invoked
//! - **Wrappers**: [`Pipable`](compose::Pipable) and
//!   [`Static`](compose::Static), which the partial adaptor sees through
//!
//! Every decision (can this be invoked now, can this value be stored in this
//! mode, are these packs joinable) is made by the type checker. A call
//! pattern that can never complete is rejected at build time; there is no
//! runtime error path.
//!
//! ## Feature Flags
//!
//! - `pack`: Type-level lists, callables, capture modes, packs and joins
//! - `partial`: The partial-application adaptor
//! - `compose`: `Pipable`, `Static` and helper callables
//! - `tracing`: Emit `tracing` events for curry and invoke decisions
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnpack::prelude::*;
//!
//! fn add(first: i32, second: i32) -> i32 {
//!     first + second
//! }
//!
//! assert_eq!(pack!(1, 2).apply(add), 3);
//! assert_eq!(pack_join!(pack!(1), pack!(), pack!(2)).apply(add), 3);
//!
//! let add_one = partial(add).call((1,));
//! assert_eq!(add_one.call((2,)), 3);
//! assert_eq!(partial(add).call((1, 2)), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Type-level list plumbing produces long where clauses by nature.
#![allow(clippy::type_complexity)]

#[macro_use]
mod trace;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and macros.
///
/// # Usage
///
/// ```rust
/// use fnpack::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "pack")]
    pub use crate::pack::*;
    #[cfg(feature = "pack")]
    pub use crate::{pack, pack_forward, pack_join};

    #[cfg(feature = "partial")]
    pub use crate::partial::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "pack")]
pub mod pack;

#[cfg(feature = "partial")]
pub mod partial;

#[cfg(feature = "compose")]
pub mod compose;
