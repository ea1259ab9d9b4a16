//! Callable wrappers.
//!
//! This module provides the wrappers and helper callables that sit around
//! packs and partial adaptors:
//!
//! - [`Pipable`] / [`Piped`]: pipe a value into a function with
//!   [`PipeExt::pipe`], optionally with trailing arguments bound
//! - [`Static`]: a zero-size handle that builds a `Default` callable per
//!   call
//! - [`identity`] and [`always`]: minimal callables
//!
//! Every wrapper forwards [`Callable`](crate::pack::Callable) and
//! [`CallableOnce`](crate::pack::CallableOnce) to what it wraps, with the
//! same argument tuple, so wrapping is invisible to packs and to
//! [`partial`](crate::partial::partial).
//!
//! # Examples
//!
//! ```rust
//! use fnpack::compose::{always, pipable, PipeExt};
//! use fnpack::pack;
//!
//! fn add(first: i32, second: i32) -> i32 {
//!     first + second
//! }
//!
//! assert_eq!(pack!(1, 2).apply(pipable(add)), 3);
//! assert_eq!(1_i32.pipe(pipable(add).bind((2,))), 3);
//! assert_eq!(pack!(1, 2).apply(always(0)), 0);
//! ```

mod pipable;
mod static_function;
mod utils;

pub use pipable::{PipeExt, PipeTarget, Pipable, Piped, pipable};
pub use static_function::Static;
pub use utils::{Always, always, identity};
