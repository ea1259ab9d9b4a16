//! Partial application.
//!
//! [`partial`] wraps a function in a [`Partial`] adaptor. Each call to the
//! adaptor supplies more arguments: once they complete the function's
//! parameter list the function runs, and until then every call returns a
//! new adaptor holding the arguments captured so far.
//!
//! ```rust
//! use fnpack::partial::partial;
//!
//! fn add(first: i32, second: i32) -> i32 {
//!     first + second
//! }
//!
//! assert_eq!(partial(add).call((1,)).call((2,)), 3);
//! assert_eq!(partial(add).call((1, 2)), 3);
//! assert_eq!(partial(add).call(()).call((1,)).call((2,)), 3);
//! ```
//!
//! Whether a call invokes or curries is decided from the argument types
//! alone. Captured arguments are moved into a decay [`Pack`](crate::pack::Pack)
//! owned by the new adaptor; the arguments of the completing call are
//! forwarded as they are.
//!
//! # Errors
//!
//! The adaptor adds no failure modes. Whatever the wrapped function
//! returns, including an `Err`, is returned unchanged, and panics unwind
//! through it.

mod adaptor;
mod dispatch;

pub use adaptor::{Partial, partial, partial_with};
pub use dispatch::{Dispatch, DispatchOnce, Leftover, Remaining, Supply, SupplyOnce};
