//! Transient forwarding packs.
//!
//! A transient pack forwards its arguments for exactly one call chain. It is
//! handed to a closure by [`forward_scope`] and branded with a lifetime that
//! only exists inside that closure, so it cannot be returned or stored.
//!
//! ```compile_fail
//! use fnpack::pack::forward_scope;
//!
//! let escaped = forward_scope((1, 2), |pack| pack);
//! ```
//!
//! ```compile_fail
//! use fnpack::pack::forward_scope;
//!
//! forward_scope((1,), |pack| {
//!     let copy = pack.clone();
//! });
//! ```

use super::argument_pack::Pack;
use super::capture::Transient;
use super::hlist::IntoHList;

/// Builds a transient pack from `arguments` and passes it to `body`.
///
/// The arguments keep their exact types: owned values stay owned, and
/// references stay references of the same category.
///
/// # Examples
///
/// ```rust
/// use fnpack::pack::{forward_scope, pack_decay};
///
/// let mut log = Vec::new();
/// let length = forward_scope((&mut log, String::from("entry")), |pack| {
///     pack.apply(|log: &mut Vec<String>, entry: String| {
///         log.push(entry);
///         log.len()
///     })
/// });
///
/// assert_eq!(length, 1);
///
/// let sum = forward_scope((2,), |tail| {
///     pack_decay((1,)).join(tail).apply(|a: i32, b: i32| a + b)
/// });
/// assert_eq!(sum, 3);
///
/// let nested = forward_scope((1,), |outer| {
///     forward_scope((2,), |inner| outer.join(inner).apply(|a: i32, b: i32| a + b))
/// });
/// assert_eq!(nested, 3);
/// ```
#[inline]
pub fn forward_scope<T, R>(
    arguments: T,
    body: impl for<'s> FnOnce(Pack<Transient<'s>, T::HList>) -> R,
) -> R
where
    T: IntoHList,
{
    with_transient(arguments.into_hlist(), body)
}

/// [`forward_scope`] over a slot list instead of a tuple.
#[inline]
pub(crate) fn with_transient<L, R>(
    slots: L,
    body: impl for<'s> FnOnce(Pack<Transient<'s>, L>) -> R,
) -> R {
    body(Pack::from_hlist(slots))
}
