//! Helper callables.
//!
//! - [`identity`]: returns its single argument unchanged
//! - [`always`]: ignores any number of arguments and returns a fixed value
//!
//! Both are handy targets when only the shape of a pack matters.

use crate::pack::{Callable, CallableOnce, IntoHList};

/// Returns the value unchanged.
///
/// # Examples
///
/// ```rust
/// use fnpack::compose::identity;
/// use fnpack::pack;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(pack!(3).apply(identity), 3);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// A callable that accepts any argument tuple and returns a fixed value.
///
/// Created by [`always`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Always<T> {
    value: T,
}

/// Creates a callable that ignores its arguments and returns `value`.
///
/// Invoked by reference it returns a clone of `value`; invoked once it
/// returns `value` itself.
///
/// # Examples
///
/// ```rust
/// use fnpack::compose::always;
/// use fnpack::pack;
///
/// assert_eq!(pack!().apply(always(3)), 3);
/// assert_eq!(pack!(1, "two", 3.0).apply(always('x')), 'x');
/// ```
#[inline]
pub const fn always<T>(value: T) -> Always<T> {
    Always { value }
}

impl<T> Always<T> {
    /// Returns the fixed value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, Args: IntoHList> CallableOnce<Args> for Always<T> {
    type Output = T;

    #[inline]
    fn invoke_once(self, _arguments: Args) -> T {
        self.value
    }
}

impl<T: Clone, Args: IntoHList> Callable<Args> for Always<T> {
    #[inline]
    fn invoke(&self, _arguments: Args) -> T {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-17)]
    fn identity_returns_input(#[case] value: i32) {
        assert_eq!(identity(value), value);
    }

    #[test]
    fn always_ignores_every_arity() {
        let constant = always(String::from("fixed"));
        assert_eq!(constant.invoke(()), "fixed");
        assert_eq!(constant.invoke((1,)), "fixed");
        assert_eq!(constant.invoke((1, 'a', [0_u8; 4])), "fixed");
        assert_eq!(constant.invoke_once((vec![1],)), "fixed");
    }
}
