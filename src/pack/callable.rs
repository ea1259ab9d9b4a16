//! Invocation with an argument tuple.
//!
//! Stable Rust does not let library types implement the `Fn` traits, so
//! adaptors in this crate describe "can be called with these arguments"
//! through [`CallableOnce`] and [`Callable`] instead. Both are implemented
//! for every closure and function of up to [`MAX_ARITY`](super::MAX_ARITY)
//! parameters, and by the crate's own adaptors, so packs can apply either.
//!
//! # Examples
//!
//! ```rust
//! use fnpack::pack::{Callable, CallableOnce};
//!
//! fn add(first: i32, second: i32) -> i32 {
//!     first + second
//! }
//!
//! assert_eq!(add.invoke((1, 2)), 3);
//!
//! let owned = String::from("moved");
//! let consume = move |suffix: &str| owned + suffix;
//! assert_eq!(consume.invoke_once(("!",)), "moved!");
//! ```

use super::hlist::for_each_arity;

/// A value that can be invoked once with the argument tuple `Args`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be called with arguments `{Args}`",
    label = "this callable does not accept `{Args}`",
    note = "argument types must match the parameters exactly, in order"
)]
pub trait CallableOnce<Args> {
    /// The result of the invocation.
    type Output;

    /// Consumes the callable and invokes it with `arguments`.
    fn invoke_once(self, arguments: Args) -> Self::Output;
}

/// A value that can be invoked any number of times through a shared
/// reference with the argument tuple `Args`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be called by reference with arguments `{Args}`",
    label = "this callable does not accept `{Args}`",
    note = "argument types must match the parameters exactly, in order"
)]
pub trait Callable<Args>: CallableOnce<Args> {
    /// Invokes the callable with `arguments`.
    fn invoke(&self, arguments: Args) -> Self::Output;
}

macro_rules! impl_callable {
    ($($name:ident),*) => {
        paste::paste! {
            impl<Function, Return, $($name),*> CallableOnce<($($name,)*)> for Function
            where
                Function: FnOnce($($name),*) -> Return,
            {
                type Output = Return;

                #[inline]
                fn invoke_once(self, arguments: ($($name,)*)) -> Return {
                    let ($([<$name:lower>],)*) = arguments;
                    self($([<$name:lower>]),*)
                }
            }

            impl<Function, Return, $($name),*> Callable<($($name,)*)> for Function
            where
                Function: Fn($($name),*) -> Return,
            {
                #[inline]
                fn invoke(&self, arguments: ($($name,)*)) -> Return {
                    let ($([<$name:lower>],)*) = arguments;
                    self($([<$name:lower>]),*)
                }
            }
        }
    };
}

for_each_arity!(impl_callable; ; T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn nothing() -> &'static str {
        "nothing"
    }

    #[allow(clippy::too_many_arguments)]
    fn sum_twelve(
        a: i32,
        b: i32,
        c: i32,
        d: i32,
        e: i32,
        f: i32,
        g: i32,
        h: i32,
        i: i32,
        j: i32,
        k: i32,
        l: i32,
    ) -> i32 {
        a + b + c + d + e + f + g + h + i + j + k + l
    }

    #[test]
    fn zero_arity_function_is_callable_with_unit() {
        assert_eq!(nothing.invoke(()), "nothing");
        assert_eq!(nothing.invoke_once(()), "nothing");
    }

    #[test]
    fn maximum_arity_function_is_callable() {
        let result = sum_twelve.invoke((1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12));
        assert_eq!(result, 78);
    }

    #[rstest]
    #[allow(clippy::needless_borrow)]
    #[case(2, 3, 6)]
    #[case(-4, 5, -20)]
    fn closures_invoke_in_order(#[case] first: i32, #[case] second: i32, #[case] expected: i32) {
        let multiply = |left: i32, right: i32| left * right;
        assert_eq!(multiply.invoke((first, second)), expected);
        assert_eq!((&multiply).invoke_once((first, second)), expected);
    }

    #[test]
    fn once_closures_may_move_their_environment() {
        let values = vec![1, 2, 3];
        let into_sum = move |extra: i32| values.into_iter().sum::<i32>() + extra;
        assert_eq!(into_sum.invoke_once((4,)), 10);
    }
}
