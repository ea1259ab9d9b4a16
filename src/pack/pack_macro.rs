//! Macros for building and joining packs.

/// Builds a decay pack owning every argument.
///
/// # Examples
///
/// ```rust
/// use fnpack::pack;
///
/// assert_eq!(pack!(1, 2).apply(|a: i32, b: i32| a + b), 3);
/// assert!(pack!().is_empty());
/// ```
#[macro_export]
macro_rules! pack {
    ($($argument:expr),* $(,)?) => {
        $crate::pack::pack_decay(($($argument,)*))
    };
}

/// Builds a forward pack from references.
///
/// # Examples
///
/// ```rust
/// use fnpack::pack_forward;
///
/// let mut total = 1;
/// let step = 2;
/// pack_forward!(&mut total, &step).apply(|total: &mut i32, step: &i32| *total += step);
/// assert_eq!(total, 3);
/// ```
#[macro_export]
macro_rules! pack_forward {
    ($($argument:expr),* $(,)?) => {
        $crate::pack::pack_forward(($($argument,)*))
    };
}

/// Joins any number of packs, left to right.
///
/// With no arguments this is the empty decay pack; with one it is that
/// pack; otherwise the packs are joined as a right fold.
///
/// # Examples
///
/// ```rust
/// use fnpack::{pack, pack_join};
///
/// fn add(first: i32, second: i32) -> i32 {
///     first + second
/// }
///
/// assert_eq!(pack_join!(pack!(1, 2)).apply(add), 3);
/// assert_eq!(pack_join!(pack!(), pack!(1, 2)).apply(add), 3);
/// assert_eq!(pack_join!(pack!(1), pack!(), pack!(2)).apply(add), 3);
/// assert_eq!(pack_join!().apply(|| 0), 0);
/// ```
#[macro_export]
macro_rules! pack_join {
    () => {
        $crate::pack::Pack::empty()
    };
    ($pack:expr $(,)?) => {
        $crate::pack::join_all(($pack,))
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::pack::Join::join($first, $crate::pack_join!($($rest),+))
    };
}
