//! Internal logging hooks.
//!
//! With the `tracing` feature enabled, [`trace_event!`] forwards to
//! [`tracing::trace!`]. Without it, the macro expands to nothing and its
//! arguments are never evaluated.

#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        ::tracing::trace!($($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        ()
    };
}
