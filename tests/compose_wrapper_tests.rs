#![cfg(all(feature = "compose", feature = "partial"))]
//! Tests for the callable wrappers and their interaction with packs and
//! partial adaptors.
//!
//! Wrapping a function in `Pipable` or `Static` must not change which
//! arguments complete a call or what the function receives.

use fnpack::compose::{PipeExt, Static, always, identity, pipable};
use fnpack::pack::{Callable, CallableOnce, pack_decay};
use fnpack::partial::partial;
use fnpack::{pack, pack_join};
use rstest::rstest;

fn sum3(first: i32, second: i32, third: i32) -> i32 {
    first * 100 + second * 10 + third
}

#[derive(Debug, Default, Clone, Copy)]
struct Sum3;

impl CallableOnce<(i32, i32, i32)> for Sum3 {
    type Output = i32;

    fn invoke_once(self, (first, second, third): (i32, i32, i32)) -> i32 {
        sum3(first, second, third)
    }
}

impl Callable<(i32, i32, i32)> for Sum3 {
    fn invoke(&self, (first, second, third): (i32, i32, i32)) -> i32 {
        sum3(first, second, third)
    }
}

// =============================================================================
// Transparency
// =============================================================================

#[rstest]
#[case(1, 2, 3)]
#[case(9, 0, 4)]
fn partial_results_match_across_wrappers(
    #[case] first: i32,
    #[case] second: i32,
    #[case] third: i32,
) {
    let expected = sum3(first, second, third);

    let bare = partial(sum3);
    let piped = partial(pipable(sum3));
    let stored = partial(Static::<Sum3>::new());

    assert_eq!(bare.call((first,)).call((second, third)), expected);
    assert_eq!(piped.call((first,)).call((second, third)), expected);
    assert_eq!(stored.call((first,)).call((second, third)), expected);

    assert_eq!(bare.call((first, second)).call((third,)), expected);
    assert_eq!(piped.call((first, second)).call((third,)), expected);
    assert_eq!(stored.call((first, second)).call((third,)), expected);
}

#[test]
fn wrapper_counts_match_bare_function() {
    assert_eq!(
        partial(pipable(sum3)).remaining(),
        partial(sum3).remaining()
    );
    assert_eq!(partial(Static::<Sum3>::new()).remaining(), 3);
}

#[test]
fn packs_apply_wrapped_functions() {
    assert_eq!(pack!(1, 2, 3).apply(pipable(sum3)), 123);
    assert_eq!(pack!(1, 2, 3).apply(Static::<Sum3>::new()), 123);
    assert_eq!(
        pack_join!(pack!(1), pack!(2, 3)).apply_with(&Static::<Sum3>::new()),
        123
    );
}

// =============================================================================
// Pipes
// =============================================================================

#[test]
fn pipe_sends_value_first() {
    assert_eq!(1_i32.pipe(pipable(sum3).bind((2, 3))), 123);
    assert_eq!(5_i32.pipe(pipable(identity)), 5);
}

#[test]
fn pipe_into_partial_result() {
    let tail = partial(sum3).call((1, 2));
    assert_eq!(3_i32.pipe(pipable(tail)), 123);
}

#[test]
fn bound_arguments_live_in_a_decay_pack() {
    let text = String::from("suffix");
    let piped = pipable(|head: &str, tail: String| format!("{head}-{tail}")).bind((text,));
    assert_eq!("head".pipe(piped), "head-suffix");
}

// =============================================================================
// Helper callables
// =============================================================================

#[test]
fn always_accepts_any_pack() {
    assert_eq!(pack!().apply(always("x")), "x");
    assert_eq!(pack!(1, 2.0, "three").apply(always("x")), "x");
    assert_eq!(pack_decay((vec![0_u8],)).apply_with(&always(7)), 7);
}

#[test]
fn identity_returns_sole_slot() {
    assert_eq!(pack!(String::from("same")).apply(identity), "same");
}
