//! Test that supplying more arguments than the signature takes is rejected.

use fnpack::partial::partial;

fn add(first: i32, second: i32) -> i32 {
    first + second
}

fn main() {
    let _ = partial(add).call((1_i32, 2_i32, 3_i32));
}
