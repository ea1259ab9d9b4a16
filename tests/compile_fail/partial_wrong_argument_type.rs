//! Test that an argument of the wrong type is rejected.

use fnpack::partial::partial;

fn add(first: i32, second: i32) -> i32 {
    first + second
}

fn main() {
    let _ = partial(add).call(("one",));
}
