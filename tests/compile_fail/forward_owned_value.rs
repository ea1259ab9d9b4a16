//! Test that a forward pack rejects an owned value.

use fnpack::pack::pack_forward;

fn main() {
    let value = 1_i32;
    let _ = pack_forward((&value, 2_i32));
}
