//! Test that a pack of move-only values cannot be applied twice.

use fnpack::pack::pack_decay;

fn main() {
    let pack = pack_decay((Box::new(1_i32),));
    let first = pack.apply(|value: Box<i32>| *value);
    let second = pack.apply(|value: Box<i32>| *value);
    let _ = (first, second);
}
