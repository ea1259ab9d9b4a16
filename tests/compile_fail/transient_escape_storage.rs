//! Test that a transient pack cannot be stored outside its scope.

use fnpack::pack::forward_scope;

fn main() {
    let mut stored = None;
    forward_scope((1_i32,), |pack| {
        stored = Some(pack);
    });
    let _ = stored;
}
