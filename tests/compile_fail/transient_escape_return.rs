//! Test that a transient pack cannot be returned from its scope.

use fnpack::pack::forward_scope;

fn main() {
    let escaped = forward_scope((1_i32,), |pack| pack);
    let _ = escaped;
}
