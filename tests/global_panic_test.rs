//! The fail-fast accessor contract, isolated in its own test binary so
//! no other test can have initialized the global cell first.

use configloader::global;

#[test]
#[should_panic(expected = "configuration not initialized")]
fn test_get_before_init_panics() {
    let _ = global::get();
}
