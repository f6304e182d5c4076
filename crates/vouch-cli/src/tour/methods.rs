//! Standard library methods on collections and strings

use std::collections::BTreeMap;
use vouch_runtime::prelude::*;

pub fn register(registry: &mut Registry) {
    registry
        .register("contains", contains)
        .register("Structural equality", structural_equality)
        .register_pending("str::repeat")
        .register_pending("Iterator::map")
        .register_pending("Iterator::filter")
        .register_pending("Iterator::fold")
        .register_pending("Iterator::for_each")
        .register_pending("Iterator::find")
        .register_pending("Iterator::position")
        .register_pending("BTreeMap::keys")
        .register_pending("BTreeMap::values")
        .register_pending("BTreeMap::iter")
        .register_pending("Extend");
}

fn contains() -> CaseResult {
    let numbers = [1, 2, 3, 4, 5, 6];

    assert_true(numbers.contains(&4), "numbers should contain 4")?;
    assert_false(numbers.contains(&9), "numbers should not contain 9")?;
    assert_contains(numbers, 4)?;

    // Also for strings
    assert_true("aaa".contains('a'), "'aaa' should contain 'a'")?;
    assert_false("bbb".contains('a'), "'bbb' should not contain 'a'")?;
    assert_contains("aaa", "a")?;
    Ok(())
}

fn structural_equality() -> CaseResult {
    let nums = vec![1, 2, 3];

    // Strict equality never holds between two collections
    assert_not_equal(nums.clone(), nums.clone())?;
    assert_deep_equal(nums.clone(), [1, 2, 3])?;
    assert_not_deep_equal(nums.clone(), [3, 2, 1])?;
    assert_length(nums, 3)?;

    let mut first = BTreeMap::new();
    first.insert("one", 1);
    first.insert("two", 2);

    let mut second = BTreeMap::new();
    second.insert("two", 2);
    second.insert("one", 1);

    // Key order does not matter
    assert_deep_equal(first, second)?;
    Ok(())
}
