//! Assertion functions for sequence outputs.

use crate::error::Result;
use crate::sequence::LazySeq;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics if the collections differ in length or content.
///
/// # Example
///
/// ```
/// use lazyseq::testing::assert_collections_equal;
///
/// assert_collections_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two collections hold the same elements, ignoring order.
///
/// # Panics
///
/// Panics if the lengths or the element sets differ.
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );

    let actual_set: HashSet<_> = actual.iter().collect();
    let expected_set: HashSet<_> = expected.iter().collect();
    if actual_set != expected_set {
        let missing: Vec<_> = expected_set.difference(&actual_set).collect();
        let extra: Vec<_> = actual_set.difference(&expected_set).collect();
        panic!("Collection content mismatch:\n  Missing elements: {missing:?}\n  Extra elements: {extra:?}");
    }
}

/// Consume `seq` and assert it yields exactly `expected`, in order.
///
/// # Panics
///
/// Panics if the sequence fails or yields something else.
pub fn assert_yields<'a, T: Debug + PartialEq + 'a>(seq: &mut LazySeq<'a, T>, expected: &[T]) {
    match seq.to_vec() {
        Ok(actual) => assert_collections_equal(&actual, expected),
        Err(err) => panic!("sequence {} failed instead of yielding {expected:?}: {err}", seq.id()),
    }
}

/// Assert that `result` is a [`SequenceClosed`](crate::SeqError::SequenceClosed) error.
///
/// # Panics
///
/// Panics on `Ok` or on any other error.
///
/// # Example
///
/// ```
/// use lazyseq::testing::assert_closed;
///
/// let mut seq = lazyseq::of([1, 2]);
/// seq.count().unwrap();
/// assert_closed(seq.count());
/// ```
pub fn assert_closed<T: Debug>(result: Result<T>) {
    match result {
        Err(err) if err.is_closed() => {}
        other => panic!("expected a closed-sequence error, got {other:?}"),
    }
}
