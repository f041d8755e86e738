//! Tests for unit identifier collections.

use crate::unit::{CandidateSet, ExclusionSet, UnitId};

fn ids(names: &[&str]) -> Vec<UnitId> {
    names.iter().map(|name| UnitId::from(*name)).collect()
}

#[test]
fn dedupe_keeps_first_occurrence_order() {
    let set = CandidateSet::dedupe(ids(&["b", "a", "b", "c", "a", "b"]));
    assert_eq!(set.as_slice(), ids(&["b", "a", "c"]).as_slice());
}

#[test]
fn dedupe_of_unique_input_is_identity() {
    let input = ids(&["x", "y", "z"]);
    let set = CandidateSet::dedupe(input.clone());
    assert_eq!(set.as_slice(), input.as_slice());
}

#[test]
fn without_removes_excluded_and_preserves_order() {
    let set = CandidateSet::dedupe(ids(&["a", "b", "c", "d"]));
    let excludes: ExclusionSet = ids(&["b", "d", "zz"]).into_iter().collect();

    let remaining = set.without(&excludes);
    assert_eq!(remaining.as_slice(), ids(&["a", "c"]).as_slice());
    for excluded in excludes.iter() {
        assert!(!remaining.contains(excluded));
    }
}

#[test]
fn from_iterator_dedupes() {
    let set: CandidateSet = ids(&["a", "a", "b"]).into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn empty_candidate_set() {
    let set = CandidateSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert!(!set.contains(&UnitId::from("a")));
}
