#![cfg(test)]

use std::hash::RandomState;

use super::*;
use crate::collections::traits::Set;
use crate::hash_set;
use crate::util::hash::{ManualHash, PassThroughState};

fn sorted<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    items.sort();
    items
}

#[test]
fn test_new_is_empty() {
    let set = HashSet::<i32>::new();
    assert_eq!(set.len(), 0, "A new set should have no elements.");
    assert!(set.is_empty(), "A new set should be empty.");
    assert_eq!(set.to_string(), "", "An empty set should display as an empty string.");
}

#[test]
fn test_insert_is_idempotent() {
    let mut set = HashSet::new();
    set.insert("test1");
    set.insert("test2");
    set.insert("test3");
    set.insert("test4");
    assert_eq!(set.len(), 4);

    assert!(!set.insert("test2"), "Inserting an existing element should report no change.");
    assert_eq!(set.len(), 4, "Inserting an existing element shouldn't change the length.");
}

#[test]
fn test_remove() {
    let mut set = HashSet::new();
    set.insert("test1");
    set.insert("test2");
    assert!(set.remove("test2"));
    set.insert("test3");

    assert_eq!(set.len(), 2);
    assert!(!set.contains("test"), "A value that was never inserted shouldn't be contained.");
    assert!(!set.contains("test2"), "A removed value shouldn't be contained.");
    assert!(!set.remove("test2"), "Removing an absent value should be a no-op.");
    assert_eq!(set.len(), 2);
}

#[test]
fn test_borrowed_lookups() {
    let mut set: HashSet<String> = ["alpha", "beta"].into_iter().map(String::from).collect();

    assert!(set.contains("alpha"), "Lookups should accept borrowed forms of the element.");
    assert_eq!(set.get("beta").map(String::as_str), Some("beta"));
    assert_eq!(set.take("alpha"), Some(String::from("alpha")));
    assert_eq!(set.take("alpha"), None);
    assert_eq!(set.len(), 1);
}

#[test]
fn test_insert_all_and_remove_all() {
    let mut set = HashSet::new();
    set.insert_all(["test1", "test2", "test3", "test4"]);
    assert_eq!(set.len(), 4);

    set.remove_all(["test1", "test3"]);
    assert_eq!(sorted(set.to_vec()), ["test2", "test4"]);

    set.remove_all(["test1", "test2", "test4"]);
    assert!(set.is_empty(), "Removing every element should leave the set empty.");
}

#[test]
fn test_clear_keeps_capacity() {
    let mut set = hash_set![1, 2, 3, 4];
    let cap = set.cap();
    set.clear();

    assert!(set.is_empty());
    assert_eq!(set.cap(), cap, "Clearing shouldn't release the allocation.");
}

#[test]
fn test_duplicates_collapse_on_creation() {
    let set = hash_set![1, 2, 2, 3, 3, 3];
    assert_eq!(set.len(), 3);

    let set: HashSet<_> = vec!["a", "a", "b"].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_intersection_either_size_order() {
    let larger = hash_set![1, 2, 3, 4];
    let smaller = hash_set![2, 5];

    for (a, b) in [(&larger, &smaller), (&smaller, &larger)] {
        let result = a.intersection(b);
        assert_eq!(result.len(), 1);
        assert!(result.contains(&2), "Intersection should contain the shared element.");
    }

    assert_eq!(larger.len(), 4, "Operands should remain unchanged after intersection.");
    assert_eq!(smaller.len(), 2, "Operands should remain unchanged after intersection.");
}

#[test]
fn test_set_algebra() {
    let a = hash_set![1, 2, 4];
    let b = hash_set![2, 3];

    let union = a.union(&b);
    assert_eq!(union.len(), 4);
    assert_eq!(sorted(union.into_vec()), [1, 2, 3, 4]);

    let intersection = a.intersection(&b);
    assert_eq!(sorted(intersection.into_vec()), [2]);

    let difference = a.difference(&b);
    assert_eq!(sorted(difference.into_vec()), [1, 4]);

    let symmetric_difference = a.symmetric_difference(&b);
    assert_eq!(sorted(symmetric_difference.into_vec()), [1, 3, 4]);

    assert_eq!(a, hash_set![1, 2, 4], "The receiver shouldn't be modified.");
    assert_eq!(b, hash_set![2, 3], "The other operand shouldn't be modified.");
}

#[test]
fn test_operators_match_methods() {
    let a = hash_set![1, 2, 4];
    let b = hash_set![2, 3];

    assert_eq!(&a | &b, a.union(&b));
    assert_eq!(&a & &b, a.intersection(&b));
    assert_eq!(&a - &b, a.difference(&b));
    assert_eq!(&a ^ &b, a.symmetric_difference(&b));

    let mut c = a.clone();
    c |= b.clone();
    assert_eq!(c, hash_set![1, 2, 3, 4]);

    let mut c = a.clone();
    c &= b.clone();
    assert_eq!(c, hash_set![2]);

    let mut c = a.clone();
    c -= b.clone();
    assert_eq!(c, hash_set![1, 4]);

    let mut c = a.clone();
    c ^= b;
    assert_eq!(c, hash_set![1, 3, 4]);
}

#[test]
fn test_subset_relations() {
    let small = hash_set![1, 2];
    let large = hash_set![1, 2, 3];
    let other = hash_set![7, 8];

    assert!(small.is_subset(&large));
    assert!(!large.is_subset(&small));
    assert!(large.is_superset(&small));
    assert!(small.is_disjoint(&other));
    assert!(!small.is_disjoint(&large));
    assert!(HashSet::<i32>::new().is_subset(&small), "The empty set is a subset of every set.");
}

#[test]
fn test_lazy_iterators_borrow_operands() {
    let a = hash_set![1, 2, 4];
    let b = hash_set![2, 3];

    let mut union: Vec<_> = a.iter_union(&b).copied().collect();
    union.sort();
    assert_eq!(union, [1, 2, 3, 4], "Union should yield each element exactly once.");

    assert_eq!(a.iter_intersection(&b).count(), 1);
    assert_eq!(a.iter_difference(&b).count(), 2);
    assert!(a.iter_difference(&b).size_hint().1 <= Some(a.len()));
}

#[test]
fn test_to_vec_is_snapshot() {
    let mut set = hash_set![1, 2, 3];
    let snapshot = set.to_vec();
    set.insert(4);
    set.remove(&1);

    assert_eq!(sorted(snapshot), [1, 2, 3], "Later mutation shouldn't affect a snapshot.");
}

#[test]
fn test_retain_and_drain() {
    let mut set: HashSet<i32> = (1..=10).collect();
    set.retain(|i| i % 2 == 0);
    assert_eq!(sorted(set.to_vec()), [2, 4, 6, 8, 10]);

    let drained = sorted(set.drain().collect());
    assert_eq!(drained, [2, 4, 6, 8, 10]);
    assert!(set.is_empty(), "Draining should remove every element.");
}

#[test]
fn test_display_and_debug() {
    let set = hash_set![7];
    assert_eq!(set.to_string(), "7");
    assert_eq!(format!("{set:?}"), format!("HashSet {{ contents: {{7}}, len: 1, cap: {} }}", set.cap()));

    let set = hash_set![1, 2, 3];
    let shown = set.to_string();
    let mut parts: Vec<_> = shown.split(',').collect();
    parts.sort();
    assert_eq!(parts, ["1", "2", "3"], "Display should join every element with a bare comma.");

    let shown = hash_set!["a", "b"].to_string();
    assert!(shown == "a,b" || shown == "b,a", "Display shouldn't pad the separator: {shown}");
}

#[test]
fn test_hash_collisions() {
    let mut set = HashSet::with_hasher(PassThroughState);
    set.insert(ManualHash::new(0, "zero"));
    set.insert(ManualHash::new(0, "one"));
    set.insert(ManualHash::new(2, "two"));
    set.insert(ManualHash::new(0, "three"));
    set.insert(ManualHash::new(2, "four"));
    set.insert(ManualHash::new(1, "five"));

    assert_eq!(set.len(), 6, "Colliding values that aren't equal should all be kept.");

    set.remove(&ManualHash::new(0, "zero"));
    set.remove(&ManualHash::new(2, "two"));

    assert_eq!(
        sorted(set.clone().into_iter().map(|i| i.value()).collect()),
        ["five", "four", "one", "three"],
        "Removing one colliding value shouldn't lose any of the others."
    );

    let mut other = HashSet::with_hasher(PassThroughState);
    other.insert_all([ManualHash::new(0, "one"), ManualHash::new(9, "nine")]);
    assert_eq!(
        set.intersection(&other).into_iter().map(|i| i.value()).collect::<Vec<_>>(),
        ["one"],
        "Set algebra should compare by equality, not by hash."
    );
}

#[test]
fn test_algebra_with_custom_hasher() {
    let mut a: HashSet<u64, PassThroughState> = HashSet::with_cap_and_hasher(4, PassThroughState);
    a.insert_all([1, 2, 3]);
    let mut b = HashSet::with_hasher(PassThroughState);
    b.insert_all([3, 4]);

    let union: HashSet<u64, PassThroughState> = a.union(&b);
    assert_eq!(sorted(union.into_vec()), [1, 2, 3, 4]);
    assert_eq!(a.intersection(&b).into_vec(), [3]);

    let empty: HashSet<i32, RandomState> = HashSet::with_hasher(RandomState::new());
    assert!(empty.union(&empty).is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_sequence() {
    let set = hash_set![3, 1, 2];
    let json = serde_json::to_string(&set).expect("serializing a set of integers");
    let mut parsed: Vec<i32> = serde_json::from_str(&json).expect("a JSON array");
    parsed.sort();
    assert_eq!(parsed, [1, 2, 3], "A set should serialize as a sequence of its elements.");

    let back: HashSet<i32> = serde_json::from_str("[1, 1, 2]").expect("a JSON array");
    assert_eq!(back, hash_set![1, 2], "Duplicates should collapse on deserialization.");
}
