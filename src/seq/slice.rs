//! Helpers over slices.
//!
//! Every function borrows its input and returns a fresh value, so none of them can invalidate the
//! caller's data. Functions that need to test membership against a whole slice (like
//! [`intersect`] or [`unique`]) build a [`HashSet`] of references first, keeping them linear rather
//! than quadratic.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::collections::hash::HashSet;
use crate::util::error::{IndexOutOfBounds, ZeroChunkSize};
use crate::util::fmt::Joined;

/// Returns true if `slice` contains an element equal to `item`.
pub fn contains<T: PartialEq>(slice: &[T], item: &T) -> bool {
    slice.contains(item)
}

/// Returns the index of the first element equal to `item`.
pub fn index_of<T: PartialEq>(slice: &[T], item: &T) -> Option<usize> {
    slice.iter().position(|i| i == item)
}

/// Returns the index of the first element matching `predicate`.
pub fn find_index<T, F: FnMut(&T) -> bool>(slice: &[T], mut predicate: F) -> Option<usize> {
    slice.iter().position(|i| predicate(i))
}

/// Returns the first element matching `predicate`.
pub fn find<T, F: FnMut(&T) -> bool>(slice: &[T], mut predicate: F) -> Option<&T> {
    slice.iter().find(|i| predicate(i))
}

/// Returns true if `index` refers to an element of `slice`. Negative indices never do.
pub fn index_exists<T>(slice: &[T], index: isize) -> bool {
    usize::try_from(index).is_ok_and(|i| i < slice.len())
}

pub fn filter<T: Clone, F: FnMut(&T) -> bool>(slice: &[T], mut predicate: F) -> Vec<T> {
    slice.iter().filter(|i| predicate(i)).cloned().collect()
}

pub fn map<T, U, F: FnMut(&T) -> U>(slice: &[T], f: F) -> Vec<U> {
    slice.iter().map(f).collect()
}

/// Folds `slice` from the left, starting with `init`.
pub fn reduce<T, U, F: FnMut(U, &T) -> U>(slice: &[T], init: U, f: F) -> U {
    slice.iter().fold(init, f)
}

/// Folds `slice` from the right, starting with `init`.
pub fn reduce_right<T, U, F: FnMut(U, &T) -> U>(slice: &[T], init: U, f: F) -> U {
    slice.iter().rev().fold(init, f)
}

/// Sums the result of `f` over every element. An empty slice sums to `0.0`.
pub fn sum_by<T, F: FnMut(&T) -> f64>(slice: &[T], f: F) -> f64 {
    slice.iter().map(f).sum()
}

pub fn count<T, F: FnMut(&T) -> bool>(slice: &[T], mut predicate: F) -> usize {
    slice.iter().filter(|i| predicate(i)).count()
}

/// Returns true if every element matches `predicate`, including when there are no elements.
pub fn all_match<T, F: FnMut(&T) -> bool>(slice: &[T], predicate: F) -> bool {
    slice.iter().all(predicate)
}

/// Returns true if at least one element matches `predicate`.
pub fn any_match<T, F: FnMut(&T) -> bool>(slice: &[T], predicate: F) -> bool {
    slice.iter().any(predicate)
}

pub fn concat<T: Clone>(slices: &[&[T]]) -> Vec<T> {
    slices.concat()
}

/// Flattens one level of nesting.
pub fn flatten<T: Clone>(nested: &[Vec<T>]) -> Vec<T> {
    nested.iter().flatten().cloned().collect()
}

/// Returns the first occurrence of each distinct element, in their original order.
///
/// # Examples
/// ```
/// # use unikit::seq::slice;
/// assert_eq!(slice::unique(&[3, 1, 3, 2, 1]), [3, 1, 2]);
/// ```
pub fn unique<T: Hash + Eq + Clone>(slice: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_cap(slice.len());
    slice
        .iter()
        .filter(|i| seen.insert(*i))
        .cloned()
        .collect()
}

pub fn reversed<T: Clone>(slice: &[T]) -> Vec<T> {
    slice.iter().rev().cloned().collect()
}

/// Returns a sorted copy of `slice`, where `less(a, b)` returns true if `a` belongs before `b`.
/// The sort is stable.
pub fn sorted_by<T: Clone, F: FnMut(&T, &T) -> bool>(slice: &[T], mut less: F) -> Vec<T> {
    let mut sorted = slice.to_vec();
    sorted.sort_by(|a, b| {
        if less(a, b) {
            Ordering::Less
        } else if less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    sorted
}

/// Splits `slice` into consecutive chunks of `size` elements. The last chunk holds whatever is
/// left over and may be shorter.
///
/// # Errors
/// Returns [`ZeroChunkSize`] if `size` is 0.
///
/// # Examples
/// ```
/// # use unikit::seq::slice;
/// assert_eq!(slice::chunk(&[1, 2, 3, 4, 5], 2)?, [vec![1, 2], vec![3, 4], vec![5]]);
/// assert!(slice::chunk(&[1, 2, 3], 0).is_err());
/// # Ok::<(), unikit::seq::ZeroChunkSize>(())
/// ```
pub fn chunk<T: Clone>(slice: &[T], size: usize) -> Result<Vec<Vec<T>>, ZeroChunkSize> {
    if size == 0 {
        return Err(ZeroChunkSize);
    }
    Ok(slice.chunks(size).map(<[T]>::to_vec).collect())
}

/// Splits `slice` into the elements that match `predicate` and those that don't, keeping their
/// order.
pub fn partition<T: Clone, F: FnMut(&T) -> bool>(slice: &[T], mut predicate: F) -> (Vec<T>, Vec<T>) {
    slice.iter().cloned().partition(|i| predicate(i))
}

/// Pairs up elements by position, stopping at the end of the shorter slice.
pub fn zip<A: Clone, B: Clone>(a: &[A], b: &[B]) -> Vec<(A, B)> {
    a.iter().cloned().zip(b.iter().cloned()).collect()
}

/// Returns every combination that takes one element from each slice, with the first slice varying
/// slowest.
///
/// With no slices there is exactly one (empty) combination. If any slice is empty there are none.
///
/// # Examples
/// ```
/// # use unikit::seq::slice;
/// let sides: &[&[i32]] = &[&[1, 2], &[3, 4]];
/// assert_eq!(
///     slice::cartesian_product(sides),
///     [vec![1, 3], vec![1, 4], vec![2, 3], vec![2, 4]],
/// );
/// ```
pub fn cartesian_product<T: Clone>(slices: &[&[T]]) -> Vec<Vec<T>> {
    slices.iter().copied().fold(vec![Vec::new()], |acc, slice| {
        acc.into_iter()
            .flat_map(move |prefix| {
                slice.iter().map(move |item| {
                    let mut combination = prefix.clone();
                    combination.push(item.clone());
                    combination
                })
            })
            .collect()
    })
}

/// Returns a copy of `slice` rotated left by `positions`. Rotation wraps, and a negative amount
/// rotates right instead.
pub fn rotate_left<T: Clone>(slice: &[T], positions: isize) -> Vec<T> {
    let mut rotated = slice.to_vec();
    if let Some(mid) = wrap_positions(positions, slice.len()) {
        rotated.rotate_left(mid);
    }
    rotated
}

/// Returns a copy of `slice` rotated right by `positions`. Rotation wraps, and a negative amount
/// rotates left instead.
pub fn rotate_right<T: Clone>(slice: &[T], positions: isize) -> Vec<T> {
    let mut rotated = slice.to_vec();
    if let Some(mid) = wrap_positions(positions, slice.len()) {
        rotated.rotate_right(mid);
    }
    rotated
}

fn wrap_positions(positions: isize, len: usize) -> Option<usize> {
    // Only slices of zero-sized types can be longer than isize::MAX, and rotating those is a no-op.
    let len = isize::try_from(len).ok().filter(|len| *len > 0)?;
    usize::try_from(positions.rem_euclid(len)).ok()
}

/// Copies the elements in `start..end`, with both bounds clamped to the slice. An empty range
/// (after clamping) produces an empty Vec rather than panicking.
pub fn range<T: Clone>(slice: &[T], start: usize, end: usize) -> Vec<T> {
    let end = end.min(slice.len());
    if start >= end {
        return Vec::new();
    }
    slice[start..end].to_vec()
}

/// Copies the elements at each of `indices`, in the order given. Indices past the end of `slice`
/// are skipped; see [`get_all`] for a strict version.
pub fn pick<T: Clone>(slice: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().filter_map(|i| slice.get(*i)).cloned().collect()
}

/// Copies the elements at each of `indices`, in the order given.
///
/// # Errors
/// Returns [`IndexOutOfBounds`] for the first index past the end of `slice`.
pub fn get_all<T: Clone>(slice: &[T], indices: &[usize]) -> Result<Vec<T>, IndexOutOfBounds> {
    indices
        .iter()
        .map(|index| {
            slice.get(*index).cloned().ok_or(IndexOutOfBounds {
                index: *index,
                len: slice.len(),
            })
        })
        .collect()
}

/// Returns the elements of `b` that are also present in `a`, in `b`'s order. Duplicates in `b` are
/// kept.
pub fn intersect<T: Hash + Eq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let present: HashSet<&T> = a.iter().collect();
    b.iter().filter(|i| present.contains(i)).cloned().collect()
}

/// Returns the elements of `a` that are absent from `b`, in `a`'s order.
///
/// This is one-sided. For the elements unique to either side, see [`symmetric_difference`].
///
/// # Examples
/// ```
/// # use unikit::seq::slice;
/// assert_eq!(slice::difference(&[1, 2, 3, 4], &[2, 4, 6]), [1, 3]);
/// ```
pub fn difference<T: Hash + Eq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let excluded: HashSet<&T> = b.iter().collect();
    a.iter().filter(|i| !excluded.contains(i)).cloned().collect()
}

/// Returns the elements of `b` that are absent from `a`, followed by the elements of `a` that are
/// absent from `b`.
pub fn symmetric_difference<T: Hash + Eq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut result = difference(b, a);
    result.extend(difference(a, b));
    result
}

/// Pushes `item` onto `vec` unless an equal element is already there. Returns true if it was
/// pushed.
pub fn append_if_missing<T: PartialEq>(vec: &mut Vec<T>, item: T) -> bool {
    if vec.contains(&item) {
        return false;
    }
    vec.push(item);
    true
}

/// Returns `slice` without its last element. An empty slice stays empty.
pub fn without_last<T>(slice: &[T]) -> &[T] {
    slice.split_last().map_or(slice, |(_, rest)| rest)
}

/// Returns `slice` without its first element. An empty slice stays empty.
pub fn without_first<T>(slice: &[T]) -> &[T] {
    slice.split_first().map_or(slice, |(_, rest)| rest)
}

/// Returns a random permutation of `slice`, drawn from `rng`.
///
/// Passing the generator in (rather than reaching for a global one) keeps results reproducible:
/// the same seed always gives the same order.
///
/// # Examples
/// ```
/// # use rand::SeedableRng;
/// # use rand::rngs::StdRng;
/// # use unikit::seq::slice;
/// let a = slice::shuffled(&[1, 2, 3, 4, 5], &mut StdRng::seed_from_u64(42));
/// let b = slice::shuffled(&[1, 2, 3, 4, 5], &mut StdRng::seed_from_u64(42));
/// assert_eq!(a, b);
/// ```
pub fn shuffled<T: Clone, R: Rng + ?Sized>(slice: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = slice.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Groups elements by the key `key` returns for them. Within a group, elements keep their original
/// order.
pub fn group_by<T: Clone, K: Hash + Eq, F: FnMut(&T) -> K>(slice: &[T], mut key: F) -> HashMap<K, Vec<T>> {
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in slice {
        groups.entry(key(item)).or_default().push(item.clone());
    }
    groups
}

/// Indexes elements by the key `key` returns for them. When two elements share a key, the later
/// one wins.
pub fn to_map<T: Clone, K: Hash + Eq, F: FnMut(&T) -> K>(slice: &[T], mut key: F) -> HashMap<K, T> {
    slice.iter().map(|item| (key(item), item.clone())).collect()
}

/// Displays every element, separated by `sep`.
///
/// # Examples
/// ```
/// # use unikit::seq::slice;
/// assert_eq!(slice::join(&[1, 2, 3], "-"), "1-2-3");
/// assert_eq!(slice::join::<u8>(&[], "-"), "");
/// ```
pub fn join<T: Display>(slice: &[T], sep: &str) -> String {
    Joined::new(slice.iter(), sep).to_string()
}
