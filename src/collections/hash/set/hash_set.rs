use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::{Drain, Iter};
use crate::collections::traits::Set;
use crate::util::fmt::{DebugRaw, Joined};

/// An unordered collection of unique values, which relies on the values implementing [`Hash`] and
/// [`Eq`].
///
/// Storage is a [`HashMap`] from each element to `()`, so every element is present at most once
/// by construction. Iteration order is unspecified and may change between insertions.
///
/// The set algebra methods ([`union`](HashSet::union), [`intersection`](HashSet::intersection),
/// [`difference`](HashSet::difference) and
/// [`symmetric_difference`](HashSet::symmetric_difference)) never modify either operand. They
/// return a freshly allocated set, built with a clone of the receiver's hasher. Lazy, borrowed
/// versions of the same operations are provided by the [`Set`] trait.
///
/// It is a logic error for an element to be modified in a way that changes its hash while it is in
/// the set. Because of this, there is no mutable iteration.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashSet.
/// - `m`: The number of items in the other HashSet.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `union` | `O(n+m)` |
/// | `intersection` | `O(min(n, m))` |
/// | `difference` | `O(n)` |
/// | `symmetric_difference` | `O(n+m)` |
/// | `to_vec` | `O(n)` |
///
/// \* Expected, assuming a reasonable hasher. Inserting may also trigger a resize, which takes
/// `O(n)`.
#[derive(Clone)]
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    // Yay, we get to do the thing where unit type evaluates to a no-op.
    pub(crate) inner: HashMap<T, (), B>,
}

impl<T: Hash + Eq> HashSet<T> {
    /// Creates a new, empty HashSet using the default hasher. Memory will be allocated when the
    /// first element is inserted.
    ///
    /// # Examples
    /// ```
    /// # use unikit::collections::hash::HashSet;
    /// let set: HashSet<i32> = HashSet::new();
    /// assert_eq!(set.len(), 0);
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> HashSet<T> {
        HashSet {
            inner: HashMap::new(),
        }
    }

    /// Creates a new, empty HashSet with space for at least `cap` elements before reallocating.
    pub fn with_cap(cap: usize) -> HashSet<T> {
        HashSet {
            inner: HashMap::with_capacity(cap),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    pub fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_hasher(hasher),
        }
    }

    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_capacity_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of distinct elements in the set.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    pub fn hasher(&self) -> &B {
        self.inner.hasher()
    }

    /// Adds `item` to the set, returning true if it wasn't already present. Inserting an element
    /// that is already in the set leaves the set untouched, including the existing element.
    ///
    /// # Examples
    /// ```
    /// # use unikit::collections::hash::HashSet;
    /// let mut set = HashSet::new();
    /// assert!(set.insert("test1"));
    /// assert!(!set.insert("test1"));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> bool {
        match self.inner.entry(item) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(());
                true
            },
        }
    }

    /// Adds every item from `items`, in order. Duplicates (within `items` or with the existing
    /// contents) are collapsed.
    ///
    /// # Examples
    /// ```
    /// # use unikit::collections::hash::HashSet;
    /// let mut set = HashSet::new();
    /// set.insert_all(["test1", "test2", "test3", "test4"]);
    /// assert_eq!(set.len(), 4);
    /// ```
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let iter = items.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.insert(item);
        }
    }

    /// Removes `item` from the set, returning true if it was present. Removing an absent element
    /// is a no-op.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(item).is_some()
    }

    /// Removes every item in `items` from the set, skipping those that aren't present.
    ///
    /// # Examples
    /// ```
    /// # use unikit::collections::hash::HashSet;
    /// let mut set = HashSet::from(["test1", "test2", "test3", "test4"]);
    /// set.remove_all(["test1", "test3"]);
    /// set.remove_all(["test1", "test2", "test4"]);
    /// assert!(set.is_empty());
    /// ```
    pub fn remove_all<'q, Q, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'q Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'q,
    {
        for item in items {
            self.inner.remove(item);
        }
    }

    /// Removes `item` from the set and returns the element that was stored, if any.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(item).map(|(stored, _)| stored)
    }

    /// Returns a reference to the stored element equal to `item`, if any.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_key_value(item).map(|(stored, _)| stored)
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(item)
    }

    /// Removes every element, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Keeps only the elements for which `predicate` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut predicate: F) {
        self.inner.retain(|item, _| predicate(item))
    }

    /// Removes every element, returning them as an owned iterator. The capacity is kept.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain(self.inner.drain())
    }

    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Consumes the set, returning its elements in an unspecified order.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    pub fn is_subset(&self, other: &HashSet<T, B>) -> bool {
        Set::is_subset(self, other)
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    pub fn is_superset(&self, other: &HashSet<T, B>) -> bool {
        Set::is_superset(self, other)
    }

    pub fn is_disjoint(&self, other: &HashSet<T, B>) -> bool {
        Set::is_disjoint(self, other)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> HashSet<T, B> {
    /// Returns a new set containing every element that is in `self`, `other` or both. (`self ∪
    /// other`)
    ///
    /// # Examples
    /// ```
    /// # use unikit::collections::hash::HashSet;
    /// let a = HashSet::from([1, 2, 4]);
    /// let b = HashSet::from([2, 3]);
    /// assert_eq!(a.union(&b), HashSet::from([1, 2, 3, 4]));
    /// assert_eq!(a.len(), 3);
    /// ```
    pub fn union(&self, other: &HashSet<T, B>) -> HashSet<T, B> {
        self.collect_from(self.iter_union(other), self.len().max(other.len()))
    }

    /// Returns a new set containing only the elements present in both `self` and `other`. (`self
    /// ∩ other`)
    ///
    /// The smaller set is iterated, so the cost depends only on the smaller operand.
    ///
    /// # Examples
    /// ```
    /// # use unikit::collections::hash::HashSet;
    /// let a = HashSet::from([1, 2, 4]);
    /// let b = HashSet::from([2, 3]);
    /// assert_eq!(a.intersection(&b), HashSet::from([2]));
    /// ```
    pub fn intersection(&self, other: &HashSet<T, B>) -> HashSet<T, B> {
        self.collect_from(self.iter_intersection(other), self.len().min(other.len()))
    }

    /// Returns a new set containing the elements of `self` that are not in `other`. (`self \
    /// other`)
    ///
    /// # Examples
    /// ```
    /// # use unikit::collections::hash::HashSet;
    /// let a = HashSet::from([1, 2, 4]);
    /// let b = HashSet::from([2, 3]);
    /// assert_eq!(a.difference(&b), HashSet::from([1, 4]));
    /// ```
    pub fn difference(&self, other: &HashSet<T, B>) -> HashSet<T, B> {
        self.collect_from(self.iter_difference(other), self.len())
    }

    /// Returns a new set containing the elements that are in exactly one of `self` and `other`.
    /// (`self △ other`)
    pub fn symmetric_difference(&self, other: &HashSet<T, B>) -> HashSet<T, B> {
        self.collect_from(self.iter_symmetric_difference(other), self.len())
    }

    /// Returns a snapshot of the set's elements, in an unspecified order. Later changes to the set
    /// don't affect the returned Vec.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    fn collect_from<'a, I>(&self, items: I, cap: usize) -> HashSet<T, B>
    where
        I: Iterator<Item = &'a T>,
        T: 'a,
    {
        let mut set = HashSet::with_cap_and_hasher(cap, self.hasher().clone());
        for item in items {
            set.inner.insert(item.clone(), ());
        }
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T> for HashSet<T, B> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn contains(&self, item: &T) -> bool {
        self.inner.contains_key(item)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        self.into_iter()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for HashSet<T, B> {
    fn default() -> Self {
        HashSet {
            inner: HashMap::default(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashSet<T, B> {}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for HashSet<T> {
    fn from(value: [T; N]) -> Self {
        let mut set = HashSet::with_cap(N);
        set.insert_all(value);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut set = HashSet::default();
        set.insert_all(value);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter)
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, B: BuildHasher> Extend<&'a T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.insert_all(iter.into_iter().copied())
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> BitOr for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitOrAssign for HashSet<T, B> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert_all(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> BitAnd for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitAndAssign for HashSet<T, B> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.retain(|item| rhs.contains(item))
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> BitXor for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitXorAssign for HashSet<T, B> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for item in rhs {
            if !self.remove(&item) {
                self.insert(item);
            }
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Sub for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> SubAssign for HashSet<T, B> {
    fn sub_assign(&mut self, rhs: Self) {
        for item in rhs {
            self.remove(&item);
        }
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field(
                "contents",
                &DebugRaw(format!(
                    "{{{}}}",
                    self.iter()
                        .map(|i| format!("{i:?}"))
                        .collect::<Vec<String>>()
                        .join(", ")
                )),
            )
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

/// Writes every element separated by `","`, in iteration order. An empty set displays as an empty
/// string.
impl<T: Hash + Eq + Display, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&Joined::new(self.iter(), ","), f)
    }
}
