use std::iter::{Chain, FusedIterator};

/// The operations shared by all set types in this crate.
///
/// Implementors only provide membership, length and borrowed iteration. Everything else here is
/// built on top of those three, as lazy iterators which borrow both operands and never allocate.
/// Set types that want owned results (like [`HashSet::union`](crate::collections::hash::HashSet::union))
/// collect from these.
pub trait Set<T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns true if `item` is a member of the set.
    fn contains(&self, item: &T) -> bool;

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns an iterator over all elements in the set, as references.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Creates a borrowed iterator over all items that are in `self` but not `other`. (`self \
    /// other`)
    fn iter_difference<'a>(&'a self, other: &'a Self) -> Difference<'a, Self, T>
    where
        Self: Sized,
    {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in `self` or `other` but not both.
    /// (`self △ other`)
    fn iter_symmetric_difference<'a>(&'a self, other: &'a Self) -> SymmetricDifference<'a, Self, T>
    where
        Self: Sized,
    {
        SymmetricDifference {
            inner: self.iter_difference(other).chain(other.iter_difference(self)),
        }
    }

    /// Creates a borrowed iterator over all items that are in both `self` and `other`. (`self ∩
    /// other`)
    ///
    /// The smaller of the two sets is iterated, checking membership in the larger one.
    fn iter_intersection<'a>(&'a self, other: &'a Self) -> Intersection<'a, Self, T>
    where
        Self: Sized,
    {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        Intersection {
            inner: smaller.iter(),
            other: larger,
        }
    }

    /// Creates a borrowed iterator over all items that are in either `self` or `other`. (`self ∪
    /// other`)
    fn iter_union<'a>(&'a self, other: &'a Self) -> Union<'a, Self, T>
    where
        Self: Sized,
    {
        Union {
            inner: self.iter().chain(other.iter_difference(self)),
        }
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    fn is_subset(&self, other: &Self) -> bool {
        other.is_superset(self)
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    fn is_superset(&self, other: &Self) -> bool {
        if other.len() > self.len() {
            return false;
        }
        for item in other.iter() {
            if !self.contains(item) {
                return false;
            }
        }
        true
    }

    /// Returns true if `self` and `other` have no elements in common.
    fn is_disjoint(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.iter_intersection(other).next().is_none()
    }
}

pub struct Difference<'a, S: Set<T> + 'a, T: 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: Set<T> + 'a, T: 'a> Iterator for Difference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = next
            && self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set<T> + 'a, T: 'a> FusedIterator for Difference<'a, S, T> where S::Iter<'a>: FusedIterator {}

pub struct SymmetricDifference<'a, S: Set<T> + 'a, T: 'a> {
    pub(crate) inner: Chain<Difference<'a, S, T>, Difference<'a, S, T>>,
}

impl<'a, S: Set<T> + 'a, T: 'a> Iterator for SymmetricDifference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S: Set<T> + 'a, T: 'a> FusedIterator for SymmetricDifference<'a, S, T> where
    S::Iter<'a>: FusedIterator
{
}

pub struct Intersection<'a, S: Set<T> + 'a, T: 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: Set<T> + 'a, T: 'a> Iterator for Intersection<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = next
            && !self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set<T> + 'a, T: 'a> FusedIterator for Intersection<'a, S, T> where S::Iter<'a>: FusedIterator {}

pub struct Union<'a, S: Set<T> + 'a, T: 'a> {
    pub(crate) inner: Chain<S::Iter<'a>, Difference<'a, S, T>>,
}

impl<'a, S: Set<T> + 'a, T: 'a> Iterator for Union<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S: Set<T> + 'a, T: 'a> FusedIterator for Union<'a, S, T> where S::Iter<'a>: FusedIterator {}
