//! A module containing [`HashSet`] and associated types.
//!
//! The other types here provide owned, borrowed and draining iteration over a set's elements. Lazy
//! iterators over the result of set operations live with the [`Set`](crate::collections::traits::Set)
//! trait, which HashSet implements.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the entries
//! in place would cause a logic error.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod hash_set;
mod iter;
#[cfg(feature = "serde")]
mod serialize;
mod tests;

pub use hash_set::*;
pub use iter::*;

/// Creates a [`HashSet`] containing the provided elements, with duplicates collapsed. With no
/// arguments, an empty set is created.
///
/// # Examples
/// ```
/// # use unikit::hash_set;
/// let set = hash_set![1, 2, 3, 4, 2];
/// assert_eq!(set.len(), 4);
///
/// let empty: unikit::collections::hash::HashSet<i32> = hash_set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! hash_set {
    () => {
        $crate::collections::hash::HashSet::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::collections::hash::HashSet::from([$($item),+])
    };
}
