//! Hash-based collection types. Namely [`HashSet`], for unordered collections of unique values.

pub mod set;

#[doc(inline)]
pub use set::HashSet;
