//! Traits shared between the collection types of this crate.
//!
//! At the moment that's just [`Set`], which gives every set type lazy set-algebra iterators for
//! free once membership, length and iteration are implemented.

pub mod set;

#[doc(inline)]
pub use set::Set;
