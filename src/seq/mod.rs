//! Statically-typed helpers over the standard library's sequences and maps.
//!
//! These cover the everyday filter / map / reduce / set-algebra chores that don't warrant a
//! dedicated type. [`slice`] works on borrowed slices, [`map`] on [`HashMap`](std::collections::HashMap)s.
//!
//! Only a couple of helpers can be handed input they can't make sense of, and those return the
//! errors re-exported here rather than panicking.

pub mod map;
pub mod slice;

#[doc(inline)]
pub use crate::util::error::{IndexOutOfBounds, SliceError, ZeroChunkSize};
