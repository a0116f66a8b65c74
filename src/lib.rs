//! A small utility crate built around a generic hash set and a handful of typed collection helpers.
//!
//! # Purpose
//! Every project seems to grow the same pile of helpers: "does this slice contain that", "give me
//! the unique values", "what's in A but not in B". This crate is where I keep mine, written once
//! with real types rather than re-derived (slightly differently) every time.
//!
//! # Contents
//! - [`HashSet`](collections::hash::HashSet): an unordered set of unique values with membership,
//!   mutation and set algebra (union, intersection, difference, symmetric difference). Algebra
//!   always produces a new set and never touches its operands.
//! - [`Set`](collections::traits::Set): the trait behind it, providing lazy, borrowed set-algebra
//!   iterators and subset checks to anything that can answer "contains", "len" and "iter".
//! - [`seq`]: filter / map / reduce / set-algebra helpers over slices and
//!   [`HashMap`](std::collections::HashMap)s.
//!
//! # Error Handling
//! Set operations can't fail: removing something that isn't there or intersecting disjoint sets
//! are perfectly good questions with perfectly good (empty) answers. The few helpers that can be
//! given input they can't work with return strongly typed errors, as structs implementing
//! [`Error`](std::error::Error) and grouped into an enum for static dispatch, rather than
//! panicking.
//!
//! # Threading
//! Nothing here synchronizes internally. A [`HashSet`](collections::hash::HashSet) is `Send` and
//! `Sync` whenever its elements and hasher are, so sharing one between threads means wrapping it
//! in a lock like any other std collection.
//!
//! # Dependencies
//! - `derive_more`, for the repetitive parts of the error types.
//! - `rand`, for [`seq::slice::shuffled`]. The generator is always passed in, so results can be
//!   reproduced from a seed.
//! - `serde` (optional, behind the `serde` feature), to serialize sets as sequences.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "seq")]
pub mod seq;

pub(crate) mod util;
