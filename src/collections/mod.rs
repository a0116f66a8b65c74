//! General-purpose collection types.
//!
//! # Purpose
//! The types here are thin, strongly-typed layers over the standard library's own containers. They
//! exist to give set semantics (and set algebra) a single, obvious API, rather than to replace the
//! storage underneath.

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "traits")]
pub mod traits;
