use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was provided that doesn't refer to an element of the collection.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// A collection can't be split into chunks of zero elements.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("chunk size must be greater than zero")]
pub struct ZeroChunkSize;

/// Any error produced by the slice helpers, for callers that chain several of them with `?`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error, From, TryInto, IsVariant)]
pub enum SliceError {
    IndexOutOfBounds(IndexOutOfBounds),
    ZeroChunkSize(ZeroChunkSize),
}
