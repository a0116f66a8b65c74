#[cfg(feature = "seq")]
pub mod error;
#[cfg(feature = "collections")]
pub mod fmt;
#[cfg(test)]
pub mod hash;
