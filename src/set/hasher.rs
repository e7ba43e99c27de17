//! Compile-time selection of the set hasher.

/// The `BuildHasher` used by [`Set`](super::Set).
#[cfg(feature = "fxhash")]
pub type SetHasher = rustc_hash::FxBuildHasher;

/// The `BuildHasher` used by [`Set`](super::Set).
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type SetHasher = ahash::RandomState;

/// The `BuildHasher` used by [`Set`](super::Set).
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type SetHasher = std::collections::hash_map::RandomState;
