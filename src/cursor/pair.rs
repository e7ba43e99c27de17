//! The `KeyValuePair` product type.

use std::fmt;

/// An immutable `(key, value)` pair.
///
/// Generators return a `KeyValuePair` when they want to choose the key of
/// the value they produce instead of receiving the next sequential ordinal.
///
/// # Examples
///
/// ```rust
/// use lazyseq::cursor::KeyValuePair;
///
/// let pair = KeyValuePair::new("id", 42);
/// assert_eq!(pair.key(), &"id");
/// assert_eq!(pair.value(), &42);
/// assert_eq!(pair.into_parts(), ("id", 42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyValuePair<K, V> {
    key: K,
    value: V,
}

impl<K, V> KeyValuePair<K, V> {
    /// Creates a new pair.
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Borrows the key.
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Borrows the value.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Splits the pair into its key and value.
    #[inline]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for KeyValuePair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for KeyValuePair<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} => {}", self.key, self.value)
    }
}
