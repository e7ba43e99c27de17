//! Array-backed cursors.

use crate::cursor::{Capabilities, Cursor};
use crate::error::{Result, SequenceError};

/// A cursor over an owned vector of `(key, value)` pairs.
///
/// Countable, seekable and rewindable. This is also the result type of the
/// materializing combinators (`reverse`, `sort`, `shuffle`).
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut scores = ArrayCursor::new(vec![("ada", 3), ("bob", 5)]);
/// scores.seek(1).unwrap();
/// assert_eq!(scores.current(), Some((&"bob", &5)));
/// assert!(scores.seek(2).is_err());
/// assert_eq!(scores.current(), Some((&"bob", &5)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArrayCursor<K, V> {
    pairs: Vec<(K, V)>,
    position: usize,
}

impl<K, V> ArrayCursor<K, V> {
    /// Creates a cursor over `pairs`.
    ///
    /// Unlike generator-backed cursors, an array cursor already reads its
    /// first pair before any [`reset`](Cursor::reset). Generic code should
    /// still reset first.
    #[must_use]
    pub const fn new(pairs: Vec<(K, V)>) -> Self {
        Self { pairs, position: 0 }
    }

    /// Borrows the underlying pairs.
    #[must_use]
    pub fn as_slice(&self) -> &[(K, V)] {
        &self.pairs
    }

    /// Unwraps the underlying pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(K, V)> {
        self.pairs
    }
}

impl<V> ArrayCursor<usize, V> {
    /// Creates a cursor over `values`, keyed by position.
    #[must_use]
    pub fn from_values(values: Vec<V>) -> Self {
        Self::new(values.into_iter().enumerate().collect())
    }
}

impl<K, V> Cursor for ArrayCursor<K, V> {
    type Key = K;
    type Value = V;

    fn reset(&mut self) -> Result<()> {
        self.position = 0;
        Ok(())
    }

    fn current(&self) -> Option<(&K, &V)> {
        self.pairs.get(self.position).map(|(key, value)| (key, value))
    }

    fn advance(&mut self) -> Result<()> {
        if self.position < self.pairs.len() {
            self.position += 1;
        }
        Ok(())
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::ALL
    }

    fn len(&self) -> Option<usize> {
        Some(self.pairs.len())
    }

    fn seek(&mut self, ordinal: usize) -> Result<()> {
        if ordinal >= self.pairs.len() {
            return Err(SequenceError::OutOfBounds {
                ordinal,
                len: self.pairs.len(),
            });
        }
        self.position = ordinal;
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for ArrayCursor<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterable: I) -> Self {
        Self::new(iterable.into_iter().collect())
    }
}
