//! `Combine`.

use crate::cursor::{Capabilities, Cursor};
use crate::error::Result;

/// Pairs the values of one sequence, as keys, with the values of another.
///
/// Yields `(keys[i], values[i])` and stops when either side ends.
/// Countable when both sides are, with the shorter length.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut scores = from_values(["ada", "bob", "cyd"]).combine(from_values([3, 5]));
/// assert_eq!(scores.len(), Some(2));
/// assert_eq!(scores.to_pairs().unwrap(), vec![("ada", 3), ("bob", 5)]);
/// ```
pub struct Combine<K, V> {
    keys: K,
    values: V,
}

impl<K, V> Combine<K, V> {
    /// Pairs `keys` with `values`.
    pub const fn new(keys: K, values: V) -> Self {
        Self { keys, values }
    }
}

impl<K: Cursor, V: Cursor> Cursor for Combine<K, V> {
    type Key = K::Value;
    type Value = V::Value;

    fn reset(&mut self) -> Result<()> {
        self.keys.reset()?;
        self.values.reset()
    }

    fn current(&self) -> Option<(&K::Value, &V::Value)> {
        Some((self.keys.current_value()?, self.values.current_value()?))
    }

    fn advance(&mut self) -> Result<()> {
        if !self.valid() {
            return Ok(());
        }
        self.keys.advance()?;
        self.values.advance()
    }

    fn capabilities(&self) -> Capabilities {
        let both = self.keys.capabilities().intersect(self.values.capabilities());
        Capabilities::NONE
            .with_rewindable(both.is_rewindable())
            .with_countable(both.is_countable())
    }

    fn len(&self) -> Option<usize> {
        Some(self.keys.len()?.min(self.values.len()?))
    }
}
