//! `Flip`.

use crate::cursor::{Capabilities, Cursor};
use crate::error::Result;

/// Swaps keys and values.
///
/// Iteration yields every pair, including pairs whose flipped keys repeat.
/// Collecting with [`to_map`](crate::sequence::Sequence::to_map) keeps the
/// last value for a repeated key, at the position where the key was first
/// seen.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut flipped = from_values(["x", "y", "x"]).flip();
/// assert_eq!(flipped.to_pairs().unwrap(), vec![("x", 0), ("y", 1), ("x", 2)]);
///
/// let map = flipped.to_map().unwrap();
/// assert_eq!(map.into_iter().collect::<Vec<_>>(), vec![("x", 2), ("y", 1)]);
/// ```
pub struct Flip<C> {
    source: C,
}

impl<C> Flip<C> {
    /// Wraps `source`.
    pub const fn new(source: C) -> Self {
        Self { source }
    }
}

impl<C: Cursor> Cursor for Flip<C> {
    type Key = C::Value;
    type Value = C::Key;

    fn reset(&mut self) -> Result<()> {
        self.source.reset()
    }

    fn current(&self) -> Option<(&C::Value, &C::Key)> {
        self.source.current().map(|(key, value)| (value, key))
    }

    fn advance(&mut self) -> Result<()> {
        self.source.advance()
    }

    fn capabilities(&self) -> Capabilities {
        self.source.capabilities()
    }

    fn len(&self) -> Option<usize> {
        self.source.len()
    }

    fn seek(&mut self, ordinal: usize) -> Result<()> {
        self.source.seek(ordinal)
    }
}
