//! `Chain`.

use crate::cursor::{Capabilities, Cursor};
use crate::error::Result;

/// Flattens several sequences into one, keyed by fresh ordinals.
///
/// Source keys are discarded because they cannot be kept unique across
/// parts. Empty parts are skipped, both on reset and mid-traversal. A
/// reset re-chains from the first part, so the result is rewindable when
/// every part is.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut joined = chain_all(vec![
///     from_values(vec![1, 2]),
///     from_values(vec![]),
///     from_values(vec![3]),
/// ]);
/// assert_eq!(joined.to_pairs().unwrap(), vec![(0, 1), (1, 2), (2, 3)]);
/// ```
pub struct Chain<C> {
    parts: Vec<C>,
    index: usize,
    ordinal: usize,
}

impl<C> Chain<C> {
    /// Chains `parts` in order.
    pub const fn new(parts: Vec<C>) -> Self {
        Self {
            parts,
            index: 0,
            ordinal: 0,
        }
    }
}

impl<C: Cursor> Chain<C> {
    fn settle(&mut self) -> Result<()> {
        while let Some(part) = self.parts.get(self.index) {
            if part.valid() {
                return Ok(());
            }
            self.index += 1;
            if let Some(next) = self.parts.get_mut(self.index) {
                next.reset()?;
            }
        }
        Ok(())
    }
}

impl<C: Cursor> Cursor for Chain<C> {
    type Key = usize;
    type Value = C::Value;

    fn reset(&mut self) -> Result<()> {
        self.index = 0;
        self.ordinal = 0;
        if let Some(first) = self.parts.first_mut() {
            first.reset()?;
        }
        self.settle()
    }

    fn current(&self) -> Option<(&usize, &C::Value)> {
        let value = self.parts.get(self.index)?.current_value()?;
        Some((&self.ordinal, value))
    }

    fn advance(&mut self) -> Result<()> {
        let Some(part) = self.parts.get_mut(self.index) else {
            return Ok(());
        };
        part.advance()?;
        self.ordinal += 1;
        self.settle()
    }

    fn capabilities(&self) -> Capabilities {
        let rewindable = self
            .parts
            .iter()
            .all(|part| part.capabilities().is_rewindable());
        Capabilities::NONE.with_rewindable(rewindable)
    }
}

/// Chains every sequence in `parts`.
pub fn chain_all<C: Cursor>(parts: Vec<C>) -> Chain<C> {
    Chain::new(parts)
}
