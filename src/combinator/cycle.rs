//! `Cycle`.

use tracing::trace;

use crate::cursor::{Capabilities, Cursor};
use crate::error::Result;

/// Repeats a sequence forever, keyed by fresh ordinals.
///
/// Reaching the end of the source resets it and continues. An empty
/// source yields an empty cycle rather than spinning. The source must be
/// rewindable: a single-pass source fails with
/// [`SequenceError::CannotRewind`](crate::error::SequenceError::CannotRewind)
/// at its first wrap-around.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut looped = from_values([1, 2, 3]).cycle().take(8).unwrap();
/// assert_eq!(looped.to_values().unwrap(), vec![1, 2, 3, 1, 2, 3, 1, 2]);
/// ```
pub struct Cycle<C> {
    source: C,
    ordinal: usize,
}

impl<C> Cycle<C> {
    /// Wraps `source`.
    pub const fn new(source: C) -> Self {
        Self { source, ordinal: 0 }
    }
}

impl<C: Cursor> Cursor for Cycle<C> {
    type Key = usize;
    type Value = C::Value;

    fn reset(&mut self) -> Result<()> {
        self.ordinal = 0;
        self.source.reset()
    }

    fn current(&self) -> Option<(&usize, &C::Value)> {
        self.source
            .current_value()
            .map(|value| (&self.ordinal, value))
    }

    fn advance(&mut self) -> Result<()> {
        if !self.source.valid() {
            return Ok(());
        }
        self.source.advance()?;
        self.ordinal += 1;
        if !self.source.valid() {
            trace!(ordinal = self.ordinal, "cycle restarting its source");
            self.source.reset()?;
        }
        Ok(())
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE.with_rewindable(self.source.capabilities().is_rewindable())
    }
}
