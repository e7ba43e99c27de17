//! `Filter`, backing both `filter` and `reject`.

use crate::cursor::{Capabilities, Cursor};
use crate::error::Result;

/// Skips the elements for which `predicate(value, key)` differs from `keep`.
///
/// `filter` keeps the elements matching the predicate and `reject` drops
/// them. Keys are preserved. The output length depends on the predicate,
/// so the result is neither countable nor seekable.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut odd = from_values(1..=6).filter(|value, _| value % 2 == 1);
/// assert_eq!(odd.to_pairs().unwrap(), vec![(0, 1), (2, 3), (4, 5)]);
///
/// let mut even = from_values(1..=6).reject(|value, _| value % 2 == 1);
/// assert_eq!(even.to_values().unwrap(), vec![2, 4, 6]);
/// ```
pub struct Filter<C, P> {
    source: C,
    predicate: P,
    keep: bool,
}

impl<C, P> Filter<C, P> {
    /// Keeps the elements matching `predicate`.
    pub const fn keeping(source: C, predicate: P) -> Self {
        Self {
            source,
            predicate,
            keep: true,
        }
    }

    /// Drops the elements matching `predicate`.
    pub const fn rejecting(source: C, predicate: P) -> Self {
        Self {
            source,
            predicate,
            keep: false,
        }
    }
}

impl<C, P> Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Value, &C::Key) -> bool,
{
    fn settle(&mut self) -> Result<()> {
        while let Some((key, value)) = self.source.current() {
            if (self.predicate)(value, key) == self.keep {
                return Ok(());
            }
            self.source.advance()?;
        }
        Ok(())
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Value, &C::Key) -> bool,
{
    type Key = C::Key;
    type Value = C::Value;

    fn reset(&mut self) -> Result<()> {
        self.source.reset()?;
        self.settle()
    }

    fn current(&self) -> Option<(&C::Key, &C::Value)> {
        self.source.current()
    }

    fn advance(&mut self) -> Result<()> {
        if !self.source.valid() {
            return Ok(());
        }
        self.source.advance()?;
        self.settle()
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE.with_rewindable(self.source.capabilities().is_rewindable())
    }
}
