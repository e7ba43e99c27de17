//! `Unique`.

use std::marker::PhantomData;

use crate::cursor::{Capabilities, Cursor};
use crate::error::Result;
use crate::set::Set;
use crate::value::Value;

/// Emits the first element of each group, keeping its original key.
///
/// The group of an element is `group(value)`; the `unique` combinator
/// groups by the value itself. Groups are remembered in a [`Set`], so two
/// elements fall in the same group only when their groups have the same
/// type and value. A group that is a list or a map fails with
/// [`SequenceError::NonScalar`](crate::error::SequenceError::NonScalar).
///
/// The seen groups are forgotten on every reset.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut first_per_third = range(1, 9, 1).unwrap().unique_by(|value| value / 3);
/// assert_eq!(
///     first_per_third.to_pairs().unwrap(),
///     vec![(0, 1), (2, 3), (5, 6)]
/// );
/// ```
pub struct Unique<C, G, T> {
    source: C,
    group: G,
    seen: Set,
    marker: PhantomData<fn() -> T>,
}

impl<C, G, T> Unique<C, G, T> {
    /// Wraps `source`, grouping each value with `group`.
    pub fn new(source: C, group: G) -> Self {
        Self {
            source,
            group,
            seen: Set::new(),
            marker: PhantomData,
        }
    }
}

impl<C, G, T> Unique<C, G, T>
where
    C: Cursor,
    G: FnMut(&C::Value) -> T,
    T: Into<Value>,
{
    fn settle(&mut self) -> Result<()> {
        while let Some(value) = self.source.current_value() {
            let group = (self.group)(value);
            if self.seen.add(group)? {
                return Ok(());
            }
            self.source.advance()?;
        }
        Ok(())
    }
}

impl<C, G, T> Cursor for Unique<C, G, T>
where
    C: Cursor,
    G: FnMut(&C::Value) -> T,
    T: Into<Value>,
{
    type Key = C::Key;
    type Value = C::Value;

    fn reset(&mut self) -> Result<()> {
        self.seen.clear();
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

/// The grouping function of `unique`.
pub(crate) fn identity<V: Clone>(value: &V) -> V {
    value.clone()
}
