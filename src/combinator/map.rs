//! `Map` and `MapKeys`.

use crate::cursor::{Capabilities, Cursor};
use crate::error::Result;

// =============================================================================
// Map
// =============================================================================

/// Replaces each value with `function(value, key)`, keeping keys.
///
/// The function runs exactly once per element the cursor is positioned
/// on, in consumption order. The mapped value is cached so that repeated
/// reads of [`current`](Cursor::current) do not call it again.
///
/// Preserves every capability of the source, including `len` and `seek`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut labelled = from_values([10, 20]).map(|value, key| format!("{key}:{value}"));
/// assert_eq!(labelled.len(), Some(2));
/// assert_eq!(labelled.to_values().unwrap(), vec!["0:10", "1:20"]);
/// ```
pub struct Map<C, F, U> {
    source: C,
    function: F,
    current: Option<U>,
}

impl<C, F, U> Map<C, F, U> {
    /// Wraps `source`.
    pub const fn new(source: C, function: F) -> Self {
        Self {
            source,
            function,
            current: None,
        }
    }
}

impl<C, F, U> Map<C, F, U>
where
    C: Cursor,
    F: FnMut(&C::Value, &C::Key) -> U,
{
    fn refresh(&mut self) {
        let mapped = match self.source.current() {
            Some((key, value)) => Some((self.function)(value, key)),
            None => None,
        };
        self.current = mapped;
    }
}

impl<C, F, U> Cursor for Map<C, F, U>
where
    C: Cursor,
    F: FnMut(&C::Value, &C::Key) -> U,
{
    type Key = C::Key;
    type Value = U;

    fn reset(&mut self) -> Result<()> {
        self.source.reset()?;
        self.refresh();
        Ok(())
    }

    fn current(&self) -> Option<(&C::Key, &U)> {
        let key = self.source.current_key()?;
        self.current.as_ref().map(|value| (key, value))
    }

    fn advance(&mut self) -> Result<()> {
        self.source.advance()?;
        self.refresh();
        Ok(())
    }

    fn capabilities(&self) -> Capabilities {
        self.source.capabilities()
    }

    fn len(&self) -> Option<usize> {
        self.source.len()
    }

    fn seek(&mut self, ordinal: usize) -> Result<()> {
        self.source.seek(ordinal)?;
        self.refresh();
        Ok(())
    }
}

// =============================================================================
// MapKeys
// =============================================================================

/// Replaces each key with `function(key, value)`, keeping values.
///
/// Like [`Map`], the function runs once per element and every capability
/// of the source is preserved.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut shifted = from_values(['a', 'b']).map_keys(|key, _| key + 100);
/// assert_eq!(shifted.to_pairs().unwrap(), vec![(100, 'a'), (101, 'b')]);
/// ```
pub struct MapKeys<C, F, J> {
    source: C,
    function: F,
    current: Option<J>,
}

impl<C, F, J> MapKeys<C, F, J> {
    /// Wraps `source`.
    pub const fn new(source: C, function: F) -> Self {
        Self {
            source,
            function,
            current: None,
        }
    }
}

impl<C, F, J> MapKeys<C, F, J>
where
    C: Cursor,
    F: FnMut(&C::Key, &C::Value) -> J,
{
    fn refresh(&mut self) {
        let mapped = match self.source.current() {
            Some((key, value)) => Some((self.function)(key, value)),
            None => None,
        };
        self.current = mapped;
    }
}

impl<C, F, J> Cursor for MapKeys<C, F, J>
where
    C: Cursor,
    F: FnMut(&C::Key, &C::Value) -> J,
{
    type Key = J;
    type Value = C::Value;

    fn reset(&mut self) -> Result<()> {
        self.source.reset()?;
        self.refresh();
        Ok(())
    }

    fn current(&self) -> Option<(&J, &C::Value)> {
        let value = self.source.current_value()?;
        self.current.as_ref().map(|key| (key, value))
    }

    fn advance(&mut self) -> Result<()> {
        self.source.advance()?;
        self.refresh();
        Ok(())
    }

    fn capabilities(&self) -> Capabilities {
        self.source.capabilities()
    }

    fn len(&self) -> Option<usize> {
        self.source.len()
    }

    fn seek(&mut self, ordinal: usize) -> Result<()> {
        self.source.seek(ordinal)?;
        self.refresh();
        Ok(())
    }
}
