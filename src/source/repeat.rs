//! Repeat-value producers.

use crate::cursor::Capabilities;
use crate::error::{Result, SequenceError};
use crate::generator::{Generator, GeneratorCursor, Produced};

/// Yields clones of one value, either forever or a fixed number of times.
///
/// Keys are ordinals. Always seekable; countable when bounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat<V> {
    value: V,
    times: Option<usize>,
    emitted: usize,
}

impl<V> Repeat<V> {
    /// Repeats `value` forever.
    pub const fn forever(value: V) -> Self {
        Self {
            value,
            times: None,
            emitted: 0,
        }
    }

    /// Repeats `value` exactly `times` times.
    pub const fn times(value: V, times: usize) -> Self {
        Self {
            value,
            times: Some(times),
            emitted: 0,
        }
    }

    fn is_past_end(&self, ordinal: usize) -> bool {
        self.times.is_some_and(|times| ordinal >= times)
    }
}

impl<V: Clone> Generator for Repeat<V> {
    type Key = usize;
    type Value = V;

    fn setup(&mut self) -> Result<()> {
        self.emitted = 0;
        Ok(())
    }

    fn advance(&mut self) -> Result<Produced<usize, V>> {
        if self.is_past_end(self.emitted) {
            return Ok(Produced::Exhausted);
        }
        self.emitted += 1;
        Ok(Produced::Value(self.value.clone()))
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::REWINDABLE
            .with_seekable(true)
            .with_countable(self.times.is_some())
    }

    fn len(&self) -> Option<usize> {
        self.times
    }

    fn seek(&mut self, ordinal: usize) -> Result<Produced<usize, V>> {
        if let Some(len) = self.times.filter(|times| ordinal >= *times) {
            return Err(SequenceError::OutOfBounds { ordinal, len });
        }
        self.emitted = ordinal + 1;
        Ok(Produced::Value(self.value.clone()))
    }
}

/// Repeats `value` forever.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut dashes = repeat('-').take(3).unwrap();
/// assert_eq!(dashes.join("").unwrap(), "---");
/// ```
pub const fn repeat<V: Clone>(value: V) -> GeneratorCursor<Repeat<V>> {
    GeneratorCursor::new(Repeat::forever(value))
}

/// Repeats `value` exactly `times` times.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut zeros = repeat_n(0, 3);
/// assert_eq!(zeros.len(), Some(3));
/// assert_eq!(zeros.to_values().unwrap(), vec![0, 0, 0]);
/// ```
pub const fn repeat_n<V: Clone>(value: V, times: usize) -> GeneratorCursor<Repeat<V>> {
    GeneratorCursor::new(Repeat::times(value, times))
}
