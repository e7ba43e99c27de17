//! `Slice`: bounded, offset and stepped views over a sequence.
//!
//! A slice pairs an index generator (an arithmetic [`Range`] when the end
//! is known, an unbounded [`Count`] otherwise) with its source, and
//! positions the source on each desired ordinal in turn:
//!
//! - **seek**: a seekable source jumps straight to the ordinal
//! - **scan**: any other source is advanced one element at a time, and is
//!   reset and replayed only when the desired ordinal lies behind it
//!
//! # Offset resolution
//!
//! | Argument   | Resolution                                           |
//! |------------|------------------------------------------------------|
//! | `start < 0`| `len + start`, needs a countable source              |
//! | `end < 0`  | `len + end + 1`, so `-1` keeps the last element      |
//! | no `end`   | `len` when countable, otherwise unbounded            |
//!
//! With a negative step and no `end`, the slice runs down to ordinal 0.
//! Bounds on the wrong side of `start` give an empty slice, never an error.

use tracing::{debug, trace};

use crate::cursor::{Capabilities, Cursor};
use crate::error::{Result, SequenceError};
use crate::generator::GeneratorCursor;
use crate::source::{Count, Range, span_len};

// =============================================================================
// Index generator
// =============================================================================

enum Indices {
    Bounded(GeneratorCursor<Range>),
    Unbounded(GeneratorCursor<Count>),
}

impl Indices {
    fn reset(&mut self) -> Result<()> {
        match self {
            Self::Bounded(range) => range.reset(),
            Self::Unbounded(count) => count.reset(),
        }
    }

    fn advance(&mut self) -> Result<()> {
        match self {
            Self::Bounded(range) => range.advance(),
            Self::Unbounded(count) => count.advance(),
        }
    }

    fn current(&self) -> Option<i64> {
        match self {
            Self::Bounded(range) => range.current_value().copied(),
            Self::Unbounded(count) => count.current_value().copied(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Seek,
    Scan { position: usize },
}

// =============================================================================
// Slice
// =============================================================================

/// A lazy slice of a sequence, keeping the source's keys.
///
/// Built by [`Sequence::slice`](crate::sequence::Sequence::slice) and
/// its relatives. Countable when both the bounds and the source length
/// are known.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut middle = from_values(0..6).slice(1, Some(-2)).unwrap();
/// assert_eq!(middle.len(), Some(4));
/// assert_eq!(middle.to_values().unwrap(), vec![1, 2, 3, 4]);
///
/// let mut backwards = from_values(0..6).slice_step(4, None, -2).unwrap();
/// assert_eq!(backwards.to_pairs().unwrap(), vec![(4, 4), (2, 2), (0, 0)]);
/// ```
pub struct Slice<C> {
    source: C,
    indices: Indices,
    strategy: Strategy,
    step: i64,
    end: Option<i64>,
    finished: bool,
    length: Option<usize>,
}

impl<C: Cursor> Slice<C> {
    /// Slices `source` from `start` towards `end` in strides of `step`.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::ZeroStep`] if `step` is zero
    /// - [`SequenceError::NegativeOffset`] if `start` or `end` is negative
    ///   and `source` is not countable
    pub fn new(source: C, start: i64, end: Option<i64>, step: i64) -> Result<Self> {
        if step == 0 {
            return Err(SequenceError::ZeroStep);
        }
        let len = source.len().map(|len| i64::try_from(len).unwrap_or(i64::MAX));
        let start = resolve(start, len, 0)?;
        let end = end.map(|end| resolve(end, len, 1)).transpose()?;

        let (start, end) = if step > 0 {
            (start.max(0), end.or(len).map(|end| clamp_upper(end, len)))
        } else {
            let start = len.map_or(start, |len| start.min(len - 1));
            (start, Some(end.unwrap_or(-1).max(-1)))
        };

        let length = match (end, len) {
            (Some(end), Some(_)) => Some(span_len(start, end, step)),
            _ => None,
        };
        let indices = match end {
            Some(end) => Indices::Bounded(GeneratorCursor::new(Range::new(start, end, step)?)),
            None => Indices::Unbounded(GeneratorCursor::new(Count::new(start, step))),
        };
        let strategy = if source.capabilities().is_seekable() {
            Strategy::Seek
        } else {
            Strategy::Scan { position: 0 }
        };
        debug!(start, ?end, step, ?strategy, "building slice");

        Ok(Self {
            source,
            indices,
            strategy,
            step,
            end,
            finished: false,
            length,
        })
    }

    /// Positions the source on the ordinal the index generator points at.
    fn position(&mut self) -> Result<()> {
        let Some(mut desired) = self.desired() else {
            self.finished = true;
            return Ok(());
        };

        loop {
            let observed = match &mut self.strategy {
                Strategy::Seek => match self.source.seek(desired) {
                    Ok(()) => (!self.source.valid()).then_some(desired),
                    Err(SequenceError::OutOfBounds { ordinal, len }) => {
                        trace!(ordinal, len, "slice ran past the end of its source");
                        Some(len)
                    }
                    Err(error) => return Err(error),
                },
                Strategy::Scan { position } => {
                    if desired < *position {
                        debug!(from = *position, to = desired, "rewinding slice source");
                        self.source.reset()?;
                        *position = 0;
                    }
                    while *position < desired && self.source.valid() {
                        self.source.advance()?;
                        *position += 1;
                    }
                    (!self.source.valid()).then_some(*position)
                }
            };

            let Some(len) = observed else {
                return Ok(());
            };
            // Walking backwards, the slice resumes at the last ordinal the
            // source really has.
            if self.step > 0 {
                self.finished = true;
                return Ok(());
            }
            match self.restart_below(len)? {
                Some(ordinal) => desired = ordinal,
                None => {
                    self.finished = true;
                    return Ok(());
                }
            }
        }
    }

    fn desired(&self) -> Option<usize> {
        self.indices
            .current()
            .and_then(|ordinal| usize::try_from(ordinal).ok())
    }

    /// Restarts the index generator at `len - 1`, as if the start had been
    /// clamped against a known length.
    fn restart_below(&mut self, len: usize) -> Result<Option<usize>> {
        let last = i64::try_from(len).unwrap_or(i64::MAX) - 1;
        let end = self.end.unwrap_or(-1).max(-1);
        let mut indices = GeneratorCursor::new(Range::new(last, end, self.step)?);
        indices.reset()?;
        self.indices = Indices::Bounded(indices);
        Ok(self.desired())
    }
}

impl<C: Cursor> Cursor for Slice<C> {
    type Key = C::Key;
    type Value = C::Value;

    fn reset(&mut self) -> Result<()> {
        self.finished = false;
        self.indices.reset()?;
        if let Strategy::Scan { position } = &mut self.strategy {
            self.source.reset()?;
            *position = 0;
        }
        self.position()
    }

    fn current(&self) -> Option<(&C::Key, &C::Value)> {
        if self.finished {
            return None;
        }
        self.source.current()
    }

    fn advance(&mut self) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.indices.advance()?;
        self.position()
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE
            .with_rewindable(self.source.capabilities().is_rewindable())
            .with_countable(self.length.is_some())
    }

    fn len(&self) -> Option<usize> {
        self.length
    }
}

// =============================================================================
// Offset resolution
// =============================================================================

/// Resolves a possibly negative offset against `len`.
///
/// `bias` is added to negative offsets: 0 for a start, 1 for an end.
fn resolve(offset: i64, len: Option<i64>, bias: i64) -> Result<i64> {
    if offset >= 0 {
        return Ok(offset);
    }
    len.map(|len| len.saturating_add(offset).saturating_add(bias))
        .ok_or(SequenceError::NegativeOffset { offset })
}

fn clamp_upper(end: i64, len: Option<i64>) -> i64 {
    len.map_or(end, |len| end.min(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keeps_non_negative_offsets() {
        assert_eq!(resolve(3, None, 0), Ok(3));
        assert_eq!(resolve(0, Some(5), 1), Ok(0));
    }

    #[test]
    fn test_resolve_counts_from_the_end() {
        assert_eq!(resolve(-3, Some(6), 0), Ok(3));
        assert_eq!(resolve(-2, Some(6), 1), Ok(5));
        assert_eq!(resolve(-10, Some(6), 0), Ok(-4));
    }

    #[test]
    fn test_resolve_negative_without_length_fails() {
        assert_eq!(
            resolve(-1, None, 0),
            Err(SequenceError::NegativeOffset { offset: -1 })
        );
    }
}
