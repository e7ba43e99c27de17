//! Arithmetic sequences.
//!
//! - [`Count`]: the unbounded sequence `start + step * ordinal`
//! - [`Range`]: `Count` with an exclusive `stop`
//!
//! Both are seekable by direct arithmetic. A `Range` whose bounds
//! contradict its step (for example `range(5, 0, 1)`) is detected as
//! impossible up front and is empty, so it can never loop forever.

use crate::cursor::Capabilities;
use crate::error::{Result, SequenceError};
use crate::generator::{Generator, GeneratorCursor, Produced};

// =============================================================================
// Count
// =============================================================================

/// The unbounded arithmetic sequence `start, start + step, start + 2 * step, ...`.
///
/// Keys are ordinals. A step of zero repeats `start` forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Count {
    start: i64,
    step: i64,
    ordinal: usize,
}

impl Count {
    /// Creates the generator.
    #[must_use]
    pub const fn new(start: i64, step: i64) -> Self {
        Self {
            start,
            step,
            ordinal: 0,
        }
    }

    /// The first value.
    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// The difference between consecutive values.
    #[must_use]
    pub const fn step(&self) -> i64 {
        self.step
    }

    /// Computes the value at `ordinal` without moving.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Overflow`] if the value does not fit in `i64`.
    pub fn value_at(&self, ordinal: usize) -> Result<i64> {
        i64::try_from(ordinal)
            .ok()
            .and_then(|offset| self.step.checked_mul(offset))
            .and_then(|offset| self.start.checked_add(offset))
            .ok_or(SequenceError::Overflow { ordinal })
    }
}

impl Generator for Count {
    type Key = usize;
    type Value = i64;

    fn setup(&mut self) -> Result<()> {
        self.ordinal = 0;
        Ok(())
    }

    fn advance(&mut self) -> Result<Produced<usize, i64>> {
        let value = self.value_at(self.ordinal)?;
        self.ordinal += 1;
        Ok(Produced::Value(value))
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::REWINDABLE.with_seekable(true)
    }

    fn seek(&mut self, ordinal: usize) -> Result<Produced<usize, i64>> {
        let value = self.value_at(ordinal)?;
        self.ordinal = ordinal + 1;
        Ok(Produced::Value(value))
    }
}

// =============================================================================
// Range
// =============================================================================

/// The bounded arithmetic sequence from `start` up to, but excluding, `stop`.
///
/// Composes a [`Count`] with a stop test. Countable and seekable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    count: Count,
    stop: i64,
    impossible: bool,
}

impl Range {
    /// Creates the generator.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::ZeroStep`] if `step` is zero.
    pub const fn new(start: i64, stop: i64, step: i64) -> Result<Self> {
        if step == 0 {
            return Err(SequenceError::ZeroStep);
        }
        Ok(Self {
            count: Count::new(start, step),
            stop,
            impossible: is_impossible(start, stop, step),
        })
    }

    /// The exclusive bound.
    #[must_use]
    pub const fn stop(&self) -> i64 {
        self.stop
    }

    /// Returns `true` if the bounds contradict the step, making the range empty.
    #[must_use]
    pub const fn is_impossible(&self) -> bool {
        self.impossible
    }

    const fn is_beyond(&self, value: i64) -> bool {
        if self.count.step > 0 {
            value >= self.stop
        } else {
            value <= self.stop
        }
    }

    fn length(&self) -> usize {
        if self.impossible {
            0
        } else {
            span_len(self.count.start, self.stop, self.count.step)
        }
    }
}

impl Generator for Range {
    type Key = usize;
    type Value = i64;

    fn setup(&mut self) -> Result<()> {
        self.count.setup()
    }

    fn advance(&mut self) -> Result<Produced<usize, i64>> {
        if self.impossible {
            return Ok(Produced::Exhausted);
        }
        match self.count.advance() {
            Ok(Produced::Value(value)) if !self.is_beyond(value) => Ok(Produced::Value(value)),
            // An overflowing value lies past any `i64` stop.
            Ok(_) | Err(SequenceError::Overflow { .. }) => Ok(Produced::Exhausted),
            Err(error) => Err(error),
        }
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::ALL
    }

    fn len(&self) -> Option<usize> {
        Some(self.length())
    }

    fn seek(&mut self, ordinal: usize) -> Result<Produced<usize, i64>> {
        let len = self.length();
        if ordinal >= len {
            return Err(SequenceError::OutOfBounds { ordinal, len });
        }
        self.count.seek(ordinal)
    }
}

// =============================================================================
// Length arithmetic
// =============================================================================

/// Returns `true` when the sign of `stop - start` disagrees with the sign of `step`.
pub(crate) const fn is_impossible(start: i64, stop: i64, step: i64) -> bool {
    let distance = (stop as i128) - (start as i128);
    distance.signum() != (step as i128).signum()
}

/// Counts `start, start + step, ...` strictly before `stop`.
///
/// This is the ceiling of `(stop - start) / step`, which is the number of
/// elements iteration actually yields with an exclusive stop.
pub(crate) fn span_len(start: i64, stop: i64, step: i64) -> usize {
    if step == 0 || is_impossible(start, stop, step) {
        return 0;
    }
    let distance = ((stop as i128) - (start as i128)).unsigned_abs();
    let stride = (step as i128).unsigned_abs();
    usize::try_from(distance.div_ceil(stride)).unwrap_or(usize::MAX)
}

// =============================================================================
// Constructors
// =============================================================================

/// The unbounded arithmetic sequence starting at `start`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut evens = count(0, 2).take(4).unwrap();
/// assert_eq!(evens.to_values().unwrap(), vec![0, 2, 4, 6]);
/// ```
#[must_use]
pub const fn count(start: i64, step: i64) -> GeneratorCursor<Count> {
    GeneratorCursor::new(Count::new(start, step))
}

/// The arithmetic sequence from `start` to the exclusive `stop`.
///
/// # Errors
///
/// Returns [`SequenceError::ZeroStep`] if `step` is zero.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(range(0, 10, 3).unwrap().to_values().unwrap(), vec![0, 3, 6, 9]);
/// assert_eq!(range(5, 0, -2).unwrap().to_values().unwrap(), vec![5, 3, 1]);
/// assert!(range(5, 0, 1).unwrap().to_values().unwrap().is_empty());
/// ```
pub fn range(start: i64, stop: i64, step: i64) -> Result<GeneratorCursor<Range>> {
    Range::new(start, stop, step).map(GeneratorCursor::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len_rounds_up() {
        assert_eq!(span_len(0, 5, 2), 3);
        assert_eq!(span_len(0, 6, 2), 3);
        assert_eq!(span_len(5, 0, -2), 3);
        assert_eq!(span_len(0, 1, 10), 1);
    }

    #[test]
    fn test_span_len_impossible_is_zero() {
        assert_eq!(span_len(5, 0, 1), 0);
        assert_eq!(span_len(0, 5, -1), 0);
        assert_eq!(span_len(3, 3, 1), 0);
    }

    #[test]
    fn test_range_near_the_limit_ends_instead_of_overflowing() {
        let mut cursor = range(i64::MAX - 3, i64::MAX, 2).unwrap();
        assert_eq!(
            crate::sequence::Sequence::to_values(&mut cursor),
            Ok(vec![i64::MAX - 3, i64::MAX - 1])
        );
    }

    #[test]
    fn test_span_len_extremes_do_not_overflow() {
        assert_eq!(span_len(i64::MIN, i64::MAX, i64::MAX), 3);
    }
}
