//! Single-pass sources.

use tracing::trace;

use crate::cursor::Capabilities;
use crate::error::{Result, SequenceError};
use crate::generator::{Generator, GeneratorCursor, Produced};

/// Adapts a one-shot [`Iterator`], such as a stream being read from a socket.
///
/// The first `setup` succeeds; every later one fails with
/// [`SequenceError::CannotRewind`], so a second traversal is reported
/// instead of silently yielding nothing. Countable when the iterator's
/// `size_hint` is exact at construction.
#[derive(Debug)]
pub struct SinglePass<I> {
    iterator: I,
    length: Option<usize>,
    started: bool,
}

impl<I: Iterator> SinglePass<I> {
    /// Wraps `iterator`.
    pub fn new(iterator: I) -> Self {
        let length = match iterator.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(lower),
            _ => None,
        };
        Self {
            iterator,
            length,
            started: false,
        }
    }
}

impl<I: Iterator> Generator for SinglePass<I> {
    type Key = usize;
    type Value = I::Item;

    fn setup(&mut self) -> Result<()> {
        if self.started {
            trace!("refusing to rewind a single-pass source");
            return Err(SequenceError::CannotRewind {
                sequence: "single_pass",
            });
        }
        self.started = true;
        Ok(())
    }

    fn advance(&mut self) -> Result<Produced<usize, I::Item>> {
        Ok(self
            .iterator
            .next()
            .map_or(Produced::Exhausted, Produced::Value))
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE.with_countable(self.length.is_some())
    }

    fn len(&self) -> Option<usize> {
        self.length
    }
}

/// Adapts a one-shot iterator into a sequence that can be traversed once.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut lines = single_pass("a\nb".lines());
/// assert_eq!(lines.to_values().unwrap(), vec!["a", "b"]);
/// assert!(matches!(
///     lines.to_values(),
///     Err(SequenceError::CannotRewind { .. })
/// ));
/// ```
pub fn single_pass<I: IntoIterator>(iterable: I) -> GeneratorCursor<SinglePass<I::IntoIter>> {
    GeneratorCursor::new(SinglePass::new(iterable.into_iter()))
}
