//! Borrowing iteration over a cursor.

use std::iter::FusedIterator;

use super::Cursor;
use crate::error::Result;

/// An [`Iterator`] that drives a cursor from its first pair.
///
/// Created by [`Sequence::iter`](crate::sequence::Sequence::iter). The first
/// call to `next` resets the cursor; every later call advances it. Pairs are
/// cloned out of the cursor. After an error has been yielded the iterator
/// is fused and returns `None`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut letters = from_values(['a', 'b']);
/// let pairs: Vec<(usize, char)> = letters.iter().collect::<Result<_, _>>().unwrap();
/// assert_eq!(pairs, vec![(0, 'a'), (1, 'b')]);
/// ```
pub struct Iter<'a, C: ?Sized> {
    cursor: &'a mut C,
    started: bool,
    done: bool,
}

impl<'a, C: ?Sized> Iter<'a, C> {
    pub(crate) const fn new(cursor: &'a mut C) -> Self {
        Self {
            cursor,
            started: false,
            done: false,
        }
    }
}

impl<C> Iterator for Iter<'_, C>
where
    C: Cursor + ?Sized,
    C::Key: Clone,
    C::Value: Clone,
{
    type Item = Result<(C::Key, C::Value)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let step = if self.started {
            self.cursor.advance()
        } else {
            self.started = true;
            self.cursor.reset()
        };
        if let Err(error) = step {
            self.done = true;
            return Some(Err(error));
        }
        let pair = self
            .cursor
            .current()
            .map(|(key, value)| (key.clone(), value.clone()));
        if pair.is_none() {
            self.done = true;
        }
        pair.map(Ok)
    }
}

impl<C> FusedIterator for Iter<'_, C>
where
    C: Cursor + ?Sized,
    C::Key: Clone,
    C::Value: Clone,
{
}
