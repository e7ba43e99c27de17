//! The `Cursor` trait.

use super::Capabilities;
use crate::error::{Result, SequenceError};

/// A resettable position over `(key, value)` pairs.
///
/// A freshly constructed cursor is unpositioned: call [`reset`](Self::reset)
/// before reading from it. Terminal operations on
/// [`Sequence`](crate::sequence::Sequence) always reset first, so the same
/// rewindable cursor can be consumed many times.
///
/// # Required Methods
///
/// - `reset`: position on the first pair (idempotent)
/// - `current`: borrow the pair under the cursor, `None` once exhausted
/// - `advance`: move to the next pair; a no-op once exhausted
///
/// # Optional Capabilities
///
/// - `len`: the total number of pairs, for countable cursors
/// - `seek`: jump to an absolute ordinal, for seekable cursors
///
/// Both must be reflected by [`capabilities`](Self::capabilities).
///
/// # Examples
///
/// ```rust
/// use lazyseq::cursor::{Capabilities, Cursor};
/// use lazyseq::error::Result;
///
/// /// Yields `0 => 'x'` exactly once.
/// struct Single {
///     position: Option<usize>,
/// }
///
/// impl Cursor for Single {
///     type Key = usize;
///     type Value = char;
///
///     fn reset(&mut self) -> Result<()> {
///         self.position = Some(0);
///         Ok(())
///     }
///
///     fn current(&self) -> Option<(&usize, &char)> {
///         self.position.filter(|position| *position == 0).map(|_| (&0, &'x'))
///     }
///
///     fn advance(&mut self) -> Result<()> {
///         self.position = self.position.map(|position| position + 1);
///         Ok(())
///     }
/// }
///
/// let mut single = Single { position: None };
/// single.reset().unwrap();
/// assert!(single.valid());
/// assert_eq!(single.capabilities(), Capabilities::REWINDABLE);
/// ```
pub trait Cursor {
    /// The key type of the pairs.
    type Key;
    /// The value type of the pairs.
    type Value;

    /// Positions the cursor on the first pair.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::CannotRewind`] if the cursor is single-pass
    /// and has already been traversed, or any error raised while producing
    /// the first pair.
    fn reset(&mut self) -> Result<()>;

    /// Borrows the pair under the cursor, or `None` if the cursor is exhausted.
    fn current(&self) -> Option<(&Self::Key, &Self::Value)>;

    /// Advances to the next pair.
    ///
    /// # Errors
    ///
    /// Returns any error raised while producing the next pair.
    fn advance(&mut self) -> Result<()>;

    /// Returns `true` if the cursor points at a pair.
    fn valid(&self) -> bool {
        self.current().is_some()
    }

    /// Borrows the key under the cursor.
    fn current_key(&self) -> Option<&Self::Key> {
        self.current().map(|(key, _)| key)
    }

    /// Borrows the value under the cursor.
    fn current_value(&self) -> Option<&Self::Value> {
        self.current().map(|(_, value)| value)
    }

    /// Returns the capabilities this cursor declares.
    ///
    /// The default is [`Capabilities::REWINDABLE`].
    fn capabilities(&self) -> Capabilities {
        Capabilities::REWINDABLE
    }

    /// Returns the number of pairs without consuming, for countable cursors.
    fn len(&self) -> Option<usize> {
        None
    }

    /// Moves directly to the pair at `ordinal`.
    ///
    /// Seeking is transactional: on failure the cursor is left where it was.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::OutOfBounds`] if `ordinal` is past the end
    /// - [`SequenceError::Unsupported`] if the cursor is not seekable
    fn seek(&mut self, ordinal: usize) -> Result<()> {
        let _ = ordinal;
        Err(SequenceError::Unsupported { operation: "seek" })
    }
}

/// A type-erased cursor, for composing sequences of different concrete types.
pub type BoxedCursor<'a, K, V> = Box<dyn Cursor<Key = K, Value = V> + 'a>;

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Key = C::Key;
    type Value = C::Value;

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }

    fn current(&self) -> Option<(&Self::Key, &Self::Value)> {
        (**self).current()
    }

    fn advance(&mut self) -> Result<()> {
        (**self).advance()
    }

    fn valid(&self) -> bool {
        (**self).valid()
    }

    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }

    fn len(&self) -> Option<usize> {
        (**self).len()
    }

    fn seek(&mut self, ordinal: usize) -> Result<()> {
        (**self).seek(ordinal)
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Key = C::Key;
    type Value = C::Value;

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }

    fn current(&self) -> Option<(&Self::Key, &Self::Value)> {
        (**self).current()
    }

    fn advance(&mut self) -> Result<()> {
        (**self).advance()
    }

    fn valid(&self) -> bool {
        (**self).valid()
    }

    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }

    fn len(&self) -> Option<usize> {
        (**self).len()
    }

    fn seek(&mut self, ordinal: usize) -> Result<()> {
        (**self).seek(ordinal)
    }
}
