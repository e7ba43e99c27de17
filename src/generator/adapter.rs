//! `Generator`, `Produced` and the `GeneratorCursor` adapter.

use crate::cursor::{Capabilities, Cursor, KeyValuePair};
use crate::error::{Result, SequenceError};
use crate::value::{Scalar, Value};

// =============================================================================
// Produced
// =============================================================================

/// The tagged result of [`Generator::advance`].
///
/// `Exhausted` is an ordinary variant rather than an error or a `None`,
/// because "no value" and "a null value" must stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Produced<K, V> {
    /// A value that receives the next sequential ordinal as its key.
    Value(V),
    /// A value with a key chosen by the generator.
    Pair(KeyValuePair<K, V>),
    /// The generator has no more elements.
    Exhausted,
}

impl<K, V> Produced<K, V> {
    /// Returns `true` for [`Produced::Exhausted`].
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

// =============================================================================
// Generator
// =============================================================================

/// A two-method producer that [`GeneratorCursor`] adapts into a cursor.
///
/// The optional methods mirror the optional cursor capabilities. A
/// generator that overrides [`len`](Self::len) or [`seek`](Self::seek)
/// must declare so through [`capabilities`](Self::capabilities).
pub trait Generator {
    /// The key type of explicitly keyed elements.
    type Key;
    /// The value type of the produced elements.
    type Value;

    /// Reinitializes the producer for a new traversal.
    ///
    /// # Errors
    ///
    /// Any error is fatal for the traversal; for single-pass producers this
    /// is [`SequenceError::CannotRewind`].
    fn setup(&mut self) -> Result<()>;

    /// Produces the next element, or [`Produced::Exhausted`].
    ///
    /// # Errors
    ///
    /// Returns any error raised while producing the element.
    fn advance(&mut self) -> Result<Produced<Self::Key, Self::Value>>;

    /// Returns the capabilities of the adapted cursor.
    fn capabilities(&self) -> Capabilities {
        Capabilities::REWINDABLE
    }

    /// Returns the total number of elements, for countable producers.
    fn len(&self) -> Option<usize> {
        None
    }

    /// Produces the element at `ordinal` and continues from there.
    ///
    /// Must leave the producer untouched when it fails.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::OutOfBounds`] if `ordinal` is past the end
    /// - [`SequenceError::Unsupported`] if the producer is not seekable
    fn seek(&mut self, ordinal: usize) -> Result<Produced<Self::Key, Self::Value>> {
        let _ = ordinal;
        Err(SequenceError::Unsupported { operation: "seek" })
    }
}

// =============================================================================
// OrdinalKey
// =============================================================================

/// Key types that can be built from a sequential ordinal.
///
/// [`GeneratorCursor`] uses this to key bare [`Produced::Value`] elements.
pub trait OrdinalKey {
    /// Builds the key for the element at `ordinal`.
    fn from_ordinal(ordinal: usize) -> Self;
}

impl OrdinalKey for usize {
    fn from_ordinal(ordinal: usize) -> Self {
        ordinal
    }
}

impl OrdinalKey for u64 {
    fn from_ordinal(ordinal: usize) -> Self {
        Self::try_from(ordinal).unwrap_or(Self::MAX)
    }
}

impl OrdinalKey for i64 {
    fn from_ordinal(ordinal: usize) -> Self {
        Self::try_from(ordinal).unwrap_or(Self::MAX)
    }
}

impl OrdinalKey for String {
    fn from_ordinal(ordinal: usize) -> Self {
        ordinal.to_string()
    }
}

impl OrdinalKey for Scalar {
    fn from_ordinal(ordinal: usize) -> Self {
        Self::Int(i64::from_ordinal(ordinal))
    }
}

impl OrdinalKey for Value {
    fn from_ordinal(ordinal: usize) -> Self {
        Self::Int(i64::from_ordinal(ordinal))
    }
}

// =============================================================================
// GeneratorCursor
// =============================================================================

/// Adapts a [`Generator`] into a [`Cursor`].
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut letters = generate(
///     || Ok(()),
///     {
///         let mut next = b'a';
///         move || {
///             if next > b'c' {
///                 return Ok(Produced::Exhausted);
///             }
///             next += 1;
///             let letter = char::from(next - 1).to_string();
///             Ok(Produced::Pair(KeyValuePair::new(letter, next - b'a')))
///         }
///     },
/// );
/// assert_eq!(
///     letters.to_pairs().unwrap(),
///     vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)]
/// );
/// ```
pub struct GeneratorCursor<G: Generator> {
    generator: G,
    current: Option<(G::Key, G::Value)>,
    ordinal: usize,
}

impl<G: Generator> GeneratorCursor<G> {
    /// Wraps `generator`. Nothing is produced until the first reset.
    pub const fn new(generator: G) -> Self {
        Self {
            generator,
            current: None,
            ordinal: 0,
        }
    }

    /// Borrows the wrapped generator.
    pub const fn generator(&self) -> &G {
        &self.generator
    }

    /// Unwraps the generator.
    pub fn into_inner(self) -> G {
        self.generator
    }
}

impl<G> GeneratorCursor<G>
where
    G: Generator,
    G::Key: OrdinalKey,
{
    fn accept(&mut self, produced: Produced<G::Key, G::Value>) {
        self.current = match produced {
            Produced::Value(value) => Some((G::Key::from_ordinal(self.ordinal), value)),
            Produced::Pair(pair) => Some(pair.into_parts()),
            Produced::Exhausted => None,
        };
    }
}

impl<G> Cursor for GeneratorCursor<G>
where
    G: Generator,
    G::Key: OrdinalKey,
{
    type Key = G::Key;
    type Value = G::Value;

    fn reset(&mut self) -> Result<()> {
        self.current = None;
        self.ordinal = 0;
        self.generator.setup()?;
        let produced = self.generator.advance()?;
        self.accept(produced);
        Ok(())
    }

    fn current(&self) -> Option<(&Self::Key, &Self::Value)> {
        self.current.as_ref().map(|(key, value)| (key, value))
    }

    fn advance(&mut self) -> Result<()> {
        if self.current.is_none() {
            return Ok(());
        }
        let produced = self.generator.advance()?;
        self.ordinal += 1;
        self.accept(produced);
        Ok(())
    }

    fn capabilities(&self) -> Capabilities {
        self.generator.capabilities()
    }

    fn len(&self) -> Option<usize> {
        self.generator.len()
    }

    fn seek(&mut self, ordinal: usize) -> Result<()> {
        let produced = self.generator.seek(ordinal)?;
        self.ordinal = ordinal;
        self.accept(produced);
        Ok(())
    }
}
