//! `Zip` and `ZipLongest` generators.
//!
//! Both advance their sources in lockstep and yield one vector of values
//! per step, keyed by ordinal. They are written as [`Generator`]s and
//! adapted with [`GeneratorCursor`].

use crate::cursor::{Capabilities, Cursor};
use crate::error::Result;
use crate::generator::{Generator, GeneratorCursor, Produced};

// =============================================================================
// Shared lockstep driver
// =============================================================================

/// The sources of a zip and whether they already sit on the next row.
struct Lockstep<C> {
    sources: Vec<C>,
    primed: bool,
}

impl<C: Cursor> Lockstep<C> {
    const fn new(sources: Vec<C>) -> Self {
        Self {
            sources,
            primed: false,
        }
    }

    fn setup(&mut self) -> Result<()> {
        for source in &mut self.sources {
            source.reset()?;
        }
        self.primed = true;
        Ok(())
    }

    /// Moves every source to the next row, except right after setup.
    fn step(&mut self) -> Result<()> {
        if self.primed {
            self.primed = false;
            return Ok(());
        }
        for source in &mut self.sources {
            source.advance()?;
        }
        Ok(())
    }

    fn rewindable(&self) -> bool {
        self.sources
            .iter()
            .all(|source| source.capabilities().is_rewindable())
    }

    fn lengths(&self) -> Option<Vec<usize>> {
        self.sources.iter().map(Cursor::len).collect()
    }
}

// =============================================================================
// Zip
// =============================================================================

/// Yields the current values of every source until any source ends.
///
/// Countable when every source is, with the shortest length.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut rows = zip_all(vec![from_values(vec![1, 2, 3, 4]), from_values(vec![10, 20, 30])]);
/// assert_eq!(rows.len(), Some(3));
/// assert_eq!(rows.to_values().unwrap(), vec![vec![1, 10], vec![2, 20], vec![3, 30]]);
/// ```
pub struct Zip<C> {
    lockstep: Lockstep<C>,
}

impl<C: Cursor> Zip<C> {
    /// Zips `sources`.
    pub const fn new(sources: Vec<C>) -> Self {
        Self {
            lockstep: Lockstep::new(sources),
        }
    }
}

impl<C> Generator for Zip<C>
where
    C: Cursor,
    C::Value: Clone,
{
    type Key = usize;
    type Value = Vec<C::Value>;

    fn setup(&mut self) -> Result<()> {
        self.lockstep.setup()
    }

    fn advance(&mut self) -> Result<Produced<usize, Vec<C::Value>>> {
        self.lockstep.step()?;
        if self.lockstep.sources.is_empty() {
            return Ok(Produced::Exhausted);
        }
        let row: Option<Vec<C::Value>> = self
            .lockstep
            .sources
            .iter()
            .map(|source| source.current_value().cloned())
            .collect();
        Ok(row.map_or(Produced::Exhausted, Produced::Value))
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE
            .with_rewindable(self.lockstep.rewindable())
            .with_countable(self.len().is_some())
    }

    fn len(&self) -> Option<usize> {
        self.lockstep
            .lengths()
            .map(|lengths| lengths.into_iter().min().unwrap_or(0))
    }
}

/// Zips `sources`, stopping at the shortest.
pub fn zip_all<C>(sources: Vec<C>) -> GeneratorCursor<Zip<C>>
where
    C: Cursor,
    C::Value: Clone,
{
    GeneratorCursor::new(Zip::new(sources))
}

// =============================================================================
// ZipLongest
// =============================================================================

/// Yields a row per step until every source ends, padding ended sources
/// with a fill value.
///
/// Countable when every source is, with the longest length.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut rows = zip_longest_all(vec![from_values(vec!["1", "2"]), from_values(vec!["a"])], "-");
/// assert_eq!(rows.to_values().unwrap(), vec![vec!["1", "a"], vec!["2", "-"]]);
/// ```
pub struct ZipLongest<C, V> {
    lockstep: Lockstep<C>,
    fill: V,
}

impl<C: Cursor<Value = V>, V> ZipLongest<C, V> {
    /// Zips `sources`, padding with `fill`.
    pub const fn new(sources: Vec<C>, fill: V) -> Self {
        Self {
            lockstep: Lockstep::new(sources),
            fill,
        }
    }
}

impl<C, V> Generator for ZipLongest<C, V>
where
    C: Cursor<Value = V>,
    V: Clone,
{
    type Key = usize;
    type Value = Vec<V>;

    fn setup(&mut self) -> Result<()> {
        self.lockstep.setup()
    }

    fn advance(&mut self) -> Result<Produced<usize, Vec<V>>> {
        self.lockstep.step()?;
        let sources = &self.lockstep.sources;
        if !sources.iter().any(Cursor::valid) {
            return Ok(Produced::Exhausted);
        }
        let row = sources
            .iter()
            .map(|source| {
                source
                    .current_value()
                    .map_or_else(|| self.fill.clone(), Clone::clone)
            })
            .collect();
        Ok(Produced::Value(row))
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE
            .with_rewindable(self.lockstep.rewindable())
            .with_countable(self.len().is_some())
    }

    fn len(&self) -> Option<usize> {
        self.lockstep
            .lengths()
            .map(|lengths| lengths.into_iter().max().unwrap_or(0))
    }
}

/// Zips `sources`, running until the longest ends and padding with `fill`.
pub fn zip_longest_all<C, V>(sources: Vec<C>, fill: V) -> GeneratorCursor<ZipLongest<C, V>>
where
    C: Cursor<Value = V>,
    V: Clone,
{
    GeneratorCursor::new(ZipLongest::new(sources, fill))
}
