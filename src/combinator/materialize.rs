//! Materializing combinators: `reverse`, `sort`, `sort_by_fields`, `shuffle`.
//!
//! Physical reordering needs the whole sequence, so these drain their
//! source into memory when called and return an [`ArrayCursor`] over the
//! result. Only `reverse` keeps the source keys; the others key their
//! output by fresh ordinals.

use std::cmp::Ordering;

use rand::Rng;
use rand::seq::SliceRandom;
use smallvec::SmallVec;

use super::{drain, drain_values};
use crate::cursor::Cursor;
use crate::error::Result;
use crate::source::ArrayCursor;
use crate::value::{Pluck, Value};

// =============================================================================
// Sort fields
// =============================================================================

/// The direction of one sort field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl Direction {
    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// A named field and the direction to sort it in.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let fields = [SortField::descending("age"), SortField::ascending("name")];
/// assert_eq!(fields[0].direction(), Direction::Descending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortField {
    name: String,
    direction: Direction,
}

impl SortField {
    /// Creates a sort field.
    pub fn new(name: impl Into<String>, direction: Direction) -> Self {
        Self {
            name: name.into(),
            direction,
        }
    }

    /// Sorts `name` smallest first.
    pub fn ascending(name: impl Into<String>) -> Self {
        Self::new(name, Direction::Ascending)
    }

    /// Sorts `name` largest first.
    pub fn descending(name: impl Into<String>) -> Self {
        Self::new(name, Direction::Descending)
    }

    /// The field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sort direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

// =============================================================================
// Materializers
// =============================================================================

/// Drains `source` and replays it back to front, keeping keys.
pub fn reverse<C>(mut source: C) -> Result<ArrayCursor<C::Key, C::Value>>
where
    C: Cursor,
    C::Key: Clone,
    C::Value: Clone,
{
    let mut pairs = drain(&mut source)?;
    pairs.reverse();
    Ok(ArrayCursor::new(pairs))
}

/// Drains `source` and sorts its values with `compare`.
///
/// The sort is not stable.
pub fn sort_by<C, F>(mut source: C, mut compare: F) -> Result<ArrayCursor<usize, C::Value>>
where
    C: Cursor,
    C::Value: Clone,
    F: FnMut(&C::Value, &C::Value) -> Ordering,
{
    let mut values = drain_values(&mut source)?;
    values.sort_unstable_by(|left, right| compare(left, right));
    Ok(ArrayCursor::from_values(values))
}

/// Drains `source` and sorts its values in their natural order.
///
/// Incomparable values (such as `NaN`) are treated as equal.
pub fn sort<C>(source: C) -> Result<ArrayCursor<usize, C::Value>>
where
    C: Cursor,
    C::Value: Clone + PartialOrd,
{
    sort_by(source, |left, right| {
        left.partial_cmp(right).unwrap_or(Ordering::Equal)
    })
}

/// Drains `source` and sorts its values by `fields`, in order.
///
/// Each field is looked up once per element through [`Pluck`] and
/// compared with [`Value::natural_cmp`]; a missing field sorts as
/// [`Value::Null`]. The first field that differs decides.
///
/// # Errors
///
/// Returns [`SequenceError::Unpluckable`](crate::error::SequenceError::Unpluckable)
/// if a value is not a container.
pub fn sort_by_fields<C>(mut source: C, fields: &[SortField]) -> Result<ArrayCursor<usize, C::Value>>
where
    C: Cursor,
    C::Value: Clone + Pluck,
{
    let mut decorated = drain_values(&mut source)?
        .into_iter()
        .map(|value| {
            let keys = fields
                .iter()
                .map(|field| Ok(value.pluck(&field.name)?.unwrap_or_default()))
                .collect::<Result<SmallVec<[Value; 4]>>>()?;
            Ok((keys, value))
        })
        .collect::<Result<Vec<_>>>()?;

    decorated.sort_unstable_by(|(left, _), (right, _)| {
        fields
            .iter()
            .zip(left.iter().zip(right.iter()))
            .map(|(field, (left, right))| field.direction.apply(left.natural_cmp(right)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });

    Ok(ArrayCursor::from_values(
        decorated.into_iter().map(|(_, value)| value).collect(),
    ))
}

/// Drains `source` and permutes its values with `rng`.
pub fn shuffle_with<C, R>(mut source: C, rng: &mut R) -> Result<ArrayCursor<usize, C::Value>>
where
    C: Cursor,
    C::Value: Clone,
    R: Rng + ?Sized,
{
    let mut values = drain_values(&mut source)?;
    values.shuffle(rng);
    Ok(ArrayCursor::from_values(values))
}
