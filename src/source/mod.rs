//! Primitive producers and factories.
//!
//! These functions wrap raw data into the [`Cursor`] abstraction:
//!
//! - [`from_values`], [`from_pairs`]: in-memory data, fully capable
//! - [`from_value`]: a dynamic [`Value`] list or map
//! - [`single_pass`]: a one-shot iterator
//! - [`count`], [`range`]: arithmetic sequences
//! - [`repeat`], [`repeat_n`]: a repeated value
//! - [`empty`]: no pairs at all
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut pairs = from_pairs([("x", 1), ("y", 2)]);
//! assert_eq!(pairs.len(), Some(2));
//! assert_eq!(pairs.to_pairs().unwrap(), vec![("x", 1), ("y", 2)]);
//! ```

mod arithmetic;
mod array;
mod repeat;
mod single_pass;

pub use arithmetic::{Count, Range, count, range};
pub(crate) use arithmetic::span_len;
pub use array::ArrayCursor;
pub use repeat::{Repeat, repeat, repeat_n};
pub use single_pass::{SinglePass, single_pass};

use crate::error::{Result, SequenceError};
use crate::value::{Scalar, Value};

/// Wraps values, keyed by their position.
pub fn from_values<V, I>(values: I) -> ArrayCursor<usize, V>
where
    I: IntoIterator<Item = V>,
{
    ArrayCursor::from_values(values.into_iter().collect())
}

/// Wraps `(key, value)` pairs, keeping their keys.
pub fn from_pairs<K, V, I>(pairs: I) -> ArrayCursor<K, V>
where
    I: IntoIterator<Item = (K, V)>,
{
    pairs.into_iter().collect()
}

/// Adapts a dynamic [`Value`] into a sequence.
///
/// Lists are keyed by position ([`Scalar::Int`]), maps by name
/// ([`Scalar::Str`]).
///
/// # Errors
///
/// Returns [`SequenceError::NotTraversable`] for scalar values.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let record = Value::map([("a", 1), ("b", 2)]);
/// let mut fields = from_value(record).unwrap();
/// fields.reset().unwrap();
/// assert_eq!(fields.current_key(), Some(&Scalar::from("a")));
///
/// assert!(from_value(Value::Int(3)).is_err());
/// ```
pub fn from_value(value: Value) -> Result<ArrayCursor<Scalar, Value>> {
    match value {
        Value::List(values) => Ok(values
            .into_iter()
            .enumerate()
            .map(|(index, value)| (Scalar::Int(i64::try_from(index).unwrap_or(i64::MAX)), value))
            .collect()),
        Value::Map(entries) => Ok(entries
            .into_iter()
            .map(|(name, value)| (Scalar::Str(name), value))
            .collect()),
        scalar => Err(SequenceError::NotTraversable {
            kind: scalar.kind(),
        }),
    }
}

/// A sequence with no pairs.
#[must_use]
pub const fn empty<K, V>() -> ArrayCursor<K, V> {
    ArrayCursor::new(Vec::new())
}

