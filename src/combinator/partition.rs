//! Bucketing a sequence with `partition`.

use indexmap::IndexMap;
use indexmap::map::Iter;

use crate::cursor::Cursor;
use crate::error::Result;
use crate::value::{Scalar, Value};

/// What `partition` does with elements whose bucket is null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NullBucket {
    /// Null-bucketed elements are left out.
    #[default]
    Drop,
    /// Null-bucketed elements are gathered in a separate group.
    Keep,
}

/// The buckets built by [`Sequence::partition`](crate::sequence::Sequence::partition).
///
/// Buckets appear in the order their first element was seen, and each
/// bucket keeps its elements in sequence order.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut words = from_values(["apple", "", "avocado", "banana"]);
/// let by_initial = words
///     .partition(
///         |word, _| word.chars().next().map(Value::from),
///         NullBucket::Keep,
///     )
///     .unwrap();
///
/// assert_eq!(by_initial.get(&Scalar::from("a")), Some(&["apple", "avocado"][..]));
/// assert_eq!(by_initial.get(&Scalar::from("b")), Some(&["banana"][..]));
/// assert_eq!(by_initial.nulls(), Some(&[""][..]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<V> {
    buckets: IndexMap<Scalar, Vec<V>>,
    nulls: Option<Vec<V>>,
}

impl<V> Partition<V> {
    fn new(nulls: NullBucket) -> Self {
        Self {
            buckets: IndexMap::new(),
            nulls: match nulls {
                NullBucket::Drop => None,
                NullBucket::Keep => Some(Vec::new()),
            },
        }
    }

    /// The elements of `bucket`, if any element fell into it.
    #[must_use]
    pub fn get(&self, bucket: &Scalar) -> Option<&[V]> {
        self.buckets.get(bucket).map(Vec::as_slice)
    }

    /// The elements whose bucket was null, when they are kept.
    #[must_use]
    pub fn nulls(&self) -> Option<&[V]> {
        self.nulls.as_deref()
    }

    /// The number of non-null buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `true` if no element fell into a non-null bucket.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterates over the non-null buckets in first-seen order.
    pub fn iter(&self) -> Iter<'_, Scalar, Vec<V>> {
        self.buckets.iter()
    }

    /// Unwraps the buckets and the null group.
    #[must_use]
    pub fn into_parts(self) -> (IndexMap<Scalar, Vec<V>>, Option<Vec<V>>) {
        (self.buckets, self.nulls)
    }
}

/// Buckets every value of `source` by `bucket(value, key)`.
///
/// # Errors
///
/// Returns any error raised by the source or by `bucket`, or
/// [`SequenceError::NonScalar`](crate::error::SequenceError::NonScalar)
/// if a bucket is a list or a map.
pub fn partition<C, F, T>(source: &mut C, mut bucket: F, nulls: NullBucket) -> Result<Partition<C::Value>>
where
    C: Cursor + ?Sized,
    C::Value: Clone,
    F: FnMut(&C::Value, &C::Key) -> Result<T>,
    T: Into<Value>,
{
    let mut partition = Partition::new(nulls);
    source.reset()?;
    while let Some((key, value)) = source.current() {
        match Scalar::try_from(bucket(value, key)?.into())? {
            Scalar::Null => {
                if let Some(group) = partition.nulls.as_mut() {
                    group.push(value.clone());
                }
            }
            scalar => partition
                .buckets
                .entry(scalar)
                .or_default()
                .push(value.clone()),
        }
        source.advance()?;
    }
    Ok(partition)
}
