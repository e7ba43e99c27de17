//! The fluent `Sequence` extension trait.
//!
//! [`Sequence`] is implemented for every [`Cursor`]. It adds two kinds of
//! methods:
//!
//! - **combinators** take `self` and return a new cursor. The lazy ones do
//!   no work until the result is traversed; the materializing ones
//!   (`reverse`, `sort*`, `shuffle*`) drain the source when called.
//! - **terminal operations** take `&mut self`, reset the cursor and drive
//!   it to the end (or until an error), so a rewindable sequence can be
//!   consumed any number of times.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut squares = count(1, 1)
//!     .map(|value, _| value * value)
//!     .filter(|square, _| square % 2 == 1)
//!     .take(3)
//!     .unwrap();
//!
//! assert_eq!(squares.to_values().unwrap(), vec![1, 9, 25]);
//! assert_eq!(squares.sum().unwrap(), 35);
//! ```

use std::cmp::Ordering;
use std::fmt::{Display, Write};
use std::hash::Hash;
use std::ops::Add;

use indexmap::IndexMap;
use rand::Rng;

use crate::combinator::{
    self, Chain, Combine, Cycle, Filter, Flip, Map, MapKeys, NullBucket, Partition, Project,
    Projection, Slice, SortField, Unique, Zip, ZipLongest, drain, drain_values, identity,
};
use crate::cursor::{BoxedCursor, Cursor, Iter};
use crate::error::{Result, SequenceError};
use crate::generator::GeneratorCursor;
use crate::set::Set;
use crate::source::ArrayCursor;
use crate::value::{Pluck, Value};

/// A cursor whose keys have been discarded, for combinators that re-key.
pub type Unkeyed<'a, V> = BoxedCursor<'a, (), V>;

/// Combinators and terminal operations available on every [`Cursor`].
pub trait Sequence: Cursor {
    // =========================================================================
    // Traversal
    // =========================================================================

    /// Iterates over cloned `(key, value)` pairs from the first.
    fn iter(&mut self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    // =========================================================================
    // Lazy combinators
    // =========================================================================

    /// Replaces each value with `function(value, key)`. See [`Map`].
    fn map<U, F>(self, function: F) -> Map<Self, F, U>
    where
        Self: Sized,
        F: FnMut(&Self::Value, &Self::Key) -> U,
    {
        Map::new(self, function)
    }

    /// Replaces each key with `function(key, value)`. See [`MapKeys`].
    fn map_keys<J, F>(self, function: F) -> MapKeys<Self, F, J>
    where
        Self: Sized,
        F: FnMut(&Self::Key, &Self::Value) -> J,
    {
        MapKeys::new(self, function)
    }

    /// Keeps the elements matching `predicate`. See [`Filter`].
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Value, &Self::Key) -> bool,
    {
        Filter::keeping(self, predicate)
    }

    /// Drops the elements matching `predicate`. See [`Filter`].
    fn reject<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Value, &Self::Key) -> bool,
    {
        Filter::rejecting(self, predicate)
    }

    /// Keeps the first occurrence of each distinct value. See [`Unique`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let mut distinct = from_values([1, 2, 3, 1, 2, 3, 1, 2, 3]).unique();
    /// assert_eq!(distinct.to_values().unwrap(), vec![1, 2, 3]);
    /// ```
    #[allow(clippy::type_complexity)]
    fn unique(self) -> Unique<Self, fn(&Self::Value) -> Self::Value, Self::Value>
    where
        Self: Sized,
        Self::Value: Clone + Into<Value>,
    {
        Unique::new(self, identity::<Self::Value> as fn(&Self::Value) -> Self::Value)
    }

    /// Keeps the first element of each group computed by `group`. See [`Unique`].
    fn unique_by<T, G>(self, group: G) -> Unique<Self, G, T>
    where
        Self: Sized,
        G: FnMut(&Self::Value) -> T,
        T: Into<Value>,
    {
        Unique::new(self, group)
    }

    /// Continues with `other` once `self` ends. See [`Chain`].
    ///
    /// Keys of both inputs are discarded in favour of fresh ordinals.
    fn chain<'a, O>(self, other: O) -> Chain<Unkeyed<'a, Self::Value>>
    where
        Self: Sized + 'a,
        O: Cursor<Value = Self::Value> + 'a,
    {
        Chain::new(vec![erase_keys(self), erase_keys(other)])
    }

    /// Repeats `self` forever. See [`Cycle`].
    fn cycle(self) -> Cycle<Self>
    where
        Self: Sized,
    {
        Cycle::new(self)
    }

    /// Swaps keys and values. See [`Flip`].
    fn flip(self) -> Flip<Self>
    where
        Self: Sized,
    {
        Flip::new(self)
    }

    /// Pairs the values of `self` and `other` until either ends. See [`Zip`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let numbers = from_values([1, 2, 3, 4].map(Value::from));
    /// let letters = from_values(['a', 'b', 'c'].map(Value::from));
    /// assert_eq!(numbers.zip(letters).count().unwrap(), 3);
    /// ```
    fn zip<'a, O>(self, other: O) -> GeneratorCursor<Zip<Unkeyed<'a, Self::Value>>>
    where
        Self: Sized + 'a,
        O: Cursor<Value = Self::Value> + 'a,
        Self::Value: Clone,
    {
        combinator::zip_all(vec![erase_keys(self), erase_keys(other)])
    }

    /// Pairs the values of `self` and `other` until both end, padding with
    /// `fill`. See [`ZipLongest`].
    fn zip_longest<'a, O>(
        self,
        other: O,
        fill: Self::Value,
    ) -> GeneratorCursor<ZipLongest<Unkeyed<'a, Self::Value>, Self::Value>>
    where
        Self: Sized + 'a,
        O: Cursor<Value = Self::Value> + 'a,
        Self::Value: Clone,
    {
        combinator::zip_longest_all(vec![erase_keys(self), erase_keys(other)], fill)
    }

    /// Uses the values of `self` as keys for the values of `values`.
    /// See [`Combine`].
    fn combine<O>(self, values: O) -> Combine<Self, O>
    where
        Self: Sized,
        O: Cursor,
    {
        Combine::new(self, values)
    }

    /// Slices from `start` up to the exclusive `end`. See [`Slice`].
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NegativeOffset`] if an offset is negative
    /// and the sequence is not countable.
    fn slice(self, start: i64, end: Option<i64>) -> Result<Slice<Self>>
    where
        Self: Sized,
    {
        Slice::new(self, start, end, 1)
    }

    /// Slices from `start` towards `end`, taking every `step`-th element.
    /// See [`Slice`].
    ///
    /// # Errors
    ///
    /// - [`SequenceError::ZeroStep`] if `step` is zero
    /// - [`SequenceError::NegativeOffset`] if an offset is negative and the
    ///   sequence is not countable
    fn slice_step(self, start: i64, end: Option<i64>, step: i64) -> Result<Slice<Self>>
    where
        Self: Sized,
    {
        Slice::new(self, start, end, step)
    }

    /// Keeps the first `count` elements.
    ///
    /// # Errors
    ///
    /// Never fails for the offsets it builds; the `Result` mirrors [`slice`](Self::slice).
    fn take(self, count: usize) -> Result<Slice<Self>>
    where
        Self: Sized,
    {
        Slice::new(self, 0, Some(i64::try_from(count).unwrap_or(i64::MAX)), 1)
    }

    /// Drops the first `count` elements.
    ///
    /// # Errors
    ///
    /// Never fails for the offsets it builds; the `Result` mirrors [`slice`](Self::slice).
    fn skip(self, count: usize) -> Result<Slice<Self>>
    where
        Self: Sized,
    {
        Slice::new(self, i64::try_from(count).unwrap_or(i64::MAX), None, 1)
    }

    /// Replaces each value with its field `name`. See [`Project`].
    fn pluck(self, name: impl Into<String>) -> Project<Self>
    where
        Self: Sized,
        Self::Value: Pluck,
    {
        Project::new(self, Projection::Field(name.into()))
    }

    /// Replaces each value with a map of the fields `names`. See [`Project`].
    fn select<N, I>(self, names: I) -> Project<Self>
    where
        Self: Sized,
        Self::Value: Pluck,
        N: Into<String>,
        I: IntoIterator<Item = N>,
    {
        let names = names.into_iter().map(Into::into).collect();
        Project::new(self, Projection::Fields(names))
    }

    /// Erases the concrete cursor type.
    fn boxed<'a>(self) -> BoxedCursor<'a, Self::Key, Self::Value>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    // =========================================================================
    // Materializing combinators
    // =========================================================================

    /// Replays the sequence back to front, keeping keys.
    ///
    /// # Errors
    ///
    /// Returns any error raised while draining the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let mut backwards = from_values(['a', 'b', 'c']).reverse().unwrap();
    /// assert_eq!(backwards.to_pairs().unwrap(), vec![(2, 'c'), (1, 'b'), (0, 'a')]);
    /// ```
    fn reverse(self) -> Result<ArrayCursor<Self::Key, Self::Value>>
    where
        Self: Sized,
        Self::Key: Clone,
        Self::Value: Clone,
    {
        combinator::reverse(self)
    }

    /// Sorts the values in their natural order, keyed by fresh ordinals.
    ///
    /// # Errors
    ///
    /// Returns any error raised while draining the sequence.
    fn sort(self) -> Result<ArrayCursor<usize, Self::Value>>
    where
        Self: Sized,
        Self::Value: Clone + PartialOrd,
    {
        combinator::sort(self)
    }

    /// Sorts the values with `compare`, keyed by fresh ordinals.
    ///
    /// # Errors
    ///
    /// Returns any error raised while draining the sequence.
    fn sort_by<F>(self, compare: F) -> Result<ArrayCursor<usize, Self::Value>>
    where
        Self: Sized,
        Self::Value: Clone,
        F: FnMut(&Self::Value, &Self::Value) -> Ordering,
    {
        combinator::sort_by(self, compare)
    }

    /// Sorts the values by the named `fields`, keyed by fresh ordinals.
    ///
    /// # Errors
    ///
    /// Returns any error raised while draining the sequence, or
    /// [`SequenceError::Unpluckable`] if a value is not a container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let people = from_values([
    ///     Value::map([("name", Value::from("cyd")), ("age", Value::from(30))]),
    ///     Value::map([("name", Value::from("ada")), ("age", Value::from(36))]),
    ///     Value::map([("name", Value::from("bob")), ("age", Value::from(30))]),
    /// ]);
    /// let mut names = people
    ///     .sort_by_fields(&[SortField::descending("age"), SortField::ascending("name")])
    ///     .unwrap()
    ///     .pluck("name");
    /// assert_eq!(
    ///     names.to_values().unwrap(),
    ///     vec![Value::from("ada"), Value::from("bob"), Value::from("cyd")]
    /// );
    /// ```
    fn sort_by_fields(self, fields: &[SortField]) -> Result<ArrayCursor<usize, Self::Value>>
    where
        Self: Sized,
        Self::Value: Clone + Pluck,
    {
        combinator::sort_by_fields(self, fields)
    }

    /// Permutes the values with the thread-local generator.
    ///
    /// # Errors
    ///
    /// Returns any error raised while draining the sequence.
    fn shuffle(self) -> Result<ArrayCursor<usize, Self::Value>>
    where
        Self: Sized,
        Self::Value: Clone,
    {
        combinator::shuffle_with(self, &mut rand::thread_rng())
    }

    /// Permutes the values with `rng`.
    ///
    /// # Errors
    ///
    /// Returns any error raised while draining the sequence.
    fn shuffle_with<R>(self, rng: &mut R) -> Result<ArrayCursor<usize, Self::Value>>
    where
        Self: Sized,
        Self::Value: Clone,
        R: Rng + ?Sized,
    {
        combinator::shuffle_with(self, rng)
    }

    // =========================================================================
    // Terminal operations
    // =========================================================================

    /// Collects every value.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the sequence.
    fn to_values(&mut self) -> Result<Vec<Self::Value>>
    where
        Self::Value: Clone,
    {
        drain_values(self)
    }

    /// Collects every `(key, value)` pair, duplicates included.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the sequence.
    fn to_pairs(&mut self) -> Result<Vec<(Self::Key, Self::Value)>>
    where
        Self::Key: Clone,
        Self::Value: Clone,
    {
        drain(self)
    }

    /// Collects into a map.
    ///
    /// A repeated key keeps its last value, at the position where the key
    /// was first seen.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the sequence.
    fn to_map(&mut self) -> Result<IndexMap<Self::Key, Self::Value>>
    where
        Self::Key: Hash + Eq + Clone,
        Self::Value: Clone,
    {
        let mut map = IndexMap::new();
        self.reset()?;
        while let Some((key, value)) = self.current() {
            map.insert(key.clone(), value.clone());
            self.advance()?;
        }
        Ok(map)
    }

    /// Collects the values into a [`Set`].
    ///
    /// # Errors
    ///
    /// Returns any error raised by the sequence, or
    /// [`SequenceError::NonScalar`] for a composite value.
    fn to_set(&mut self) -> Result<Set>
    where
        Self::Value: Clone + Into<Value>,
    {
        Set::from_sequence(self)
    }

    /// Folds every element into an accumulator, starting from `init`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the sequence.
    fn fold<A, F>(&mut self, init: A, mut function: F) -> Result<A>
    where
        F: FnMut(A, &Self::Value, &Self::Key) -> A,
    {
        let mut accumulator = init;
        self.reset()?;
        while let Some((key, value)) = self.current() {
            accumulator = function(accumulator, value, key);
            self.advance()?;
        }
        Ok(accumulator)
    }

    /// Folds every element into the first one.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyIterable`] if the sequence is empty,
    /// or any error raised by the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let product = from_values([2, 3, 4]).reduce(|product, value, _| product * value);
    /// assert_eq!(product, Ok(24));
    ///
    /// assert!(matches!(
    ///     empty::<usize, i32>().reduce(|product, value, _| product * value),
    ///     Err(SequenceError::EmptyIterable { .. })
    /// ));
    /// ```
    fn reduce<F>(&mut self, mut function: F) -> Result<Self::Value>
    where
        Self::Value: Clone,
        F: FnMut(Self::Value, &Self::Value, &Self::Key) -> Self::Value,
    {
        self.reset()?;
        let Some(first) = self.current_value().cloned() else {
            return Err(SequenceError::EmptyIterable {
                operation: "reduce",
            });
        };
        let mut accumulator = first;
        self.advance()?;
        while let Some((key, value)) = self.current() {
            accumulator = function(accumulator, value, key);
            self.advance()?;
        }
        Ok(accumulator)
    }

    /// Folds every element into `seed`; an empty sequence returns `seed`
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the sequence.
    fn reduce_from<F>(&mut self, seed: Self::Value, function: F) -> Result<Self::Value>
    where
        F: FnMut(Self::Value, &Self::Value, &Self::Key) -> Self::Value,
    {
        self.fold(seed, function)
    }

    /// Adds up the values, starting from the default value.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the sequence.
    fn sum(&mut self) -> Result<Self::Value>
    where
        Self::Value: Clone + Add<Output = Self::Value> + Default,
    {
        self.fold(Self::Value::default(), |total, value, _| total + value.clone())
    }

    /// Counts the elements, without traversing when the sequence is countable.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the sequence.
    fn count(&mut self) -> Result<usize> {
        match self.len() {
            Some(len) => Ok(len),
            None => self.fold(0, |count, _, _| count + 1),
        }
    }

    /// Returns the smallest value; ties keep the first.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyIterable`] if the sequence is empty,
    /// or any error raised by the sequence.
    fn min(&mut self) -> Result<Self::Value>
    where
        Self::Value: Clone + PartialOrd,
    {
        best(self, "min", |candidate, best| candidate < best)
    }

    /// Returns the largest value; ties keep the first.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyIterable`] if the sequence is empty,
    /// or any error raised by the sequence.
    fn max(&mut self) -> Result<Self::Value>
    where
        Self::Value: Clone + PartialOrd,
    {
        best(self, "max", |candidate, best| candidate > best)
    }

    /// Returns the value with the smallest `key`; ties keep the first.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyIterable`] if the sequence is empty,
    /// or any error raised by the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let mut words = from_values(["kiwi", "fig", "pear", "yam"]);
    /// assert_eq!(words.min_by_key(|word| word.len()), Ok("fig"));
    /// assert_eq!(words.max_by_key(|word| word.len()), Ok("kiwi"));
    /// ```
    fn min_by_key<T, F>(&mut self, key: F) -> Result<Self::Value>
    where
        Self::Value: Clone,
        T: PartialOrd,
        F: FnMut(&Self::Value) -> T,
    {
        best_by_key(self, "min_by_key", key, |candidate, best| candidate < best)
    }

    /// Returns the value with the largest `key`; ties keep the first.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyIterable`] if the sequence is empty,
    /// or any error raised by the sequence.
    fn max_by_key<T, F>(&mut self, key: F) -> Result<Self::Value>
    where
        Self::Value: Clone,
        T: PartialOrd,
        F: FnMut(&Self::Value) -> T,
    {
        best_by_key(self, "max_by_key", key, |candidate, best| candidate > best)
    }

    /// Returns the value that `is_better(candidate, best)` prefers to every
    /// other; ties keep the first.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyIterable`] if the sequence is empty,
    /// or any error raised by the sequence.
    fn optimal<F>(&mut self, is_better: F) -> Result<Self::Value>
    where
        Self::Value: Clone,
        F: FnMut(&Self::Value, &Self::Value) -> bool,
    {
        best(self, "optimal", is_better)
    }

    /// Formats the values separated by `separator`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the sequence.
    fn join(&mut self, separator: &str) -> Result<String>
    where
        Self::Value: Display,
    {
        let mut joined = String::new();
        self.reset()?;
        let mut first = true;
        while let Some(value) = self.current_value() {
            if !first {
                joined.push_str(separator);
            }
            first = false;
            let _ = write!(joined, "{value}");
            self.advance()?;
        }
        Ok(joined)
    }

    /// Buckets the values by `bucket(value, key)`. See [`Partition`].
    ///
    /// # Errors
    ///
    /// Returns any error raised by the sequence, or
    /// [`SequenceError::NonScalar`] if a bucket is a list or a map.
    fn partition<T, F>(&mut self, mut bucket: F, nulls: NullBucket) -> Result<Partition<Self::Value>>
    where
        Self::Value: Clone,
        F: FnMut(&Self::Value, &Self::Key) -> T,
        T: Into<Value>,
    {
        combinator::partition(self, |value, key| Ok(bucket(value, key)), nulls)
    }

    /// Buckets the values by their field `name`; a missing field is null.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the sequence,
    /// [`SequenceError::Unpluckable`] if a value is not a container, or
    /// [`SequenceError::NonScalar`] if a field holds a list or a map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let mut pets = from_values([
    ///     Value::map([("kind", "cat")]),
    ///     Value::map([("kind", "dog")]),
    ///     Value::map([("kind", "cat")]),
    ///     Value::map([("name", "rex")]),
    /// ]);
    /// let by_kind = pets.partition_by("kind", NullBucket::Drop).unwrap();
    /// assert_eq!(by_kind.len(), 2);
    /// assert_eq!(by_kind.get(&Scalar::from("cat")).map(<[_]>::len), Some(2));
    /// assert_eq!(by_kind.nulls(), None);
    /// ```
    fn partition_by(&mut self, name: &str, nulls: NullBucket) -> Result<Partition<Self::Value>>
    where
        Self::Value: Clone + Pluck,
    {
        combinator::partition(
            self,
            |value, _| Ok(value.pluck(name)?.unwrap_or_default()),
            nulls,
        )
    }
}

impl<C: Cursor + ?Sized> Sequence for C {}

// =============================================================================
// Helpers
// =============================================================================

fn erase_keys<'a, C>(cursor: C) -> Unkeyed<'a, C::Value>
where
    C: Cursor + 'a,
{
    Box::new(MapKeys::new(cursor, |_: &C::Key, _: &C::Value| ()))
}

fn best<C, F>(cursor: &mut C, operation: &'static str, mut is_better: F) -> Result<C::Value>
where
    C: Cursor + ?Sized,
    C::Value: Clone,
    F: FnMut(&C::Value, &C::Value) -> bool,
{
    cursor.reset()?;
    let Some(mut best) = cursor.current_value().cloned() else {
        return Err(SequenceError::EmptyIterable { operation });
    };
    cursor.advance()?;
    while let Some(candidate) = cursor.current_value() {
        if is_better(candidate, &best) {
            best = candidate.clone();
        }
        cursor.advance()?;
    }
    Ok(best)
}

fn best_by_key<C, T, K, F>(
    cursor: &mut C,
    operation: &'static str,
    mut key: K,
    mut is_better: F,
) -> Result<C::Value>
where
    C: Cursor + ?Sized,
    C::Value: Clone,
    K: FnMut(&C::Value) -> T,
    F: FnMut(&T, &T) -> bool,
{
    cursor.reset()?;
    let Some(first) = cursor.current_value() else {
        return Err(SequenceError::EmptyIterable { operation });
    };
    let mut best = (key(first), first.clone());
    cursor.advance()?;
    while let Some(candidate) = cursor.current_value() {
        let candidate_key = key(candidate);
        if is_better(&candidate_key, &best.0) {
            best = (candidate_key, candidate.clone());
        }
        cursor.advance()?;
    }
    Ok(best.1)
}
