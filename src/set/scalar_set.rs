//! The `Set` type.

use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;

use super::SetHasher;
use crate::cursor::Cursor;
use crate::error::Result;
use crate::source::ArrayCursor;
use crate::value::{Scalar, Value};

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of distinct scalars.
///
/// # Time Complexity
///
/// | Operation              | Complexity |
/// |------------------------|------------|
/// | `add`                  | O(1)*      |
/// | `remove`               | O(1)*      |
/// | `contains`             | O(1)*      |
/// | `len`                  | O(1)       |
/// | `union`                | O(n + m)   |
/// | `intersection`         | O(min(n, m)) |
/// | `difference`           | O(n)       |
/// | `is_subset`            | O(n)       |
///
/// \* expected, with one allocation for string lookups
///
/// # Examples
///
/// ```rust
/// use lazyseq::set::Set;
/// use lazyseq::value::Value;
///
/// let mut set = Set::new();
/// assert!(set.add(1).unwrap());
/// assert!(!set.add(1).unwrap());
/// assert!(set.add("1").unwrap());
/// assert!(set.add(Value::from(vec![1])).is_err());
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct Set {
    members: HashSet<Scalar, SetHasher>,
}

static_assertions::assert_impl_all!(Set: Clone, Send, Sync);

impl Set {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set from values.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NonScalar`] if any value is a list or a map;
    /// no set is built in that case.
    ///
    /// [`SequenceError::NonScalar`]: crate::error::SequenceError::NonScalar
    pub fn from_values<T, I>(values: I) -> Result<Self>
    where
        T: Into<Value>,
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::new();
        set.update(values)?;
        Ok(set)
    }

    /// Creates a set from the values of a sequence, after resetting it.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the sequence, or
    /// [`SequenceError::NonScalar`](crate::error::SequenceError::NonScalar)
    /// for a composite value.
    pub fn from_sequence<C>(sequence: &mut C) -> Result<Self>
    where
        C: Cursor + ?Sized,
        C::Value: Clone + Into<Value>,
    {
        let mut set = Self::new();
        sequence.reset()?;
        while let Some(value) = sequence.current_value() {
            set.add(value.clone())?;
            sequence.advance()?;
        }
        Ok(set)
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Adds `value`, returning `true` if it was not already a member.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NonScalar`](crate::error::SequenceError::NonScalar)
    /// if `value` is a list or a map. The set is unchanged.
    pub fn add(&mut self, value: impl Into<Value>) -> Result<bool> {
        let scalar = Scalar::try_from(Into::<Value>::into(value))?;
        Ok(self.members.insert(scalar))
    }

    /// Adds a scalar, returning `true` if it was not already a member.
    pub fn insert(&mut self, scalar: Scalar) -> bool {
        self.members.insert(scalar)
    }

    /// Adds every value.
    ///
    /// Either all values are added or, if one of them is composite, none is.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NonScalar`](crate::error::SequenceError::NonScalar)
    /// for the first composite value.
    pub fn update<T, I>(&mut self, values: I) -> Result<()>
    where
        T: Into<Value>,
        I: IntoIterator<Item = T>,
    {
        let scalars = values
            .into_iter()
            .map(|value| Scalar::try_from(Into::<Value>::into(value)))
            .collect::<Result<Vec<_>>>()?;
        self.members.extend(scalars);
        Ok(())
    }

    /// Removes `value`, returning `true` if it was a member.
    pub fn remove(&mut self, value: impl Into<Value>) -> bool {
        Scalar::try_from(Into::<Value>::into(value))
            .is_ok_and(|scalar| self.members.remove(&scalar))
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Returns `true` if `value` is a member under type-and-value equality.
    ///
    /// Composite values are never members.
    #[must_use]
    pub fn contains(&self, value: impl Into<Value>) -> bool {
        Scalar::try_from(Into::<Value>::into(value))
            .is_ok_and(|scalar| self.members.contains(&scalar))
    }

    /// Returns `true` if `scalar` is a member.
    #[must_use]
    pub fn contains_scalar(&self, scalar: &Scalar) -> bool {
        self.members.contains(scalar)
    }

    /// Iterates over the members in arbitrary order.
    pub fn iter(&self) -> hash_set::Iter<'_, Scalar> {
        self.members.iter()
    }

    // =========================================================================
    // Set algebra
    // =========================================================================

    /// Returns the members of `self` or `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut members = self.members.clone();
        members.extend(other.members.iter().cloned());
        Self { members }
    }

    /// Returns the members of both `self` and `other`.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        smaller
            .members
            .iter()
            .filter(|scalar| larger.members.contains(*scalar))
            .cloned()
            .collect()
    }

    /// Returns the members of `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.members
            .iter()
            .filter(|scalar| !other.members.contains(*scalar))
            .cloned()
            .collect()
    }

    /// Returns the members of exactly one of `self` and `other`.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.members
            .symmetric_difference(&other.members)
            .cloned()
            .collect()
    }

    /// Returns `true` if both sets have the same members.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }

    /// Returns `true` if every member of `self` is in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.members.is_subset(&other.members)
    }

    /// Returns `true` if every member of `other` is in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns a sequence over a snapshot of the members, in arbitrary order.
    #[must_use]
    pub fn to_sequence(&self) -> ArrayCursor<usize, Scalar> {
        ArrayCursor::from_values(self.members.iter().cloned().collect())
    }
}

// =============================================================================
// Trait implementations
// =============================================================================

impl PartialEq for Set {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Set {}

impl fmt::Debug for Set {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.members.iter()).finish()
    }
}

impl FromIterator<Scalar> for Set {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iterable: I) -> Self {
        let mut members = HashSet::with_hasher(SetHasher::default());
        members.extend(iterable);
        Self { members }
    }
}

impl Extend<Scalar> for Set {
    fn extend<I: IntoIterator<Item = Scalar>>(&mut self, iterable: I) {
        self.members.extend(iterable);
    }
}

impl<'a> IntoIterator for &'a Set {
    type Item = &'a Scalar;
    type IntoIter = hash_set::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl IntoIterator for Set {
    type Item = Scalar;
    type IntoIter = hash_set::IntoIter<Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}
