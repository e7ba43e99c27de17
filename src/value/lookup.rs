//! Property lookup over containers.
//!
//! [`Pluck`] is the single capability `pluck`, `select`, `sort_by_fields`
//! and `partition_by` need from their element type. A container answers a
//! lookup in one of two ways:
//!
//! - `Ok(Some(value))` when the name resolves
//! - `Ok(None)` when the container has no such entry ("no value")
//!
//! A value that is not a container at all fails with
//! [`SequenceError::Unpluckable`].

use std::collections::HashMap;
use std::hash::BuildHasher;

use indexmap::IndexMap;

use super::Value;
use crate::error::{Result, SequenceError};

/// Looks up a named property or index inside a container.
///
/// Implementations exist for [`Value`], for string-keyed maps and for
/// vectors. Domain types expose their fields by implementing this trait
/// directly, returning `Ok(None)` for names they do not know.
///
/// # Examples
///
/// ```rust
/// use lazyseq::value::{Pluck, Value};
///
/// let list = Value::from(vec!["zero", "one"]);
/// assert_eq!(list.pluck("1").unwrap(), Some(Value::from("one")));
/// assert_eq!(list.pluck("9").unwrap(), None);
/// assert!(Value::Int(3).pluck("0").is_err());
/// ```
pub trait Pluck {
    /// Returns the value stored under `name`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Unpluckable`] if `self` is not a container.
    fn pluck(&self, name: &str) -> Result<Option<Value>>;
}

impl Pluck for Value {
    fn pluck(&self, name: &str) -> Result<Option<Value>> {
        match self {
            Self::Map(entries) => Ok(entries.get(name).cloned()),
            Self::List(values) => Ok(name
                .parse::<usize>()
                .ok()
                .and_then(|index| values.get(index))
                .cloned()),
            scalar => Err(SequenceError::Unpluckable {
                name: name.to_string(),
                kind: scalar.kind(),
            }),
        }
    }
}

impl<V> Pluck for IndexMap<String, V>
where
    V: Clone + Into<Value>,
{
    fn pluck(&self, name: &str) -> Result<Option<Value>> {
        Ok(self.get(name).cloned().map(Into::into))
    }
}

impl<V, S> Pluck for HashMap<String, V, S>
where
    V: Clone + Into<Value>,
    S: BuildHasher,
{
    fn pluck(&self, name: &str) -> Result<Option<Value>> {
        Ok(self.get(name).cloned().map(Into::into))
    }
}

impl<V> Pluck for Vec<V>
where
    V: Clone + Into<Value>,
{
    fn pluck(&self, name: &str) -> Result<Option<Value>> {
        Ok(name
            .parse::<usize>()
            .ok()
            .and_then(|index| self.get(index))
            .cloned()
            .map(Into::into))
    }
}

impl<T: Pluck + ?Sized> Pluck for &T {
    fn pluck(&self, name: &str) -> Result<Option<Value>> {
        (**self).pluck(name)
    }
}
