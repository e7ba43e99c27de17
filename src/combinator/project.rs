//! `Project`, backing `pluck` and `select`.

use indexmap::IndexMap;

use crate::cursor::{Capabilities, Cursor};
use crate::error::Result;
use crate::value::{Pluck, Value};

/// What a [`Project`] extracts from each value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// One field; a missing field becomes [`Value::Null`].
    Field(String),
    /// Several fields, gathered into a [`Value::Map`] in the given order.
    /// Missing fields are present with [`Value::Null`].
    Fields(Vec<String>),
}

impl Projection {
    fn apply<P: Pluck + ?Sized>(&self, container: &P) -> Result<Value> {
        match self {
            Self::Field(name) => Ok(container.pluck(name)?.unwrap_or_default()),
            Self::Fields(names) => names
                .iter()
                .map(|name| Ok((name.clone(), container.pluck(name)?.unwrap_or_default())))
                .collect::<Result<IndexMap<_, _>>>()
                .map(Value::Map),
        }
    }
}

/// Replaces each value with a projection of its fields, keeping keys.
///
/// Lookups go through [`Pluck`]; a value that is not a container fails
/// with [`SequenceError::Unpluckable`](crate::error::SequenceError::Unpluckable)
/// when the cursor reaches it. Every capability of the source is kept.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let people = vec![
///     Value::map([("name", Value::from("ada")), ("age", Value::from(36))]),
///     Value::map([("name", Value::from("bob"))]),
/// ];
///
/// let mut ages = from_values(people.clone()).pluck("age");
/// assert_eq!(ages.to_values().unwrap(), vec![Value::Int(36), Value::Null]);
///
/// let mut names = from_values(people).select(["name"]);
/// assert_eq!(
///     names.to_values().unwrap(),
///     vec![Value::map([("name", "ada")]), Value::map([("name", "bob")])]
/// );
/// ```
pub struct Project<C> {
    source: C,
    projection: Projection,
    current: Option<Value>,
}

impl<C> Project<C> {
    /// Wraps `source`.
    pub const fn new(source: C, projection: Projection) -> Self {
        Self {
            source,
            projection,
            current: None,
        }
    }

    /// The projection applied to each value.
    pub const fn projection(&self) -> &Projection {
        &self.projection
    }
}

impl<C> Project<C>
where
    C: Cursor,
    C::Value: Pluck,
{
    fn refresh(&mut self) -> Result<()> {
        self.current = None;
        if let Some(value) = self.source.current_value() {
            self.current = Some(self.projection.apply(value)?);
        }
        Ok(())
    }
}

impl<C> Cursor for Project<C>
where
    C: Cursor,
    C::Value: Pluck,
{
    type Key = C::Key;
    type Value = Value;

    fn reset(&mut self) -> Result<()> {
        self.source.reset()?;
        self.refresh()
    }

    fn current(&self) -> Option<(&C::Key, &Value)> {
        let key = self.source.current_key()?;
        self.current.as_ref().map(|value| (key, value))
    }

    fn advance(&mut self) -> Result<()> {
        self.source.advance()?;
        self.refresh()
    }

    fn capabilities(&self) -> Capabilities {
        self.source.capabilities()
    }

    fn len(&self) -> Option<usize> {
        self.source.len()
    }

    fn seek(&mut self, ordinal: usize) -> Result<()> {
        self.source.seek(ordinal)?;
        self.refresh()
    }
}
