//! The owned dynamic value type.

use std::cmp::Ordering;
use std::fmt;

use indexmap::IndexMap;

use super::Scalar;

/// An owned dynamic value.
///
/// `Value` carries heterogeneous data through sequences: the elements of a
/// decoded document, records with named fields, or the mixed tuples built
/// by `zip`. Composite variants ([`List`](Self::List), [`Map`](Self::Map))
/// preserve insertion order.
///
/// `Value` deliberately does not implement `PartialOrd`: ints and floats
/// compare numerically under [`natural_cmp`](Self::natural_cmp) while
/// remaining unequal under `PartialEq`, which would break the
/// `PartialOrd`/`PartialEq` consistency contract.
///
/// # Examples
///
/// ```rust
/// use lazyseq::value::Value;
///
/// let list = Value::from(vec![1, 2, 3]);
/// assert_eq!(list.kind(), "list");
/// assert_eq!(list.to_string(), "[1, 2, 3]");
///
/// assert!(Value::Null.is_scalar());
/// assert!(!list.is_scalar());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// An ordered list of values.
    List(Vec<Value>),
    /// An insertion-ordered map from names to values.
    Map(IndexMap<String, Value>),
}

static_assertions::assert_impl_all!(Value: Clone, Send, Sync);

impl Value {
    /// Builds a [`Value::Map`] from name/value pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::value::Value;
    ///
    /// let point = Value::map([("x", 1), ("y", 2)]);
    /// assert_eq!(point.to_string(), "{x: 1, y: 2}");
    /// ```
    pub fn map<N, V, I>(entries: I) -> Self
    where
        N: Into<String>,
        V: Into<Self>,
        I: IntoIterator<Item = (N, V)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Returns the name of this value's kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    /// Returns `true` if the value is not a list or a map.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::List(_) | Self::Map(_))
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Compares two values by their natural ordering.
    ///
    /// Ints and floats compare numerically with each other, strings
    /// lexicographically, booleans with `false < true`, lists element by
    /// element. Values of unrelated kinds are ordered by kind:
    /// null < bool < number < string < list < map. Maps, and floats that
    /// are not comparable (NaN), compare as equal.
    ///
    /// This is the three-way comparison used when sorting dynamic values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use lazyseq::value::Value;
    ///
    /// assert_eq!(Value::Int(2).natural_cmp(&Value::Float(1.5)), Ordering::Greater);
    /// assert_eq!(Value::from("a").natural_cmp(&Value::from("b")), Ordering::Less);
    /// assert_eq!(Value::Null.natural_cmp(&Value::Bool(false)), Ordering::Less);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(left), Self::Bool(right)) => left.cmp(right),
            (Self::Int(left), Self::Int(right)) => left.cmp(right),
            (Self::Int(left), Self::Float(right)) => {
                (*left as f64).partial_cmp(right).unwrap_or(Ordering::Equal)
            }
            (Self::Float(left), Self::Int(right)) => {
                left.partial_cmp(&(*right as f64)).unwrap_or(Ordering::Equal)
            }
            (Self::Float(left), Self::Float(right)) => {
                left.partial_cmp(right).unwrap_or(Ordering::Equal)
            }
            (Self::Str(left), Self::Str(right)) => left.cmp(right),
            (Self::List(left), Self::List(right)) => left
                .iter()
                .zip(right)
                .map(|(left, right)| left.natural_cmp(right))
                .find(|ordering| ordering.is_ne())
                .unwrap_or_else(|| left.len().cmp(&right.len())),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Float(_) => 2,
            Self::Str(_) => 3,
            Self::List(_) => 4,
            Self::Map(_) => 5,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(formatter, "null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Str(value) => write!(formatter, "{value}"),
            Self::List(values) => {
                write!(formatter, "[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{value}")?;
                }
                write!(formatter, "]")
            }
            Self::Map(entries) => {
                write!(formatter, "{{")?;
                for (index, (name, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{name}: {value}")?;
                }
                write!(formatter, "}}")
            }
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or(Self::Float(value as f64), Self::Int)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Str(value.to_string())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<&Self> for Value {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

impl From<IndexMap<String, Self>> for Value {
    fn from(entries: IndexMap<String, Self>) -> Self {
        Self::Map(entries)
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Null => Self::Null,
            Scalar::Bool(value) => Self::Bool(value),
            Scalar::Int(value) => Self::Int(value),
            Scalar::Float(value) => Self::Float(value.into_inner()),
            Scalar::Str(value) => Self::Str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested() {
        let value = Value::map([
            ("tags", Value::from(vec!["a", "b"])),
            ("score", Value::Float(1.5)),
        ]);
        assert_eq!(value.to_string(), "{tags: [a, b], score: 1.5}");
    }

    #[test]
    fn test_natural_cmp_lists_by_prefix_then_length() {
        let short = Value::from(vec![1, 2]);
        let long = Value::from(vec![1, 2, 0]);
        assert_eq!(short.natural_cmp(&long), Ordering::Less);
        assert_eq!(
            Value::from(vec![3]).natural_cmp(&long),
            Ordering::Greater
        );
    }

    #[test]
    fn test_natural_cmp_nan_is_equal() {
        assert_eq!(
            Value::Float(f64::NAN).natural_cmp(&Value::Int(1)),
            Ordering::Equal
        );
    }
}
