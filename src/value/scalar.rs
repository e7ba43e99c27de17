//! The hashable scalar subset of [`Value`].

use std::fmt;

use ordered_float::OrderedFloat;

use super::Value;
use crate::error::SequenceError;

/// A scalar value with type-and-value identity.
///
/// Two scalars are equal only when they have the same kind *and* the same
/// value, so the integer `1`, the string `"1"` and the boolean `true` are
/// three distinct scalars even though their string forms may coincide.
/// Floats are compared through [`OrderedFloat`], which makes them hashable
/// (`NaN` equals itself and `-0.0` equals `0.0`).
///
/// # Examples
///
/// ```rust
/// use lazyseq::value::{Scalar, Value};
///
/// let scalar = Scalar::try_from(Value::Int(1)).unwrap();
/// assert_eq!(scalar, Scalar::Int(1));
/// assert_ne!(scalar, Scalar::from("1"));
///
/// assert!(Scalar::try_from(Value::from(vec![1])).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Scalar {
    /// The absence of a value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A totally ordered float.
    Float(OrderedFloat<f64>),
    /// A string.
    Str(String),
}

impl Scalar {
    /// Returns the name of this scalar's kind, matching [`Value::kind`].
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
        }
    }
}

impl TryFrom<Value> for Scalar {
    type Error = SequenceError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Self::Null),
            Value::Bool(value) => Ok(Self::Bool(value)),
            Value::Int(value) => Ok(Self::Int(value)),
            Value::Float(value) => Ok(Self::Float(OrderedFloat(value))),
            Value::Str(value) => Ok(Self::Str(value)),
            composite @ (Value::List(_) | Value::Map(_)) => Err(SequenceError::NonScalar {
                kind: composite.kind(),
            }),
        }
    }
}

impl TryFrom<&Value> for Scalar {
    type Error = SequenceError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        if value.is_scalar() {
            Self::try_from(value.clone())
        } else {
            Err(SequenceError::NonScalar { kind: value.kind() })
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(formatter, "null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Str(value) => write!(formatter, "{value}"),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(OrderedFloat(value))
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}
