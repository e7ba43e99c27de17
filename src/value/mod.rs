//! Dynamic values for heterogeneous sequences.
//!
//! Most sequences in this crate are generic over their key and value
//! types. Three places need a dynamic representation instead:
//!
//! - [`Value`]: an owned dynamic value (null, bool, int, float, string,
//!   list, map), used by [`from_value`](crate::source::from_value), by the
//!   grouping functions of `unique` and `partition`, and by property lookup.
//! - [`Scalar`]: the hashable scalar subset of [`Value`]. Equality is
//!   type-and-value: `Int(1)`, `Str("1")` and `Bool(true)` are distinct.
//!   It is the member type of [`Set`](crate::set::Set).
//! - [`Pluck`]: the property lookup capability consumed by `pluck`,
//!   `select`, `sort_by_fields` and `partition_by`.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::value::{Pluck, Scalar, Value};
//!
//! let record = Value::map([("name", Value::from("ada")), ("age", Value::from(36))]);
//! assert_eq!(record.pluck("age").unwrap(), Some(Value::Int(36)));
//! assert_eq!(record.pluck("email").unwrap(), None);
//!
//! assert_ne!(Scalar::from(1), Scalar::from("1"));
//! assert_ne!(Scalar::from(1), Scalar::from(true));
//! ```

mod lookup;
mod scalar;
#[allow(clippy::module_inception)]
mod value;

pub use lookup::Pluck;
pub use scalar::Scalar;
pub use value::Value;
