//! A hash set of scalars with type-and-value membership.
//!
//! [`Set`] stores [`Scalar`](crate::value::Scalar) members. Membership is
//! exact under type-and-value equality: the integer `1`, the string `"1"`
//! and the boolean `true` are three different members. Composite values
//! (lists and maps) are rejected at insertion rather than coerced.
//!
//! `add`, `remove` and `update` mutate in place. The algebraic operations
//! (`union`, `intersection`, `difference`, `symmetric_difference`) always
//! return new sets.
//!
//! # Hashing
//!
//! The hasher is chosen at compile time:
//!
//! - default: the standard library's `RandomState`
//! - `fxhash` feature: `rustc_hash::FxBuildHasher`
//! - `ahash` feature: `ahash::RandomState`
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::set::Set;
//! use lazyseq::value::Value;
//!
//! let set = Set::from_values([Value::Int(1), Value::from("1"), Value::Bool(true)]).unwrap();
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(&Value::Int(1)));
//! assert!(!set.contains(&Value::Float(1.0)));
//! ```

mod hasher;
mod scalar_set;

pub use hasher::SetHasher;
pub use scalar_set::Set;
