//! The cursor protocol and its optional capabilities.
//!
//! A [`Cursor`] is a position over an ordered, keyed collection of
//! `(key, value)` pairs:
//!
//! - [`Cursor::reset`] positions it on the first pair
//! - [`Cursor::valid`] tells whether it currently points at a pair
//! - [`Cursor::current`] borrows that pair
//! - [`Cursor::advance`] steps to the next pair
//!
//! Beyond that minimal contract a cursor may declare, through
//! [`Capabilities`], that it is *countable* ([`Cursor::len`] answers without
//! consuming anything), *seekable* ([`Cursor::seek`] jumps to an absolute
//! ordinal) and *rewindable* (`reset` works more than once).
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::cursor::Cursor;
//! use lazyseq::source::from_values;
//!
//! let mut cursor = from_values(["a", "b"]);
//! cursor.reset().unwrap();
//! assert_eq!(cursor.current(), Some((&0, &"a")));
//!
//! cursor.advance().unwrap();
//! assert_eq!(cursor.current_value(), Some(&"b"));
//!
//! cursor.advance().unwrap();
//! assert!(!cursor.valid());
//! assert_eq!(cursor.len(), Some(2));
//! ```

mod capabilities;
#[allow(clippy::module_inception)]
mod cursor;
mod iter;
mod pair;

pub use capabilities::Capabilities;
pub use cursor::{BoxedCursor, Cursor};
pub use iter::Iter;
pub use pair::KeyValuePair;
