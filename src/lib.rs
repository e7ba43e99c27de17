//! # lazyseq
//!
//! Lazy, capability-aware sequence combinators.
//!
//! ## Overview
//!
//! This library wraps enumerable data in a uniform cursor abstraction and
//! composes transformations over it without materializing intermediate
//! collections. It includes:
//!
//! - **Cursor protocol**: [`Cursor`](cursor::Cursor) with optional
//!   countable, seekable and rewindable capabilities
//! - **Generator adapter**: turns a `setup`/`advance` producer into a cursor
//! - **Sources**: arrays, arithmetic sequences, repeated values, single-pass
//!   iterators, dynamic [`Value`](value::Value)s
//! - **Combinators**: map, filter, unique, chain, cycle, flip, zip, combine,
//!   slice (seek or scan), sort, shuffle, reverse, partition
//! - **Set**: a hash set of scalars with type-and-value membership
//!
//! Nothing runs until a sequence is traversed. Combinators compute the
//! capabilities of their output from those of their inputs: a mapped
//! array is still countable and seekable, a filtered one is not.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for values, scalars and pairs
//! - `fxhash`: hash [`Set`](set::Set) members with `rustc-hash`
//! - `ahash`: hash [`Set`](set::Set) members with `ahash`
//! - `full`: enable every feature that does not change behaviour
//!
//! ## Logging
//!
//! Diagnostics are emitted through [`tracing`]: slice strategy choices and
//! rewinds at `debug`, cycle restarts and seek overruns at `trace`. The
//! library never installs a subscriber.
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut window = range(0, 100, 1)
//!     .unwrap()
//!     .map(|value, _| value * 10)
//!     .slice(-3, None)
//!     .unwrap();
//!
//! assert_eq!(window.len(), Some(3));
//! assert_eq!(window.to_pairs().unwrap(), vec![(97, 970), (98, 980), (99, 990)]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the cursor protocol, the sources, the [`Sequence`](crate::sequence::Sequence)
/// extension trait and the types its methods take or return. The crate's
/// `Result` alias is left out so that it does not shadow the standard one.
///
/// # Usage
///
/// ```rust
/// use lazyseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinator::{
        Direction, NullBucket, Partition, SortField, chain_all, zip_all, zip_longest_all,
    };
    pub use crate::cursor::{BoxedCursor, Capabilities, Cursor, KeyValuePair};
    pub use crate::error::SequenceError;
    pub use crate::generator::{Generator, GeneratorCursor, Produced, generate};
    pub use crate::sequence::Sequence;
    pub use crate::set::Set;
    pub use crate::source::{
        ArrayCursor, count, empty, from_pairs, from_value, from_values, range, repeat, repeat_n,
        single_pass,
    };
    pub use crate::value::{Pluck, Scalar, Value};
}

pub mod combinator;
pub mod cursor;
pub mod error;
pub mod generator;
pub mod sequence;
pub mod set;
pub mod source;
pub mod value;
