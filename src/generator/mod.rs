//! The generator adapter.
//!
//! A [`Generator`] is a producer defined by two operations:
//!
//! - `setup`: reinitialize internal state; called once per traversal start
//! - `advance`: produce the next element as a [`Produced`] value
//!
//! [`GeneratorCursor`] turns any generator into a full [`Cursor`]. It calls
//! `advance` once on reset to prime the first element and once per step
//! afterwards, assigns sequential ordinal keys (0, 1, 2, ...) to bare values,
//! and stops when the generator reports [`Produced::Exhausted`].
//!
//! Emptiness is expressed by `advance` returning `Exhausted` immediately;
//! `setup` is never used to signal "no data".
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! /// Counts down from `from` to 1.
//! struct Countdown {
//!     from: u32,
//!     remaining: u32,
//! }
//!
//! impl Generator for Countdown {
//!     type Key = usize;
//!     type Value = u32;
//!
//!     fn setup(&mut self) -> lazyseq::error::Result<()> {
//!         self.remaining = self.from;
//!         Ok(())
//!     }
//!
//!     fn advance(&mut self) -> lazyseq::error::Result<Produced<usize, u32>> {
//!         if self.remaining == 0 {
//!             return Ok(Produced::Exhausted);
//!         }
//!         self.remaining -= 1;
//!         Ok(Produced::Value(self.remaining + 1))
//!     }
//! }
//!
//! let mut countdown = GeneratorCursor::new(Countdown { from: 3, remaining: 0 });
//! assert_eq!(countdown.to_pairs().unwrap(), vec![(0, 3), (1, 2), (2, 1)]);
//! ```
//!
//! [`Cursor`]: crate::cursor::Cursor

mod adapter;
mod closure;

pub use adapter::{Generator, GeneratorCursor, OrdinalKey, Produced};
pub use closure::{FromFn, generate};
