//! Closure-backed generators.

use std::marker::PhantomData;

use super::{Generator, GeneratorCursor, Produced};
use crate::error::Result;

/// A [`Generator`] built from a `setup` closure and an `advance` closure.
///
/// Created by [`generate`].
pub struct FromFn<S, A, K, V> {
    setup: S,
    advance: A,
    marker: PhantomData<fn() -> (K, V)>,
}

impl<S, A, K, V> Generator for FromFn<S, A, K, V>
where
    S: FnMut() -> Result<()>,
    A: FnMut() -> Result<Produced<K, V>>,
{
    type Key = K;
    type Value = V;

    fn setup(&mut self) -> Result<()> {
        (self.setup)()
    }

    fn advance(&mut self) -> Result<Produced<K, V>> {
        (self.advance)()
    }
}

/// Builds a cursor from a pair of closures.
///
/// `setup` runs at every reset; `advance` runs once to prime the first
/// element and once per step afterwards.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use lazyseq::prelude::*;
///
/// let counter = Rc::new(Cell::new(0));
/// let reset_counter = Rc::clone(&counter);
/// let step_counter = Rc::clone(&counter);
///
/// let mut squares = generate(
///     move || {
///         reset_counter.set(0);
///         Ok(())
///     },
///     move || {
///         let n = step_counter.get();
///         step_counter.set(n + 1);
///         Ok(if n < 4 { Produced::<usize, _>::Value(n * n) } else { Produced::Exhausted })
///     },
/// );
///
/// assert_eq!(squares.to_values().unwrap(), vec![0, 1, 4, 9]);
/// assert_eq!(squares.to_values().unwrap(), vec![0, 1, 4, 9]);
/// ```
pub fn generate<S, A, K, V>(setup: S, advance: A) -> GeneratorCursor<FromFn<S, A, K, V>>
where
    S: FnMut() -> Result<()>,
    A: FnMut() -> Result<Produced<K, V>>,
{
    GeneratorCursor::new(FromFn {
        setup,
        advance,
        marker: PhantomData,
    })
}
