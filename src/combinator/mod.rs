//! Combinators over cursors.
//!
//! Each combinator takes one or more cursors and returns a new cursor.
//! The lazy ones pull from their upstream only when advanced:
//!
//! | Combinator          | Keys           | Countable        | Seekable |
//! |---------------------|----------------|------------------|----------|
//! | [`Map`]             | kept           | as source        | as source |
//! | [`MapKeys`]         | mapped         | as source        | as source |
//! | [`Filter`]          | kept           | no               | no       |
//! | [`Unique`]          | kept           | no               | no       |
//! | [`Chain`]           | fresh ordinals | no               | no       |
//! | [`Cycle`]           | fresh ordinals | no               | no       |
//! | [`Flip`]            | source values  | as source        | as source |
//! | [`Zip`]             | fresh ordinals | all inputs (min) | no       |
//! | [`ZipLongest`]      | fresh ordinals | all inputs (max) | no       |
//! | [`Combine`]         | keys' values   | both inputs (min)| no       |
//! | [`Slice`]           | kept           | bounds and source known | no |
//! | [`Project`]         | kept           | as source        | as source |
//!
//! Every lazy combinator is rewindable when all of its inputs are.
//!
//! The materializing ones ([`reverse`], [`sort`], [`sort_by`],
//! [`sort_by_fields`], [`shuffle_with`]) drain their source immediately
//! and return an [`ArrayCursor`](crate::source::ArrayCursor).
//!
//! These types are usually built through the fluent methods of
//! [`Sequence`](crate::sequence::Sequence).

mod chain;
mod combine;
mod cycle;
mod filter;
mod flip;
mod map;
mod materialize;
mod partition;
mod project;
mod slice;
mod unique;
mod zip;

pub use chain::{Chain, chain_all};
pub use combine::Combine;
pub use cycle::Cycle;
pub use filter::Filter;
pub use flip::Flip;
pub use map::{Map, MapKeys};
pub use materialize::{
    Direction, SortField, reverse, shuffle_with, sort, sort_by, sort_by_fields,
};
pub use partition::{NullBucket, Partition, partition};
pub use project::{Project, Projection};
pub use slice::Slice;
pub use unique::Unique;
pub use zip::{Zip, ZipLongest, zip_all, zip_longest_all};

pub(crate) use unique::identity;

use crate::cursor::Cursor;
use crate::error::Result;

/// Collects every pair of `source`, from its first.
pub(crate) fn drain<C>(source: &mut C) -> Result<Vec<(C::Key, C::Value)>>
where
    C: Cursor + ?Sized,
    C::Key: Clone,
    C::Value: Clone,
{
    let mut pairs = Vec::new();
    source.reset()?;
    while let Some((key, value)) = source.current() {
        pairs.push((key.clone(), value.clone()));
        source.advance()?;
    }
    Ok(pairs)
}

/// Collects every value of `source`, from its first.
pub(crate) fn drain_values<C>(source: &mut C) -> Result<Vec<C::Value>>
where
    C: Cursor + ?Sized,
    C::Value: Clone,
{
    let mut values = Vec::new();
    source.reset()?;
    while let Some(value) = source.current_value() {
        values.push(value.clone());
        source.advance()?;
    }
    Ok(values)
}
