//! Error types for sequences.
//!
//! Every fallible cursor operation returns [`Result`], whose error type is
//! [`SequenceError`]. Errors are never retried or suppressed inside the
//! library; they propagate to the caller at the point they are raised.
//!
//! The end-of-data signal used by generators is *not* an error. It is the
//! [`Produced::Exhausted`](crate::generator::Produced::Exhausted) variant and
//! is consumed by the generator adapter.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::error::SequenceError;
//!
//! let error = SequenceError::OutOfBounds { ordinal: 7, len: 3 };
//! assert!(error.is_invalid_argument());
//! assert_eq!(
//!     error.to_string(),
//!     "ordinal 7 is out of bounds for a sequence of length 3"
//! );
//! ```

/// A specialized `Result` for sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;

/// Represents the errors raised by cursors, combinators and the [`Set`].
///
/// The variants from [`OutOfBounds`](Self::OutOfBounds) through
/// [`Overflow`](Self::Overflow) form the invalid-argument family; see
/// [`is_invalid_argument`](Self::is_invalid_argument).
///
/// [`Set`]: crate::set::Set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// The input cannot be adapted into a sequence.
    #[error("value of kind `{kind}` cannot be adapted into a sequence")]
    NotTraversable {
        /// The kind of the rejected value.
        kind: &'static str,
    },

    /// A reducing operation ran on an empty sequence without a fallback value.
    #[error("{operation} called on an empty sequence with no fallback value")]
    EmptyIterable {
        /// The terminal operation that found no elements.
        operation: &'static str,
    },

    /// A single-pass sequence was asked to rewind after its first traversal.
    #[error("{sequence} is single-pass and cannot be rewound")]
    CannotRewind {
        /// A short name of the sequence that refused the rewind.
        sequence: &'static str,
    },

    /// A property lookup was attempted on a value that is not a container.
    #[error("cannot look up `{name}` on a value of kind `{kind}`")]
    Unpluckable {
        /// The property or index that was requested.
        name: String,
        /// The kind of the value that was queried.
        kind: &'static str,
    },

    /// A seek targeted an ordinal outside the sequence.
    #[error("ordinal {ordinal} is out of bounds for a sequence of length {len}")]
    OutOfBounds {
        /// The requested ordinal.
        ordinal: usize,
        /// The length of the sequence.
        len: usize,
    },

    /// A negative slice offset was given for a sequence of unknown length.
    #[error("negative offset {offset} requires a countable sequence")]
    NegativeOffset {
        /// The offending offset.
        offset: i64,
    },

    /// A slice or range was requested with a step of zero.
    #[error("step must be non-zero")]
    ZeroStep,

    /// A composite value was used where only scalars are accepted.
    #[error("value of kind `{kind}` is not a scalar")]
    NonScalar {
        /// The kind of the rejected value.
        kind: &'static str,
    },

    /// An arithmetic sequence cannot represent the value at this ordinal.
    #[error("arithmetic overflow computing the element at ordinal {ordinal}")]
    Overflow {
        /// The ordinal whose value does not fit.
        ordinal: usize,
    },

    /// An optional capability was invoked on a cursor that does not declare it.
    #[error("{operation} is not supported by this sequence")]
    Unsupported {
        /// The capability that was invoked.
        operation: &'static str,
    },
}

impl SequenceError {
    /// Returns `true` for the invalid-argument family of errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::error::SequenceError;
    ///
    /// assert!(SequenceError::ZeroStep.is_invalid_argument());
    /// assert!(!SequenceError::CannotRewind { sequence: "single_pass" }.is_invalid_argument());
    /// ```
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::OutOfBounds { .. }
                | Self::NegativeOffset { .. }
                | Self::ZeroStep
                | Self::NonScalar { .. }
                | Self::Overflow { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_traversable_display() {
        let error = SequenceError::NotTraversable { kind: "int" };
        assert_eq!(
            error.to_string(),
            "value of kind `int` cannot be adapted into a sequence"
        );
    }

    #[test]
    fn test_empty_iterable_display() {
        let error = SequenceError::EmptyIterable {
            operation: "reduce",
        };
        assert_eq!(
            error.to_string(),
            "reduce called on an empty sequence with no fallback value"
        );
    }

    #[test]
    fn test_unpluckable_display() {
        let error = SequenceError::Unpluckable {
            name: "age".to_string(),
            kind: "string",
        };
        assert_eq!(
            error.to_string(),
            "cannot look up `age` on a value of kind `string`"
        );
    }

    #[test]
    fn test_invalid_argument_family() {
        assert!(SequenceError::NegativeOffset { offset: -1 }.is_invalid_argument());
        assert!(SequenceError::NonScalar { kind: "list" }.is_invalid_argument());
        assert!(SequenceError::Overflow { ordinal: 3 }.is_invalid_argument());
        assert!(!SequenceError::EmptyIterable { operation: "max" }.is_invalid_argument());
        assert!(!SequenceError::Unsupported { operation: "seek" }.is_invalid_argument());
    }

    #[test]
    fn test_error_source_is_none() {
        use std::error::Error;

        let error = SequenceError::ZeroStep;
        assert!(error.source().is_none());
    }
}
