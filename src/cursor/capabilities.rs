//! Capability flags declared by cursors.

/// The optional capabilities a [`Cursor`](super::Cursor) declares.
///
/// Combinators compute their own flags from those of their inputs when
/// they are constructed; nothing inspects concrete cursor types at run
/// time. The flags must agree with the cursor's behaviour:
///
/// - `countable` ⇔ [`len`](super::Cursor::len) returns `Some`
/// - `seekable` ⇔ [`seek`](super::Cursor::seek) is implemented
/// - `rewindable` ⇔ [`reset`](super::Cursor::reset) succeeds on every call
///
/// # Examples
///
/// ```rust
/// use lazyseq::cursor::Capabilities;
///
/// let array = Capabilities::REWINDABLE.with_countable(true).with_seekable(true);
/// let stream = Capabilities::NONE;
///
/// assert!(array.is_seekable());
/// assert!(!array.intersect(stream).is_rewindable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities {
    countable: bool,
    seekable: bool,
    rewindable: bool,
}

impl Capabilities {
    /// A single-pass cursor with no optional capability.
    pub const NONE: Self = Self {
        countable: false,
        seekable: false,
        rewindable: false,
    };

    /// A cursor that can be reset but neither counted nor sought.
    pub const REWINDABLE: Self = Self {
        countable: false,
        seekable: false,
        rewindable: true,
    };

    /// A countable, seekable and rewindable cursor, such as an array.
    pub const ALL: Self = Self {
        countable: true,
        seekable: true,
        rewindable: true,
    };

    /// Returns a copy with the countable flag set to `countable`.
    #[must_use]
    pub const fn with_countable(self, countable: bool) -> Self {
        Self { countable, ..self }
    }

    /// Returns a copy with the seekable flag set to `seekable`.
    #[must_use]
    pub const fn with_seekable(self, seekable: bool) -> Self {
        Self { seekable, ..self }
    }

    /// Returns a copy with the rewindable flag set to `rewindable`.
    #[must_use]
    pub const fn with_rewindable(self, rewindable: bool) -> Self {
        Self { rewindable, ..self }
    }

    /// Returns the capabilities present in both `self` and `other`.
    #[must_use]
    pub const fn intersect(self, other: Self) -> Self {
        Self {
            countable: self.countable && other.countable,
            seekable: self.seekable && other.seekable,
            rewindable: self.rewindable && other.rewindable,
        }
    }

    /// Returns `true` if the cursor reports its length without consuming.
    #[must_use]
    pub const fn is_countable(self) -> bool {
        self.countable
    }

    /// Returns `true` if the cursor can jump to an absolute ordinal.
    #[must_use]
    pub const fn is_seekable(self) -> bool {
        self.seekable
    }

    /// Returns `true` if the cursor can restart from its first pair.
    #[must_use]
    pub const fn is_rewindable(self) -> bool {
        self.rewindable
    }
}
