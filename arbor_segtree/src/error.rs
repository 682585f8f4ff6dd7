// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contract violations reported at the public API boundary.

use core::fmt;

use crate::kind::Kind;

/// Error type for [`SegmentTree`][crate::SegmentTree] operations.
///
/// Every variant describes a malformed call. None of them is transient, so
/// retrying the same call returns the same error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SegTreeError {
    /// A tree must cover at least one element.
    Empty,

    /// The initial values do not match the requested length.
    LengthMismatch {
        /// Requested number of elements.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// A point index is outside `0..len`.
    IndexOutOfBounds {
        /// Offending index.
        index: usize,
        /// Number of elements in the tree.
        len: usize,
    },

    /// A closed range `[start, end]` is inverted or extends past the end.
    InvalidRange {
        /// First index of the range.
        start: usize,
        /// Last index of the range (inclusive).
        end: usize,
        /// Number of elements in the tree.
        len: usize,
    },

    /// An addition on a max or min tree would push an element past the
    /// bounds of the element type.
    Overflow {
        /// First index of the updated range.
        start: usize,
        /// Last index of the updated range (inclusive).
        end: usize,
    },

    /// The operation is not defined for the tree's kind.
    Unsupported {
        /// Kind of the tree.
        kind: Kind,
        /// Name of the rejected operation.
        operation: &'static str,
    },

    /// Two trees of different kinds were combined.
    KindMismatch {
        /// Kind of the left-hand tree.
        lhs: Kind,
        /// Kind of the right-hand tree.
        rhs: Kind,
    },
}

impl fmt::Display for SegTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "segment tree must cover at least one element"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} initial values, got {actual}")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::InvalidRange { start, end, len } => {
                write!(f, "invalid range [{start}, {end}] for length {len}")
            }
            Self::Overflow { start, end } => {
                write!(f, "addition overflows an element in [{start}, {end}]")
            }
            Self::Unsupported { kind, operation } => {
                write!(f, "`{operation}` is not supported by {kind} trees")
            }
            Self::KindMismatch { lhs, rhs } => {
                write!(f, "cannot combine a {lhs} tree with a {rhs} tree")
            }
        }
    }
}

impl core::error::Error for SegTreeError {}

/// Result type for segment tree operations.
pub type Result<T> = core::result::Result<T, SegTreeError>;
