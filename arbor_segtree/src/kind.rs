// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aggregation kinds and their per-kind behaviour.

use core::fmt;

use crate::value::Value;

/// Aggregation semantics of a [`SegmentTree`][crate::SegmentTree].
///
/// A kind is fixed when the tree is constructed. Each kind defines how two
/// sub-range aggregates merge, the neutral element returned for empty ranges,
/// how pending additions and assignments change an aggregate, and (for the
/// ordered kinds) the predicate used by [`find`][crate::SegmentTree::find].
///
/// | Kind   | Merge   | Neutral     | Add `d` over `len` | Assign `v` over `len` | Match          |
/// |--------|---------|-------------|--------------------|-----------------------|----------------|
/// | `Max`  | `max`   | `T::MIN`    | `value + d`        | `v`                   | `value >= t`   |
/// | `Min`  | `min`   | `T::MAX`    | `value + d`        | `v`                   | `value <= t`   |
/// | `Sum`  | `+`     | `0`         | `value + len * d`  | `len * v`             | unsupported    |
/// | `Xor`  | `^`     | `0`         | no-op              | `(len % 2) * v`       | unsupported    |
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Range maximum.
    Max,
    /// Range minimum.
    Min,
    /// Range sum.
    Sum,
    /// Range exclusive or.
    Xor,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 4] = [Self::Max, Self::Min, Self::Sum, Self::Xor];

    /// The merge identity: the aggregate of an empty range.
    #[inline]
    pub fn neutral<T: Value>(self) -> T {
        match self {
            Self::Max => T::MIN,
            Self::Min => T::MAX,
            Self::Sum | Self::Xor => T::ZERO,
        }
    }

    /// Combine the aggregates of two adjacent ranges.
    #[inline]
    pub fn merge<T: Value>(self, a: T, b: T) -> T {
        match self {
            Self::Max => a.max(b),
            Self::Min => a.min(b),
            Self::Sum => T::add(a, b),
            Self::Xor => T::xor(a, b),
        }
    }

    /// Apply an additive delta to an aggregate covering `len` elements.
    #[inline]
    pub fn apply_add<T: Value>(self, value: T, delta: T, len: usize) -> T {
        match self {
            Self::Max | Self::Min => T::add(value, delta),
            Self::Sum => T::add(value, T::scale(delta, len)),
            Self::Xor => value,
        }
    }

    /// The aggregate of `len` elements that were all assigned `v`.
    #[inline]
    pub fn apply_assign<T: Value>(self, v: T, len: usize) -> T {
        match self {
            Self::Max | Self::Min => v,
            Self::Sum => T::scale(v, len),
            Self::Xor => {
                if len % 2 == 1 {
                    v
                } else {
                    T::ZERO
                }
            }
        }
    }

    /// Whether a subtree whose aggregate is `value` contains an element matching `target`.
    ///
    /// Only meaningful when [`supports_find`][Self::supports_find] is true.
    #[inline]
    pub(crate) fn matches<T: Value>(self, value: T, target: T) -> bool {
        debug_assert!(self.supports_find(), "{self} trees have no match predicate");
        match self {
            Self::Max => value >= target,
            Self::Min => value <= target,
            Self::Sum | Self::Xor => false,
        }
    }

    /// Whether [`find`][crate::SegmentTree::find] is defined for this kind.
    #[inline]
    pub const fn supports_find(self) -> bool {
        matches!(self, Self::Max | Self::Min)
    }

    /// Whether additive updates change aggregates of this kind.
    ///
    /// Additions on a `Xor` tree are accepted but leave every value unchanged.
    #[inline]
    pub const fn supports_add(self) -> bool {
        !matches!(self, Self::Xor)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Max => "range-max",
            Self::Min => "range-min",
            Self::Sum => "range-sum",
            Self::Xor => "range-xor",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Kind;

    #[test]
    fn neutral_is_merge_identity() {
        for kind in Kind::ALL {
            for v in [-7_i64, 0, 3, 42] {
                assert_eq!(kind.merge(kind.neutral(), v), v, "{kind} left identity");
                assert_eq!(kind.merge(v, kind.neutral()), v, "{kind} right identity");
            }
        }
    }

    #[test]
    fn add_scales_with_length_only_for_sum() {
        assert_eq!(Kind::Sum.apply_add(10_i32, 2, 4), 18);
        assert_eq!(Kind::Max.apply_add(10_i32, 2, 4), 12);
        assert_eq!(Kind::Min.apply_add(10_i32, -2, 4), 8);
        assert_eq!(Kind::Xor.apply_add(10_i32, 2, 4), 10);
    }

    #[test]
    fn assign_depends_on_length_parity_for_xor() {
        assert_eq!(Kind::Xor.apply_assign(5_u32, 3), 5);
        assert_eq!(Kind::Xor.apply_assign(5_u32, 4), 0);
        assert_eq!(Kind::Sum.apply_assign(5_u32, 4), 20);
        assert_eq!(Kind::Min.apply_assign(5_u32, 4), 5);
    }

    #[test]
    fn match_predicates() {
        assert!(Kind::Max.matches(9_i32, 5));
        assert!(!Kind::Max.matches(4_i32, 5));
        assert!(Kind::Min.matches(1_i32, 5));
        assert!(!Kind::Min.matches(6_i32, 5));
        assert!(!Kind::Sum.supports_find());
        assert!(Kind::Min.supports_find());
    }
}
