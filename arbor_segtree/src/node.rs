// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree nodes and the pending-update algebra.

use crate::kind::Kind;
use crate::value::Value;

/// Aggregate of a contiguous sub-range, plus work not yet applied to it.
///
/// `value` reflects every update applied to the range as of the last
/// propagation that touched this node. Pending work has not been applied to
/// `value` yet and has not been pushed to the children.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    /// Pending additive delta; `T::ZERO` means none.
    pub(crate) lazy: T,
    /// Pending assignment, applied before `lazy`.
    pub(crate) assign: Option<T>,
}

impl<T: Value> Node<T> {
    /// A clean node holding `value`.
    #[inline]
    pub(crate) const fn leaf(value: T) -> Self {
        Self {
            value,
            lazy: T::ZERO,
            assign: None,
        }
    }

    /// The node standing in for a range disjoint from a query.
    #[inline]
    pub(crate) fn neutral(kind: Kind) -> Self {
        Self::leaf(kind.neutral())
    }

    /// A clean node whose value is the merge of `lhs` and `rhs`.
    #[inline]
    pub(crate) fn merged(kind: Kind, lhs: &Self, rhs: &Self) -> Self {
        Self::leaf(kind.merge(lhs.value, rhs.value))
    }

    #[inline]
    pub(crate) fn has_lazy(&self) -> bool {
        self.assign.is_some() || self.lazy != T::ZERO
    }

    /// Compose an incoming addition on top of whatever is already pending.
    #[inline]
    pub(crate) fn push_add(&mut self, delta: T) {
        self.lazy = T::add(self.lazy, delta);
    }

    /// Compose an incoming assignment; it discards the additions pending before it.
    #[inline]
    pub(crate) fn push_assign(&mut self, value: T) {
        self.assign = Some(value);
        self.lazy = T::ZERO;
    }

    /// Compose another node's pending work on top of this node's.
    #[inline]
    pub(crate) fn push_pending(&mut self, assign: Option<T>, lazy: T) {
        if let Some(v) = assign {
            self.push_assign(v);
        }
        self.push_add(lazy);
    }

    /// Apply the pending work to `value` for a node covering `len` elements.
    ///
    /// Returns the pending work that was applied so the caller can hand it to
    /// the children, and leaves this node clean.
    #[inline]
    pub(crate) fn settle(&mut self, kind: Kind, len: usize) -> (Option<T>, T) {
        let assign = self.assign.take();
        let lazy = core::mem::replace(&mut self.lazy, T::ZERO);
        if let Some(v) = assign {
            self.value = kind.apply_assign(v, len);
        }
        if lazy != T::ZERO {
            self.value = kind.apply_add(self.value, lazy, len);
        }
        (assign, lazy)
    }
}

#[cfg(test)]
mod tests {
    use super::Node;
    use crate::kind::Kind;

    #[test]
    fn assignment_discards_earlier_additions_only() {
        let mut node = Node::leaf(1_i64);
        node.push_add(3);
        node.push_assign(10);
        node.push_add(2);
        assert!(node.has_lazy());

        let pending = node.settle(Kind::Sum, 4);
        assert_eq!(pending, (Some(10), 2));
        assert_eq!(node.value, 4 * 10 + 4 * 2);
        assert!(!node.has_lazy());
    }

    #[test]
    fn pushing_pending_composes_like_direct_pushes() {
        let mut direct = Node::leaf(0_i32);
        direct.push_add(5);
        direct.push_assign(7);
        direct.push_add(1);

        let mut composed = Node::leaf(0_i32);
        composed.push_add(5);
        composed.push_pending(Some(7), 1);

        assert_eq!(direct, composed);
    }

    #[test]
    fn clean_node_settles_to_itself() {
        let mut node = Node::leaf(9_u8);
        assert_eq!(node.settle(Kind::Max, 3), (None, 0));
        assert_eq!(node.value, 9);
    }

    #[test]
    fn merged_drops_pending_work() {
        let mut a = Node::leaf(2_i32);
        a.push_add(100);
        let b = Node::leaf(5_i32);
        let m = Node::merged(Kind::Min, &a, &b);
        assert_eq!(m.value, 2);
        assert!(!m.has_lazy());
        assert_eq!(Node::<i32>::neutral(Kind::Min).value, i32::MAX);
    }
}
