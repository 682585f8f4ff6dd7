// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `SegmentTree` API and the recursive lazy-propagation engine.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{Result, SegTreeError};
use crate::kind::Kind;
use crate::node::Node;
use crate::util::{debug, mid, trace};
use crate::value::Value;

/// Pending work handed down a range update.
#[derive(Copy, Clone, Debug)]
enum Op<T> {
    Add(T),
    Assign(T),
}

/// A lazy-propagation segment tree over a fixed array of `len` elements.
///
/// Nodes live in an arena of `4 * len` slots; the node at `pos` has children
/// at `2 * pos + 1` and `2 * pos + 2`, and the root covers `[0, len - 1]`.
///
/// Every operation that may touch pending work takes `&mut self`, including
/// queries: a node's pending work is applied and pushed to its children the
/// first time a traversal visits it.
///
/// Ranges are closed: `query(l, r)` covers `l..=r`.
#[derive(Clone, Debug)]
pub struct SegmentTree<T> {
    kind: Kind,
    len: usize,
    nodes: Vec<Node<T>>,
}

impl<T: Value> SegmentTree<T> {
    /// Create a tree of `len` zeros.
    ///
    /// Returns [`SegTreeError::Empty`] when `len` is zero.
    pub fn with_len(kind: Kind, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(SegTreeError::Empty);
        }
        debug!("built {} tree over {} zeros", kind, len);
        // Every kind merges zeros into zero, so the whole arena is already consistent.
        Ok(Self {
            kind,
            len,
            nodes: vec![Node::leaf(T::ZERO); 4 * len],
        })
    }

    /// Build a tree over `values`.
    ///
    /// Returns [`SegTreeError::Empty`] when `values` is empty.
    pub fn new(kind: Kind, values: &[T]) -> Result<Self> {
        Self::from_len_and_values(kind, values.len(), values)
    }

    /// Build a tree of `len` elements from `values`, checking that the two agree.
    pub fn from_len_and_values(kind: Kind, len: usize, values: &[T]) -> Result<Self> {
        if values.len() != len {
            return Err(SegTreeError::LengthMismatch {
                expected: len,
                actual: values.len(),
            });
        }
        if len == 0 {
            return Err(SegTreeError::Empty);
        }
        let mut tree = Self {
            kind,
            len,
            nodes: vec![Node::leaf(T::ZERO); 4 * len],
        };
        tree.build(0, 0, len - 1, values);
        debug!("built {} tree over {} values", kind, len);
        Ok(tree)
    }

    /// Merge two trees slot by slot.
    ///
    /// The result is the tree over the element-wise merge of both arrays (for
    /// example, element-wise sums for [`Kind::Sum`]). Pending work in both
    /// inputs is flushed first, which costs `O(n)`.
    pub fn zip(lhs: &mut Self, rhs: &mut Self) -> Result<Self> {
        if lhs.kind != rhs.kind {
            return Err(SegTreeError::KindMismatch {
                lhs: lhs.kind,
                rhs: rhs.kind,
            });
        }
        if lhs.len != rhs.len {
            return Err(SegTreeError::LengthMismatch {
                expected: lhs.len,
                actual: rhs.len,
            });
        }
        lhs.flush(0, 0, lhs.len - 1);
        rhs.flush(0, 0, rhs.len - 1);

        let kind = lhs.kind;
        let nodes = lhs
            .nodes
            .iter()
            .zip(&rhs.nodes)
            .map(|(a, b)| Node::merged(kind, a, b))
            .collect();
        debug!("zipped two {} trees over {} elements", kind, lhs.len);
        Ok(Self {
            kind,
            len: lhs.len,
            nodes,
        })
    }

    /// Number of elements covered by the tree.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false: a tree covers at least one element.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The aggregation kind chosen at construction.
    #[inline]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Aggregate of the whole array.
    ///
    /// The root never holds pending work, so this is `O(1)`.
    #[inline]
    pub fn root(&self) -> T {
        debug_assert!(!self.nodes[0].has_lazy(), "root must always be clean");
        self.nodes[0].value
    }

    /// Value of the element at `index`.
    pub fn query_point(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        self.query(index, index)
    }

    /// Aggregate of the closed range `[l, r]`.
    pub fn query(&mut self, l: usize, r: usize) -> Result<T> {
        self.check_range(l, r)?;
        Ok(self.query_range(0, 0, self.len - 1, l, r).value)
    }

    /// Add `delta` to the element at `index`.
    pub fn update_point(&mut self, index: usize, delta: T) -> Result<()> {
        self.check_index(index)?;
        self.update(index, index, delta)
    }

    /// Add `delta` to every element of the closed range `[l, r]`.
    ///
    /// On a [`Kind::Xor`] tree this is accepted and changes nothing; see
    /// [`Kind::supports_add`].
    ///
    /// Sums wrap on overflow. Max and min trees require every element to stay
    /// representable: raising the maximum of a [`Kind::Max`] range past
    /// `T::MAX`, or lowering the minimum of a [`Kind::Min`] range past
    /// `T::MIN`, returns [`SegTreeError::Overflow`] and leaves the tree
    /// unchanged. Pushing the opposite extreme out of range (which the tree
    /// does not track) is a contract violation with unspecified results.
    pub fn update(&mut self, l: usize, r: usize, delta: T) -> Result<()> {
        self.check_range(l, r)?;
        let moves_extreme = match self.kind {
            Kind::Max => delta > T::ZERO,
            Kind::Min => delta < T::ZERO,
            Kind::Sum | Kind::Xor => false,
        };
        if moves_extreme && T::checked_add(self.query(l, r)?, delta).is_none() {
            return Err(SegTreeError::Overflow { start: l, end: r });
        }
        trace!("update [{}, {}] += {:?}", l, r, delta);
        self.update_range(0, 0, self.len - 1, l, r, Op::Add(delta));
        Ok(())
    }

    /// Overwrite the element at `index` with `value`.
    pub fn set_point(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        self.set(index, index, value)
    }

    /// Overwrite every element of the closed range `[l, r]` with `value`.
    ///
    /// Additions still pending on the range are discarded; additions made
    /// afterwards apply on top of `value`.
    pub fn set(&mut self, l: usize, r: usize, value: T) -> Result<()> {
        self.check_range(l, r)?;
        trace!("set [{}, {}] = {:?}", l, r, value);
        self.update_range(0, 0, self.len - 1, l, r, Op::Assign(value));
        Ok(())
    }

    /// Index of the leftmost element matching `target`, or [`len`][Self::len] if none does.
    ///
    /// An element matches when it is `>= target` on a [`Kind::Max`] tree and
    /// `<= target` on a [`Kind::Min`] tree. Other kinds return
    /// [`SegTreeError::Unsupported`].
    pub fn find(&mut self, target: T) -> Result<usize> {
        if !self.kind.supports_find() {
            return Err(SegTreeError::Unsupported {
                kind: self.kind,
                operation: "find",
            });
        }
        Ok(self.find_from(0, 0, self.len - 1, target))
    }

    /// Like [`find`][Self::find], mapping the not-found sentinel to `None`.
    pub fn find_first(&mut self, target: T) -> Result<Option<usize>> {
        let index = self.find(target)?;
        Ok((index != self.len).then_some(index))
    }

    /// Snapshot of every element, pushing all pending work down to the leaves.
    ///
    /// This is `O(n)` and mostly useful for debugging and tests.
    pub fn to_vec(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        self.collect(0, 0, self.len - 1, &mut out);
        out
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(SegTreeError::IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    fn check_range(&self, l: usize, r: usize) -> Result<()> {
        if l <= r && r < self.len {
            Ok(())
        } else {
            Err(SegTreeError::InvalidRange {
                start: l,
                end: r,
                len: self.len,
            })
        }
    }

    fn build(&mut self, pos: usize, l: usize, r: usize, values: &[T]) -> Node<T> {
        let node = if l == r {
            Node::leaf(values[l])
        } else {
            let m = mid(l, r);
            let left = self.build(2 * pos + 1, l, m, values);
            let right = self.build(2 * pos + 2, m + 1, r, values);
            Node::merged(self.kind, &left, &right)
        };
        self.nodes[pos] = node;
        node
    }

    /// Apply the node's pending work to its value and hand it to the children.
    fn propagate(&mut self, pos: usize, l: usize, r: usize) {
        if !self.nodes[pos].has_lazy() {
            return;
        }
        let (assign, lazy) = self.nodes[pos].settle(self.kind, r - l + 1);
        if l != r {
            self.nodes[2 * pos + 1].push_pending(assign, lazy);
            self.nodes[2 * pos + 2].push_pending(assign, lazy);
        }
    }

    fn query_range(&mut self, pos: usize, l: usize, r: usize, i: usize, j: usize) -> Node<T> {
        self.propagate(pos, l, r);

        if l > j || r < i {
            return Node::neutral(self.kind);
        }
        if i <= l && r <= j {
            return self.nodes[pos];
        }

        let m = mid(l, r);
        let left = self.query_range(2 * pos + 1, l, m, i, j);
        let right = self.query_range(2 * pos + 2, m + 1, r, i, j);
        Node::merged(self.kind, &left, &right)
    }

    fn update_range(
        &mut self,
        pos: usize,
        l: usize,
        r: usize,
        i: usize,
        j: usize,
        op: Op<T>,
    ) -> Node<T> {
        self.propagate(pos, l, r);

        if l > j || r < i {
            return self.nodes[pos];
        }

        if i <= l && r <= j {
            match op {
                Op::Add(delta) => self.nodes[pos].push_add(delta),
                Op::Assign(value) => self.nodes[pos].push_assign(value),
            }
            // The caller merges this node on the way up, so it must be clean.
            self.propagate(pos, l, r);
            return self.nodes[pos];
        }

        let m = mid(l, r);
        let left = self.update_range(2 * pos + 1, l, m, i, j, op);
        let right = self.update_range(2 * pos + 2, m + 1, r, i, j, op);
        let node = Node::merged(self.kind, &left, &right);
        self.nodes[pos] = node;
        node
    }

    fn find_from(&mut self, pos: usize, l: usize, r: usize, target: T) -> usize {
        self.propagate(pos, l, r);

        if !self.kind.matches(self.nodes[pos].value, target) {
            return self.len;
        }
        if l == r {
            return l;
        }

        let m = mid(l, r);
        let found = self.find_from(2 * pos + 1, l, m, target);
        if found != self.len {
            return found;
        }
        self.find_from(2 * pos + 2, m + 1, r, target)
    }

    fn flush(&mut self, pos: usize, l: usize, r: usize) {
        self.propagate(pos, l, r);
        if l != r {
            let m = mid(l, r);
            self.flush(2 * pos + 1, l, m);
            self.flush(2 * pos + 2, m + 1, r);
        }
    }

    fn collect(&mut self, pos: usize, l: usize, r: usize, out: &mut Vec<T>) {
        self.propagate(pos, l, r);
        if l == r {
            out.push(self.nodes[pos].value);
            return;
        }
        let m = mid(l, r);
        self.collect(2 * pos + 1, l, m, out);
        self.collect(2 * pos + 2, m + 1, r, out);
    }
}
