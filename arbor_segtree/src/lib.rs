// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=arbor_segtree --heading-base-level=0

//! Arbor Segment Tree: a generic lazy-propagation segment tree.
//!
//! A [`SegmentTree`] stores a fixed-size array and answers range queries and
//! range updates in `O(log n)`:
//!
//! - Query the aggregate of any closed range `[l, r]` or of a single element.
//! - Add a delta to a range, or overwrite a range with a value.
//! - Find the leftmost element matching a target (ordered kinds only).
//!
//! The aggregation semantics are chosen at construction with a [`Kind`]:
//! range maximum, minimum, sum, or xor. The engine itself knows nothing about
//! the concrete kind; it only asks the kind how to merge, what the neutral
//! element is, and how pending work changes an aggregate.
//!
//! Elements are any primitive integer implementing [`Value`]. Sum and xor
//! trees wrap on overflow. Max and min trees require every element to stay
//! representable: an addition that would push a range's maximum (max trees)
//! or minimum (min trees) out of bounds is rejected with
//! [`SegTreeError::Overflow`].
//!
//! ## Features
//!
//! - `log` *(default)*: emit `log` records (target `arbor_segtree`) when
//!   trees are built and mutated. Disable it to drop the `log` dependency.
//!
//! # Example
//!
//! ```rust
//! use arbor_segtree::{Kind, SegmentTree};
//!
//! let mut tree = SegmentTree::new(Kind::Sum, &[1, 2, 3, 4]).unwrap();
//! tree.update(1, 2, 5).unwrap();
//! assert_eq!(tree.query(1, 2).unwrap(), 15);
//!
//! // Assignments discard additions made before them but not after.
//! tree.update(0, 3, 3).unwrap();
//! tree.set(0, 3, 10).unwrap();
//! tree.update(0, 3, 2).unwrap();
//! assert_eq!(tree.query(0, 3).unwrap(), 48);
//! ```
//!
//! Ordered kinds support searching for the leftmost match:
//!
//! ```rust
//! use arbor_segtree::{Kind, SegmentTree};
//!
//! let mut tree = SegmentTree::new(Kind::Max, &[3, 1, 4, 1, 5, 9, 2, 6]).unwrap();
//! assert_eq!(tree.find(5).unwrap(), 4);
//!
//! // Not found is reported as the length of the array.
//! assert_eq!(tree.find(100).unwrap(), tree.len());
//! assert_eq!(tree.find_first(100).unwrap(), None);
//! ```
//!
//! ## Errors
//!
//! Out-of-range indices, inverted ranges, empty or mismatched initial values,
//! and operations a kind does not support are reported as [`SegTreeError`]
//! at the call that made them. A rejected call leaves the tree unchanged.

#![no_std]

extern crate alloc;

mod error;
mod kind;
mod node;
mod tree;
mod util;
mod value;

pub use error::{Result, SegTreeError};
pub use kind::Kind;
pub use tree::SegmentTree;
pub use value::Value;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn hotel_rooms_are_taken_leftmost_first() {
        // Each group takes the first hotel with enough free rooms.
        let mut hotels = SegmentTree::new(Kind::Max, &[3, 2, 4, 1, 5, 5, 2]).unwrap();
        let mut taken = Vec::new();
        for group in [4, 4, 4, 1, 1] {
            match hotels.find_first(group).unwrap() {
                Some(i) => {
                    hotels.update_point(i, -group).unwrap();
                    taken.push(i + 1);
                }
                None => taken.push(0),
            }
        }
        assert_eq!(taken, [3, 5, 6, 1, 1]);
    }

    #[test]
    fn range_minimum_queries() {
        let mut tree = SegmentTree::new(Kind::Min, &[3, 2, 4, 5, 1, 1, 5, 3]).unwrap();
        assert_eq!(tree.query(1, 3).unwrap(), 2);
        assert_eq!(tree.query(6, 7).unwrap(), 3);
        assert_eq!(tree.query(0, 7).unwrap(), 1);
    }

    #[test]
    fn errors_surface_through_result() {
        let mut tree = SegmentTree::new(Kind::Xor, &[1_u64, 2]).unwrap();
        assert!(matches!(
            tree.find(1),
            Err(SegTreeError::Unsupported { kind: Kind::Xor, .. })
        ));
        let r: Result<u64> = tree.query(0, 1);
        assert_eq!(r, Ok(3));
    }
}
