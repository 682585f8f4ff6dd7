// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric element abstraction.

use core::fmt::Debug;

/// Numeric element type stored in a [`SegmentTree`][crate::SegmentTree].
///
/// This trait provides the minimal set of operations every [`Kind`][crate::Kind]
/// needs: an additive identity, the bounds used as `-∞`/`+∞` neutral elements,
/// addition, scaling by a range length, and bitwise xor.
///
/// `add` and `scale` wrap on overflow, so sum trees behave as a ring modulo
/// `2^bits` rather than panicking in debug builds. Max and min trees require
/// every element to stay representable; see [`SegTreeError::Overflow`][crate::SegTreeError::Overflow].
pub trait Value: Copy + Ord + Debug {
    /// Additive identity.
    const ZERO: Self;

    /// Smallest representable value (`-∞` for max trees).
    const MIN: Self;

    /// Largest representable value (`+∞` for min trees).
    const MAX: Self;

    /// Wrapping addition.
    fn add(a: Self, b: Self) -> Self;

    /// Addition, or `None` if the result is not representable.
    fn checked_add(a: Self, b: Self) -> Option<Self>;

    /// Wrapping multiplication of `v` by a range length.
    fn scale(v: Self, len: usize) -> Self;

    /// Bitwise exclusive or.
    fn xor(a: Self, b: Self) -> Self;
}

macro_rules! impl_value {
    (@impl $t:ty, |$len:ident| $conv:expr) => {
        impl Value for $t {
            const ZERO: Self = 0;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn add(a: Self, b: Self) -> Self {
                a.wrapping_add(b)
            }

            #[inline]
            fn checked_add(a: Self, b: Self) -> Option<Self> {
                a.checked_add(b)
            }

            #[inline]
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Lengths wrap together with the rest of the arithmetic."
            )]
            fn scale(v: Self, $len: usize) -> Self {
                v.wrapping_mul($conv)
            }

            #[inline]
            fn xor(a: Self, b: Self) -> Self {
                a ^ b
            }
        }
    };
    ($($t:ty),* $(,)?) => {
        $(
            impl_value!(@impl $t, |len| len as $t);
        )*
    };
}

impl_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128);
impl_value!(@impl usize, |len| len);
