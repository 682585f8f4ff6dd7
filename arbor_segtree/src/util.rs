// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Forwards to [`log::debug!`] when the `log` feature is enabled.
macro_rules! debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::debug!(target: "arbor_segtree", $($arg)+);
    };
}

/// Forwards to [`log::trace!`] when the `log` feature is enabled.
macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::trace!(target: "arbor_segtree", $($arg)+);
    };
}

pub(crate) use {debug, trace};

/// Midpoint of a closed range without overflow.
#[inline(always)]
pub(crate) const fn mid(l: usize, r: usize) -> usize {
    l + (r - l) / 2
}
