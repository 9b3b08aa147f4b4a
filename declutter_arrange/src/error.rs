// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Failure outcomes of a declutter run.

/// Why a run did not commit a layout.
///
/// Geometry problems (NaN coordinates, coincident centers, bad radii) are never
/// errors; they are absorbed by fallbacks in `declutter_tree`. Hitting the
/// iteration cap is not an error either: see [`Summary::converged`](crate::Summary::converged).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The cancellation signal was raised between two passes. Nothing was written back.
    #[error("declutter was cancelled")]
    Cancelled,
    /// Only 2 and 3 dimensional layouts exist.
    #[error("dimension must be 2 or 3, got {0}")]
    InvalidDimension(u8),
    /// Padding must be a finite, non-negative distance.
    #[error("padding must be finite and non-negative, got {0}")]
    InvalidPadding(f64),
    /// A run needs at least one pass.
    #[error("iteration limit must be at least 1")]
    InvalidIterationLimit,
    /// Leaves must hold at least one orb and depth must stay within the tree's limit.
    #[error("tree config out of range: leaf capacity {leaf_capacity}, max depth {max_depth}")]
    InvalidTreeConfig {
        /// Requested leaf capacity.
        leaf_capacity: usize,
        /// Requested maximum depth.
        max_depth: u32,
    },
}

impl Error {
    /// Whether this is the cooperative-cancellation outcome rather than a configuration error.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Result alias for declutter operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;
