// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pairwise overlap resolution between a moving orb and a fixed neighbor.
//!
//! The push is one-sided: only the orb being resolved moves. Its neighbor is
//! corrected later in its own turn, which is why dense clusters need several
//! passes to settle.

use core::cmp::Ordering;

use crate::dimension::Dimension;

/// Relative slack below which an overlap is treated as already resolved.
///
/// The threshold is `OVERLAP_TOLERANCE * max(required, 1)`. Without it an exact
/// push can leave an ulp of overlap that no later push is large enough to move.
pub const OVERLAP_TOLERANCE: f64 = 1e-9;

/// Gap rules for one resolution call.
///
/// `padding` is part of the required center distance and decides what counts
/// as a collision. `margin` is extra distance added to every push, so a
/// resolved pair ends up `margin` clear of tangency. A margin larger than the
/// rounding error of the storage format keeps resolved pairs resolved once
/// their centers are stored.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Clearance {
    /// Minimum gap between surfaces.
    pub padding: f64,
    /// Overshoot added to each push.
    pub margin: f64,
}

impl Clearance {
    /// Padding only, no overshoot.
    pub const fn new(padding: f64) -> Self {
        Self {
            padding,
            margin: 0.0,
        }
    }

    /// Set the overshoot.
    pub const fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }
}

impl From<f64> for Clearance {
    fn from(padding: f64) -> Self {
        Self::new(padding)
    }
}

/// Displacement that moves a circle/sphere at `center` clear of one at `other`.
///
/// `required` is the minimum center distance (sum of radii plus padding); the
/// push lands `margin` beyond it. Returns `None` when the two are already far
/// enough apart, or when the distance is NaN. Exactly coincident centers are
/// separated along [`Dimension::FALLBACK_DIRECTION`].
pub fn separation<D: Dimension>(
    center: D::Point,
    other: D::Point,
    required: f64,
    margin: f64,
) -> Option<D::Offset> {
    let delta = D::offset(other, center);
    let distance = D::length(delta);
    let overlap = required - distance;
    let threshold = OVERLAP_TOLERANCE * required.max(1.0);
    if overlap.partial_cmp(&threshold) != Some(Ordering::Greater) {
        return None;
    }
    let direction = if distance >= f64::MIN_POSITIVE {
        D::scale(delta, 1.0 / distance)
    } else {
        D::FALLBACK_DIRECTION
    };
    Some(D::scale(direction, overlap + margin.max(0.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{Planar, Spatial};
    use glam::DVec3;
    use kurbo::{Point, Vec2};

    #[test]
    fn overlapping_pair_is_pushed_along_the_center_line() {
        let push = separation::<Planar>(Point::new(0.0, 0.0), Point::new(1.0, 0.0), 2.0, 0.0).unwrap();
        assert_eq!(push, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn separated_and_tangent_pairs_are_left_alone() {
        assert!(separation::<Planar>(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 3.0, 0.0).is_none());
        assert!(separation::<Planar>(Point::new(0.0, 0.0), Point::new(3.0, 0.0), 3.0, 0.0).is_none());
    }

    #[test]
    fn coincident_centers_use_fallback_direction() {
        let push = separation::<Spatial>(DVec3::ONE, DVec3::ONE, 2.0, 0.0).unwrap();
        assert_eq!(push, DVec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn push_lands_exactly_on_required_distance() {
        let a = DVec3::new(0.3, -0.2, 0.5);
        let b = DVec3::new(0.1, 0.4, -0.3);
        let moved = a + separation::<Spatial>(a, b, 5.0, 0.0).unwrap();
        let err = (moved - b).length() - 5.0;
        assert!(err > -1e-12 && err < 1e-12, "distance off by {err}");
        assert!(separation::<Spatial>(moved, b, 5.0, 0.0).is_none());
    }

    #[test]
    fn margin_overshoots_tangency_but_does_not_detect() {
        let push = separation::<Planar>(Point::ORIGIN, Point::new(1.0, 0.0), 2.0, 0.25).unwrap();
        assert_eq!(push, Vec2::new(-1.25, 0.0));
        // A pair inside the margin but outside `required` is not a collision.
        assert!(separation::<Planar>(Point::ORIGIN, Point::new(2.1, 0.0), 2.0, 0.25).is_none());
        assert_eq!(Clearance::from(1.5), Clearance::new(1.5));
        assert_eq!(Clearance::new(1.0).with_margin(0.5).margin, 0.5);
    }

    #[test]
    fn nan_distance_is_not_a_collision() {
        let nan = Point::new(f64::NAN, 0.0);
        assert!(separation::<Planar>(nan, Point::ORIGIN, 2.0, 0.0).is_none());
    }

    #[test]
    fn zero_size_coincident_orbs_do_not_collide() {
        assert!(separation::<Planar>(Point::ORIGIN, Point::ORIGIN, 0.0, 0.0).is_none());
    }
}
