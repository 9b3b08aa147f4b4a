// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding volumes and the per-iteration enclosing-volume scan.

use kurbo::{Point, Rect};

use crate::dimension::{Dimension, Planar};
use crate::orb::Orb;

/// Axis-aligned box (2D) or box/cube (3D) spanned by `min` and `max`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingVolume<D: Dimension> {
    /// Lower corner.
    pub min: D::Point,
    /// Upper corner.
    pub max: D::Point,
}

impl<D: Dimension> BoundingVolume<D> {
    /// Create a volume from its corners.
    pub const fn new(min: D::Point, max: D::Point) -> Self {
        Self { min, max }
    }

    /// Volume extending `reach` from `center` along every axis.
    pub fn around(center: D::Point, reach: f64) -> Self {
        let r = D::splat(reach);
        Self {
            min: D::translate(center, D::scale(r, -1.0)),
            max: D::translate(center, r),
        }
    }

    /// Smallest volume containing every orb's `center ± reach`.
    ///
    /// Single pass, no allocation. Returns `None` for an empty slice.
    /// For ranks with [`Dimension::EQUAL_SIDES`] the volume is widened from its
    /// lower corner into a cube of the longest side.
    pub fn enclosing(orbs: &[Orb<D>]) -> Option<Self> {
        let (first, rest) = orbs.split_first()?;
        let mut acc = Self::around(first.center(), first.reach());
        for orb in rest {
            let b = Self::around(orb.center(), orb.reach());
            acc.min = D::component_min(acc.min, b.min);
            acc.max = D::component_max(acc.max, b.max);
        }
        if D::EQUAL_SIDES {
            let side = D::largest_extent(acc.min, acc.max);
            if side.is_finite() {
                acc.max = D::component_max(acc.max, D::translate(acc.min, D::splat(side)));
            }
        }
        Some(acc)
    }

    /// Whether `p` lies inside or on the boundary. False for NaN points.
    pub fn contains(&self, p: D::Point) -> bool {
        D::all_le(self.min, p) && D::all_le(p, self.max)
    }

    /// Whether the two volumes overlap or touch.
    pub fn intersects(&self, other: &Self) -> bool {
        D::all_le(self.min, other.max) && D::all_le(other.min, self.max)
    }

    /// Center point.
    pub fn center(&self) -> D::Point {
        D::midpoint(self.min, self.max)
    }

    /// Longest side.
    pub fn largest_extent(&self) -> f64 {
        D::largest_extent(self.min, self.max)
    }

    /// Child `index` of an even split at the center.
    pub fn child(&self, index: usize) -> Self {
        let (min, max) = D::child_corners(self.min, self.center(), self.max, index);
        Self { min, max }
    }
}

impl BoundingVolume<Planar> {
    /// Convert to a Kurbo rectangle.
    pub fn to_rect(&self) -> Rect {
        Rect::from_points(self.min, self.max)
    }
}

impl From<Rect> for BoundingVolume<Planar> {
    fn from(r: Rect) -> Self {
        let r = r.abs();
        Self::new(Point::new(r.x0, r.y0), Point::new(r.x1, r.y1))
    }
}
