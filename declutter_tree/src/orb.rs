// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-node geometric record used for one declutter run.

use glam::DVec3;
use kurbo::Point;

use crate::dimension::{Dimension, Planar, Spatial};

/// Radius given to orbs whose source has no usable radius.
pub const DEFAULT_RADIUS: f64 = 1.0;

/// A circle (2D) or sphere (3D): a center that moves during resolution and a fixed radius.
///
/// Non-finite radii are replaced by [`DEFAULT_RADIUS`] on construction. Negative
/// radii are kept as given but contribute no extent (see [`Orb::reach`]).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orb<D: Dimension> {
    center: D::Point,
    radius: f64,
}

impl<D: Dimension> Orb<D> {
    /// Create an orb from a center and a radius.
    pub fn from_center(center: D::Point, radius: f64) -> Self {
        Self {
            center,
            radius: sanitize_radius(Some(radius)),
        }
    }

    /// Current center.
    #[inline]
    pub fn center(&self) -> D::Point {
        self.center
    }

    /// Move the center.
    #[inline]
    pub fn set_center(&mut self, center: D::Point) {
        self.center = center;
    }

    /// Radius as stored.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Radius clamped at zero; the distance the orb extends from its center.
    #[inline]
    pub fn reach(&self) -> f64 {
        self.radius.max(0.0)
    }
}

impl Orb<Planar> {
    /// Create a circle at `(x, y)`.
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self::from_center(Point::new(x, y), radius)
    }
}

impl Orb<Spatial> {
    /// Create a sphere at `(x, y, z)`.
    pub fn new(x: f64, y: f64, z: f64, radius: f64) -> Self {
        Self::from_center(DVec3::new(x, y, z), radius)
    }
}

/// Resolve an optional host radius: missing or non-finite values become [`DEFAULT_RADIUS`].
pub fn sanitize_radius(radius: Option<f64>) -> f64 {
    match radius {
        Some(r) if r.is_finite() => r,
        _ => DEFAULT_RADIUS,
    }
}

/// Circle orb used by the quadtree.
pub type Orb2D = Orb<Planar>;

/// Sphere orb used by the octree.
pub type Orb3D = Orb<Spatial>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_non_finite_radius_defaults() {
        assert_eq!(sanitize_radius(None), DEFAULT_RADIUS);
        assert_eq!(sanitize_radius(Some(f64::NAN)), DEFAULT_RADIUS);
        assert_eq!(sanitize_radius(Some(f64::INFINITY)), DEFAULT_RADIUS);
        assert_eq!(sanitize_radius(Some(2.5)), 2.5);
        assert_eq!(Orb2D::new(0.0, 0.0, f64::NAN).radius(), DEFAULT_RADIUS);
    }

    #[test]
    fn negative_radius_is_kept_but_has_no_reach() {
        let orb = Orb3D::new(1.0, 2.0, 3.0, -4.0);
        assert_eq!(orb.radius(), -4.0);
        assert_eq!(orb.reach(), 0.0);
    }

    #[test]
    fn center_is_mutable() {
        let mut orb = Orb2D::new(1.0, 1.0, 1.0);
        orb.set_center(Point::new(5.0, -2.0));
        assert_eq!(orb.center(), Point::new(5.0, -2.0));
        assert_eq!(orb.radius(), 1.0);
    }
}
