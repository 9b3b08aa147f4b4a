// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rank abstraction shared by the quadtree and the octree.
//!
//! The tree, the bounding volume and the collision resolver are written once
//! against [`Dimension`]. [`Planar`] plugs in Kurbo's `Point`/`Vec2` and splits
//! cells four ways; [`Spatial`] plugs in glam's `DVec3` and splits eight ways.

use core::fmt::Debug;

use glam::DVec3;
use kurbo::{Point, Vec2};

/// Vector arithmetic and cell subdivision for one spatial rank.
///
/// Child cells are numbered by a bit mask: bit `k` is set when the point lies on
/// the upper side of the cell midpoint along axis `k`. Comparisons involving NaN
/// are false, so non-finite points consistently land in the lower child.
pub trait Dimension: Copy + Debug + 'static {
    /// Location type (an orb center, a bounding volume corner).
    type Point: Copy + Debug + PartialEq;

    /// Displacement type between two points.
    type Offset: Copy + Debug + PartialEq;

    /// Number of children created when a cell splits (4 or 8).
    const SPLIT_COUNT: usize;

    /// Whether bounding volumes are widened to equal side lengths (squares/cubes).
    const EQUAL_SIDES: bool;

    /// Unit push direction used when two centers coincide exactly.
    const FALLBACK_DIRECTION: Self::Offset;

    /// Displacement `to - from`.
    fn offset(from: Self::Point, to: Self::Point) -> Self::Offset;

    /// Move `p` by `by`.
    fn translate(p: Self::Point, by: Self::Offset) -> Self::Point;

    /// Scale an offset.
    fn scale(v: Self::Offset, s: f64) -> Self::Offset;

    /// Euclidean length of an offset.
    fn length(v: Self::Offset) -> f64;

    /// Offset with every component set to `v`.
    fn splat(v: f64) -> Self::Offset;

    /// Componentwise minimum.
    fn component_min(a: Self::Point, b: Self::Point) -> Self::Point;

    /// Componentwise maximum.
    fn component_max(a: Self::Point, b: Self::Point) -> Self::Point;

    /// Midpoint of two points.
    fn midpoint(a: Self::Point, b: Self::Point) -> Self::Point;

    /// True when `a <= b` on every axis.
    fn all_le(a: Self::Point, b: Self::Point) -> bool;

    /// Longest side of the box spanned by `min` and `max`.
    fn largest_extent(min: Self::Point, max: Self::Point) -> f64;

    /// Index of the child cell (below `SPLIT_COUNT`) containing `p`.
    fn child_index(mid: Self::Point, p: Self::Point) -> usize;

    /// Corners of child `index` of the cell spanning `min..max` split at `mid`.
    fn child_corners(
        min: Self::Point,
        mid: Self::Point,
        max: Self::Point,
        index: usize,
    ) -> (Self::Point, Self::Point);

    /// Whether every coordinate of `p` is finite.
    fn is_finite(p: Self::Point) -> bool;
}

/// Two-dimensional rank: quadtree cells over Kurbo points.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Planar;

/// Three-dimensional rank: octree cells over glam `DVec3` points.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Spatial;

#[inline]
fn pick(bit: bool, low: f64, high: f64) -> f64 {
    if bit { high } else { low }
}

impl Dimension for Planar {
    type Point = Point;
    type Offset = Vec2;

    const SPLIT_COUNT: usize = 4;
    const EQUAL_SIDES: bool = false;
    const FALLBACK_DIRECTION: Vec2 = Vec2::new(1.0, 0.0);

    #[inline]
    fn offset(from: Point, to: Point) -> Vec2 {
        to - from
    }

    #[inline]
    fn translate(p: Point, by: Vec2) -> Point {
        p + by
    }

    #[inline]
    fn scale(v: Vec2, s: f64) -> Vec2 {
        v * s
    }

    #[inline]
    fn length(v: Vec2) -> f64 {
        v.length()
    }

    #[inline]
    fn splat(v: f64) -> Vec2 {
        Vec2::new(v, v)
    }

    #[inline]
    fn component_min(a: Point, b: Point) -> Point {
        Point::new(a.x.min(b.x), a.y.min(b.y))
    }

    #[inline]
    fn component_max(a: Point, b: Point) -> Point {
        Point::new(a.x.max(b.x), a.y.max(b.y))
    }

    #[inline]
    fn midpoint(a: Point, b: Point) -> Point {
        a.midpoint(b)
    }

    #[inline]
    fn all_le(a: Point, b: Point) -> bool {
        a.x <= b.x && a.y <= b.y
    }

    #[inline]
    fn largest_extent(min: Point, max: Point) -> f64 {
        (max.x - min.x).max(max.y - min.y)
    }

    #[inline]
    fn child_index(mid: Point, p: Point) -> usize {
        usize::from(p.x >= mid.x) | (usize::from(p.y >= mid.y) << 1)
    }

    fn child_corners(min: Point, mid: Point, max: Point, index: usize) -> (Point, Point) {
        let (hx, hy) = (index & 1 != 0, index & 2 != 0);
        (
            Point::new(pick(hx, min.x, mid.x), pick(hy, min.y, mid.y)),
            Point::new(pick(hx, mid.x, max.x), pick(hy, mid.y, max.y)),
        )
    }

    #[inline]
    fn is_finite(p: Point) -> bool {
        p.is_finite()
    }
}

impl Dimension for Spatial {
    type Point = DVec3;
    type Offset = DVec3;

    const SPLIT_COUNT: usize = 8;
    const EQUAL_SIDES: bool = true;
    const FALLBACK_DIRECTION: DVec3 = DVec3::X;

    #[inline]
    fn offset(from: DVec3, to: DVec3) -> DVec3 {
        to - from
    }

    #[inline]
    fn translate(p: DVec3, by: DVec3) -> DVec3 {
        p + by
    }

    #[inline]
    fn scale(v: DVec3, s: f64) -> DVec3 {
        v * s
    }

    #[inline]
    fn length(v: DVec3) -> f64 {
        v.length()
    }

    #[inline]
    fn splat(v: f64) -> DVec3 {
        DVec3::splat(v)
    }

    #[inline]
    fn component_min(a: DVec3, b: DVec3) -> DVec3 {
        a.min(b)
    }

    #[inline]
    fn component_max(a: DVec3, b: DVec3) -> DVec3 {
        a.max(b)
    }

    #[inline]
    fn midpoint(a: DVec3, b: DVec3) -> DVec3 {
        (a + b) * 0.5
    }

    #[inline]
    fn all_le(a: DVec3, b: DVec3) -> bool {
        a.x <= b.x && a.y <= b.y && a.z <= b.z
    }

    #[inline]
    fn largest_extent(min: DVec3, max: DVec3) -> f64 {
        (max - min).max_element()
    }

    #[inline]
    fn child_index(mid: DVec3, p: DVec3) -> usize {
        usize::from(p.x >= mid.x) | (usize::from(p.y >= mid.y) << 1) | (usize::from(p.z >= mid.z) << 2)
    }

    fn child_corners(min: DVec3, mid: DVec3, max: DVec3, index: usize) -> (DVec3, DVec3) {
        let (hx, hy, hz) = (index & 1 != 0, index & 2 != 0, index & 4 != 0);
        (
            DVec3::new(pick(hx, min.x, mid.x), pick(hy, min.y, mid.y), pick(hz, min.z, mid.z)),
            DVec3::new(pick(hx, mid.x, max.x), pick(hy, mid.y, max.y), pick(hz, mid.z, max.z)),
        )
    }

    #[inline]
    fn is_finite(p: DVec3) -> bool {
        p.is_finite()
    }
}
