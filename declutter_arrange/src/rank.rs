// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion between host positions and orb centers for each rank.

use declutter_tree::{Dimension, Planar, Spatial};
use glam::DVec3;
use kurbo::Point;

use crate::graph::Position;
use crate::params::Dimensions;

/// A [`Dimension`] that host positions can be projected into and back out of.
pub trait Rank: Dimension {
    /// The matching run setting.
    const DIMENSIONS: Dimensions;

    /// Widen a host position to an orb center.
    fn project(position: Position) -> Self::Point;

    /// Narrow an orb center to a host position.
    ///
    /// Axes the rank does not model are copied from `original` unchanged.
    fn unproject(center: Self::Point, original: Position) -> Position;

    /// Center as `[x, y, z]`, with `z = 0` for ranks without depth.
    fn coords(center: Self::Point) -> [f64; 3];

    /// Inverse of [`coords`](Self::coords); ignores axes the rank does not model.
    fn from_coords(coords: [f64; 3]) -> Self::Point;

    /// Round a center to the nearest value a host position can hold.
    fn snap(center: Self::Point) -> Self::Point {
        Self::project(Self::unproject(center, Position::default()))
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "host attributes are single precision"
)]
#[inline]
fn narrow(v: f64) -> f32 {
    v as f32
}

impl Rank for Planar {
    const DIMENSIONS: Dimensions = Dimensions::Two;

    fn project(position: Position) -> Point {
        Point::new(f64::from(position.x), f64::from(position.y))
    }

    fn unproject(center: Point, original: Position) -> Position {
        Position {
            x: narrow(center.x),
            y: narrow(center.y),
            z: original.z,
        }
    }

    fn coords(center: Point) -> [f64; 3] {
        [center.x, center.y, 0.0]
    }

    fn from_coords([x, y, _]: [f64; 3]) -> Point {
        Point::new(x, y)
    }
}

impl Rank for Spatial {
    const DIMENSIONS: Dimensions = Dimensions::Three;

    fn project(position: Position) -> DVec3 {
        DVec3::new(
            f64::from(position.x),
            f64::from(position.y),
            f64::from(position.z),
        )
    }

    fn unproject(center: DVec3, _original: Position) -> Position {
        Position {
            x: narrow(center.x),
            y: narrow(center.y),
            z: narrow(center.z),
        }
    }

    fn coords(center: DVec3) -> [f64; 3] {
        center.to_array()
    }

    fn from_coords(coords: [f64; 3]) -> DVec3 {
        DVec3::from_array(coords)
    }
}
