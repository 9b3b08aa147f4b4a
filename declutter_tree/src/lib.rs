// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=declutter_tree --heading-base-level=0

//! Declutter Tree: quadtree and octree over circles and spheres, with overlap resolution.
//!
//! Declutter Tree is the geometric core of a layout declutter pass.
//!
//! - [`Orb`]s are circles ([`Orb2D`]) or spheres ([`Orb3D`]): a movable center and a fixed radius.
//! - [`BoundingVolume::enclosing`] computes the box (2D) or cube (3D) around a set of orbs in one pass.
//! - [`PartitionTree`] indexes orb centers in a [`Quadtree`] or [`Octree`] built over that volume.
//! - [`PartitionTree::uncollide`] pushes one orb clear of every neighbor it overlaps and reports how many it found.
//!   A [`Clearance`] adds an overshoot margin to each push.
//!
//! Both ranks share one implementation, parameterized by the [`Dimension`] trait.
//! 2D geometry uses Kurbo (`Point`, `Vec2`, `Rect`); 3D geometry uses glam's `DVec3`.
//!
//! # Example
//!
//! ```rust
//! use declutter_tree::{Orb2D, Quadtree, BoundingVolume};
//! use kurbo::Point;
//!
//! let mut orbs = vec![Orb2D::new(0.0, 0.0, 1.0), Orb2D::new(1.0, 0.0, 1.0)];
//!
//! // Build a tree over the current layout.
//! let bounds = BoundingVolume::enclosing(&orbs).unwrap();
//! let mut tree = Quadtree::new(bounds);
//! for (slot, orb) in orbs.iter().enumerate() {
//!     tree.insert(slot, orb);
//! }
//!
//! // Resolve the first orb against its neighbors with no padding.
//! let collisions = tree.uncollide(&mut orbs, 0, 0.0);
//! assert_eq!(collisions, 1);
//! assert_eq!(orbs[0].center(), Point::new(-1.0, 0.0));
//! ```
//!
//! The tree is designed to be thrown away and rebuilt every iteration.
//! [`PartitionTree::rebuild`] resets the arena in place, so repeated rebuilds reuse memory:
//!
//! ```rust
//! use declutter_tree::{Orb3D, Octree, BoundingVolume};
//!
//! let mut orbs: Vec<Orb3D> = (0..20).map(|i| Orb3D::new(f64::from(i) * 0.5, 0.0, 0.0, 1.0)).collect();
//! let mut tree = Octree::new(BoundingVolume::enclosing(&orbs).unwrap());
//!
//! for _pass in 0..3 {
//!     tree.rebuild(&orbs);
//!     let mut total = 0;
//!     for slot in 0..orbs.len() {
//!         total += tree.uncollide(&mut orbs, slot, 0.0);
//!     }
//!     if total == 0 {
//!         break;
//!     }
//! }
//! ```
//!
//! ## Degenerate input
//!
//! - Coincident centers are separated along [`Dimension::FALLBACK_DIRECTION`] (+X).
//! - Coincident or zero-size data cannot split cells forever: [`TreeConfig::max_depth`] caps the tree,
//!   and no configuration goes deeper than [`MAX_TREE_DEPTH`].
//! - NaN centers never count as overlapping anything; non-finite radii become [`DEFAULT_RADIUS`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod bounds;
pub mod collision;
pub mod dimension;
pub mod orb;
pub mod tree;

pub use bounds::BoundingVolume;
pub use collision::{Clearance, OVERLAP_TOLERANCE, separation};
pub use dimension::{Dimension, Planar, Spatial};
pub use orb::{DEFAULT_RADIUS, Orb, Orb2D, Orb3D, sanitize_radius};
pub use tree::{MAX_TREE_DEPTH, Octree, PartitionTree, Quadtree, TreeConfig};
