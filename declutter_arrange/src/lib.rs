// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=declutter_arrange --heading-base-level=0

//! Declutter Arrange: iterative overlap removal for graph layouts.
//!
//! Nodes are modelled as circles (2D) or spheres (3D) and pushed apart, one pass
//! at a time, until no two of them are closer than their radii plus a padding.
//! The geometry lives in [`declutter_tree`]; this crate drives it.
//!
//! - [`declutter`] runs passes over a slice of orbs until a pass finds no overlap
//!   or the pass cap is reached.
//! - [`run`] does the same for the nodes of a [`GraphStore`], committing positions
//!   only if the run completes.
//! - [`Parameters`] carries the rank, padding, pass cap and [`ArrangeFlags`].
//! - [`Progress`] receives a [`ProgressReport`] after each pass; [`Cancellation`]
//!   is polled right after it.
//!
//! Passes are sequential. Within a pass orbs are resolved in order, each against
//! the current positions of its neighbors, so the same input always produces the
//! same layout.
//!
//! # Example
//!
//! ```rust
//! use declutter_arrange::{ArrangeFlags, GraphStore, MemoryGraph, Parameters, Position, run};
//!
//! let mut graph = MemoryGraph::new();
//! let a = graph.add_node(Position::new(0.0, 0.0, 5.0), Some(1.0));
//! let b = graph.add_node(Position::new(1.0, 0.0, 5.0), Some(1.0));
//!
//! let params = Parameters::for_dimension(2)
//!     .unwrap()
//!     .with_min_padding(0.5)
//!     .with_flags(ArrangeFlags::MAINTAIN_MEAN);
//! let summary = run(&mut graph, &params, (), ()).unwrap();
//! assert!(summary.converged);
//!
//! let (pa, pb) = (graph.position(a), graph.position(b));
//! assert!(pb.x - pa.x >= 2.5);
//! // 2D runs never touch depth.
//! assert_eq!((pa.z, pb.z), (5.0, 5.0));
//! ```
//!
//! Cancellation is cooperative. Any [`Cancellation`] works, including an
//! `AtomicBool` shared with another thread:
//!
//! ```rust
//! use core::sync::atomic::AtomicBool;
//! use declutter_arrange::{Error, MemoryGraph, Parameters, Position, run};
//!
//! let mut graph = MemoryGraph::new();
//! for i in 0..10 {
//!     graph.add_node(Position::new(i as f32 * 0.1, 0.0, 0.0), None);
//! }
//! let before = graph.positions();
//!
//! let cancel = AtomicBool::new(true);
//! let outcome = run(&mut graph, &Parameters::default(), (), &cancel);
//! assert_eq!(outcome, Err(Error::Cancelled));
//! assert_eq!(graph.positions(), before);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arrangement;
mod command;
mod error;
mod graph;
mod mean;
mod params;
mod progress;
mod rank;

pub use arrangement::{Summary, declutter};
pub use command::run;
pub use error::{Error, Result};
pub use graph::{GraphStore, MemoryGraph, MemoryNode, Position, Scope, VertexId};
pub use mean::{centroid, restore_centroid};
pub use params::{
    ArrangeFlags, DEFAULT_MAX_ITERATIONS, DEFAULT_MIN_PADDING, Dimensions, Parameters,
};
pub use progress::{Cancellation, Progress, ProgressReport};
pub use rank::Rank;

pub use declutter_tree::{Orb, Orb2D, Orb3D, Planar, Spatial, TreeConfig};
