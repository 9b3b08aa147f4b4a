// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Octree clusters.
//!
//! Drive the 3D declutter directly on a slice of spheres, watching progress and
//! the tree shape of the first pass.
//!
//! Run:
//! - `cargo run -p declutter_demos --example octree_clusters`

use declutter_arrange::{Parameters, Progress, ProgressReport, declutter};
use declutter_tree::{BoundingVolume, Octree, Orb3D};

/// Prints every tenth report.
struct Every10;

impl Progress for Every10 {
    fn report(&mut self, report: &ProgressReport) {
        if report.iteration % 10 == 1 {
            println!("{}", report.message);
        }
    }
}

fn main() {
    let mut spheres = Vec::new();
    for cluster in 0..4_u8 {
        let base = f64::from(cluster) * 20.0;
        for i in 0..64_u8 {
            spheres.push(Orb3D::new(
                base + f64::from(i % 4) * 0.2,
                f64::from((i / 4) % 4) * 0.2,
                f64::from(i / 16) * 0.2,
                1.0,
            ));
        }
    }

    let mut tree = Octree::new(BoundingVolume::enclosing(&spheres).unwrap());
    let _ = tree.rebuild(&spheres);
    println!("{tree:?}, depth {}", tree.depth());

    let params = Parameters::default().with_min_padding(0.25);
    let summary = declutter(&mut spheres, &params, Every10, ()).unwrap();
    println!(
        "{} passes, peak {} collisions, converged: {}",
        summary.iterations, summary.peak, summary.converged
    );
}
