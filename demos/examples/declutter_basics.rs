// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declutter basics.
//!
//! Build a small graph with overlapping nodes, declutter it in 2D, and print the
//! before and after layouts.
//!
//! Run:
//! - `cargo run -p declutter_demos --example declutter_basics`

use declutter_arrange::{ArrangeFlags, GraphStore, MemoryGraph, Parameters, Position, run};

fn main() {
    let mut graph = MemoryGraph::new();
    let mut ids = Vec::new();
    for i in 0..9_u8 {
        let x = f32::from(i % 3) * 0.75;
        let y = f32::from(i / 3) * 0.75;
        // Depth is carried along but never touched by a 2D run.
        ids.push(graph.add_node(Position::new(x, y, f32::from(i)), Some(1.0)));
    }

    let params = Parameters::for_dimension(2)
        .unwrap()
        .with_min_padding(0.5)
        .with_flags(ArrangeFlags::MAINTAIN_MEAN | ArrangeFlags::RECORD_PREVIOUS);

    let mut reports = Vec::new();
    let summary = run(&mut graph, &params, &mut reports, ()).unwrap();
    for r in &reports {
        println!("{}", r.message);
    }
    println!("{summary:?}");

    for id in ids {
        let node = graph.node(id).unwrap();
        let before = node.previous.unwrap();
        println!(
            "{id:?}: ({:6.2}, {:6.2}) -> ({:6.2}, {:6.2}) z={}",
            before.x, before.y, node.position.x, node.position.y, node.position.z
        );
        assert_eq!(graph.position(id).z, before.z, "2D runs keep depth");
    }
    assert!(summary.converged, "nine nodes settle well within the pass cap");
}
