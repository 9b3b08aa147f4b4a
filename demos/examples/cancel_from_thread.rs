// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancel from another thread.
//!
//! A large run is cancelled by a watchdog thread. The graph keeps its original
//! layout because nothing is committed on cancellation.
//!
//! Run:
//! - `cargo run -p declutter_demos --example cancel_from_thread`

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use declutter_arrange::{Error, MemoryGraph, Parameters, Position, run};

fn main() {
    let mut graph = MemoryGraph::new();
    for i in 0..20_000_u32 {
        let x = f32::from(u16::try_from(i % 200).unwrap()) * 0.1;
        let y = f32::from(u16::try_from(i / 200).unwrap()) * 0.1;
        let _ = graph.add_node(Position::new(x, y, 0.0), Some(2.0));
    }
    let before = graph.positions();

    let cancel = AtomicBool::new(false);
    let outcome = thread::scope(|s| {
        let _ = s.spawn(|| {
            thread::sleep(Duration::from_millis(50));
            cancel.store(true, Ordering::Release);
        });
        run(&mut graph, &Parameters::default(), (), &cancel)
    });

    match outcome {
        Err(Error::Cancelled) => {
            assert_eq!(graph.positions(), before, "cancelled runs commit nothing");
            println!("cancelled, layout untouched");
        }
        Ok(summary) => println!("finished before the watchdog fired: {summary:?}"),
        Err(e) => println!("rejected: {e}"),
    }
}
