// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graph-level entry point: snapshot, declutter, commit.

use alloc::vec::Vec;

use declutter_tree::{Orb, Planar, Spatial, sanitize_radius};

use crate::arrangement::{Precision, Summary, resolve};
use crate::error::Result;
use crate::graph::{GraphStore, Position};
use crate::params::{Dimensions, Parameters};
use crate::progress::{Cancellation, Progress};
use crate::rank::Rank;

/// Declutter the participating nodes of `graph` in place.
///
/// Participants are taken from [`Parameters::scope`] in [`GraphStore::node_ids`]
/// order. Each becomes an orb at its current position with its radius attribute
/// (or the default radius). Positions are written back only when the run
/// succeeds: on [`Error::Cancelled`](crate::Error::Cancelled) or a rejected
/// configuration the graph is left exactly as it was.
///
/// With [`ArrangeFlags::RECORD_PREVIOUS`](crate::ArrangeFlags::RECORD_PREVIOUS)
/// each node's pre-run position is stored before its new one is written.
/// In 2D runs the Z attribute is written back bit for bit.
///
/// Centers are settled on values the `f32` attributes hold exactly, so a
/// converged layout read back from the graph is still free of collisions and a
/// second run over it changes nothing.
pub fn run<G, P, C>(graph: &mut G, params: &Parameters, progress: P, cancel: C) -> Result<Summary>
where
    G: GraphStore,
    P: Progress,
    C: Cancellation,
{
    params.validate()?;
    match params.dimension {
        Dimensions::Two => run_in::<Planar, _, _, _>(graph, params, progress, cancel),
        Dimensions::Three => run_in::<Spatial, _, _, _>(graph, params, progress, cancel),
    }
}

fn run_in<D, G, P, C>(graph: &mut G, params: &Parameters, progress: P, cancel: C) -> Result<Summary>
where
    D: Rank,
    G: GraphStore,
    P: Progress,
    C: Cancellation,
{
    let ids = graph.participants(params.scope());
    let originals: Vec<Position> = ids.iter().map(|&id| graph.position(id)).collect();
    let mut orbs: Vec<Orb<D>> = ids
        .iter()
        .zip(&originals)
        .map(|(&id, &position)| {
            let radius = sanitize_radius(graph.radius(id).map(f64::from));
            Orb::from_center(D::project(position), radius)
        })
        .collect();

    let summary = resolve(&mut orbs, params, progress, cancel, Precision::Single)?;

    let record = params.record_previous();
    for ((&id, &original), orb) in ids.iter().zip(&originals).zip(&orbs) {
        if record {
            graph.set_previous_position(id, original);
        }
        graph.set_position(id, D::unproject(orb.center(), original));
    }
    Ok(summary)
}
