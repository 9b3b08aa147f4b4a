// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The iteration driver.
//!
//! Each pass rebuilds the tree over the current centers and resolves every orb
//! once, in slot order. Resolution is sequential and in place: an orb resolved
//! later in a pass sees the displacements of every orb resolved before it.
//! Within one orb's turn, every neighbor is measured from the center the orb
//! had when its turn began.

use alloc::format;

use declutter_tree::{BoundingVolume, Clearance, Orb, PartitionTree};

use crate::error::{Error, Result};
use crate::mean::{centroid, restore_centroid};
use crate::params::Parameters;
use crate::progress::{Cancellation, Progress, ProgressReport};
use crate::rank::Rank;

/// Outcome of a run that was not cancelled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Passes executed.
    pub iterations: usize,
    /// Collisions counted in the last pass. Zero when converged.
    pub collisions: usize,
    /// Largest per-pass collision count of the run.
    pub peak: usize,
    /// Whether the last pass found nothing to resolve.
    pub converged: bool,
}

impl Summary {
    /// Collisions resolved relative to the peak, as last reported.
    pub fn resolved(&self) -> usize {
        self.peak - self.collisions
    }
}

/// Storage the final centers have to survive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Precision {
    /// Centers stay `f64`.
    Double,
    /// Centers are written to `f32` host attributes.
    ///
    /// Pushes overshoot by a margin larger than `f32` rounding at the layout's
    /// scale, and centers are snapped to `f32` after every pass that moved
    /// something. The pass that finds no collision therefore sees exactly the
    /// values the host will store.
    Single,
}

/// Overshoot per unit of coordinate magnitude for [`Precision::Single`].
///
/// Snapping moves each coordinate by at most half an `f32` ulp, so a center
/// distance changes by less than `sqrt(3) * f32::EPSILON` times the largest
/// coordinate.
const SINGLE_PRECISION_SLACK: f64 = 4.0 * f32::EPSILON as f64;

/// Push `orbs` apart until no two overlap (with `min_padding` between them) or
/// `max_iterations` passes have run.
///
/// The rank comes from `D`; `params.dimension` is only consulted by
/// [`run`](crate::run). `progress` receives one report per pass, then `cancel`
/// is polled once. A raised cancellation ends the run with [`Error::Cancelled`],
/// leaving `orbs` as the interrupted pass left them. Reaching the pass cap is
/// not an error: see [`Summary::converged`].
pub fn declutter<D, P, C>(
    orbs: &mut [Orb<D>],
    params: &Parameters,
    progress: P,
    cancel: C,
) -> Result<Summary>
where
    D: Rank,
    P: Progress,
    C: Cancellation,
{
    resolve(orbs, params, progress, cancel, Precision::Double)
}

pub(crate) fn resolve<D, P, C>(
    orbs: &mut [Orb<D>],
    params: &Parameters,
    mut progress: P,
    cancel: C,
    precision: Precision,
) -> Result<Summary>
where
    D: Rank,
    P: Progress,
    C: Cancellation,
{
    params.validate()?;
    let span = tracing::debug_span!(
        "declutter",
        nodes = orbs.len(),
        dimension = D::DIMENSIONS.count()
    );
    let _guard = span.enter();

    let Some(bounds) = BoundingVolume::enclosing(orbs) else {
        tracing::debug!("nothing to declutter");
        return Ok(Summary {
            converged: true,
            ..Summary::default()
        });
    };

    let original_mean = if params.maintain_mean() {
        centroid(orbs)
    } else {
        None
    };

    let mut tree = PartitionTree::<D>::with_config(bounds, params.tree);
    let mut summary = Summary::default();
    for iteration in 1..=params.max_iterations {
        let mut clearance = Clearance::new(params.min_padding);
        if let Some(bounds) = tree.rebuild(orbs) {
            if precision == Precision::Single {
                clearance = clearance.with_margin(single_precision_margin(&bounds));
            }
        }
        let mut collisions = 0;
        for slot in 0..orbs.len() {
            collisions += tree.uncollide(orbs, slot, clearance);
        }
        if collisions > 0 && precision == Precision::Single {
            for orb in orbs.iter_mut() {
                orb.set_center(D::snap(orb.center()));
            }
        }
        summary.iterations = iteration;
        summary.collisions = collisions;
        summary.peak = summary.peak.max(collisions);
        tracing::trace!(iteration, collisions, peak = summary.peak, "pass");

        progress.report(&report(&summary));

        if cancel.is_cancelled() {
            tracing::debug!(iteration, collisions, "cancelled");
            return Err(Error::Cancelled);
        }
        if collisions == 0 {
            summary.converged = true;
            break;
        }
    }

    if let Some(target) = original_mean {
        let shift = restore_centroid(orbs, target);
        tracing::trace!(?shift, "centroid restored");
    }

    if summary.converged {
        tracing::debug!(
            iterations = summary.iterations,
            peak = summary.peak,
            "converged"
        );
    } else {
        tracing::debug!(
            iterations = summary.iterations,
            collisions = summary.collisions,
            peak = summary.peak,
            "iteration cap reached"
        );
    }
    Ok(summary)
}

fn single_precision_margin<D: Rank>(bounds: &BoundingVolume<D>) -> f64 {
    let magnitude = D::coords(bounds.min)
        .into_iter()
        .chain(D::coords(bounds.max))
        .fold(1.0_f64, |m, c| m.max(c).max(-c));
    let margin = SINGLE_PRECISION_SLACK * magnitude;
    if margin.is_finite() { margin } else { 0.0 }
}

fn report(summary: &Summary) -> ProgressReport {
    let resolved = summary.resolved();
    let message = if summary.peak == 0 {
        format!("Pass {}: no collisions", summary.iterations)
    } else {
        format!(
            "Pass {}: resolved {resolved} of {} collisions",
            summary.iterations, summary.peak
        )
    };
    ProgressReport {
        iteration: summary.iterations,
        resolved,
        peak: summary.peak,
        message,
        indeterminate: summary.peak == 0,
    }
}
