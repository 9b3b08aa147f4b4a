// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Centroid bookkeeping for runs that keep the layout in place.

use declutter_tree::Orb;

use crate::rank::Rank;

/// Mean center of the orbs with finite centers, or `None` if there are none.
pub fn centroid<D: Rank>(orbs: &[Orb<D>]) -> Option<[f64; 3]> {
    let mut sum = [0.0_f64; 3];
    let mut count = 0.0_f64;
    for orb in orbs.iter().filter(|o| D::is_finite(o.center())) {
        let c = D::coords(orb.center());
        for (s, v) in sum.iter_mut().zip(c) {
            *s += v;
        }
        count += 1.0;
    }
    if count == 0.0 {
        return None;
    }
    Some(sum.map(|s| s / count))
}

/// Translate every orb so the centroid returns to `target`.
///
/// Returns the shift applied. Nothing moves when the shift is zero or not finite.
pub fn restore_centroid<D: Rank>(orbs: &mut [Orb<D>], target: [f64; 3]) -> [f64; 3] {
    let Some(current) = centroid(orbs) else {
        return [0.0; 3];
    };
    let shift = [
        target[0] - current[0],
        target[1] - current[1],
        target[2] - current[2],
    ];
    if shift == [0.0; 3] || shift.iter().any(|s| !s.is_finite()) {
        return [0.0; 3];
    }
    let by = D::offset(D::from_coords([0.0; 3]), D::from_coords(shift));
    for orb in orbs.iter_mut() {
        orb.set_center(D::translate(orb.center(), by));
    }
    shift
}
