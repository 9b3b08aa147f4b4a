// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Progress reporting and cooperative cancellation seams.
//!
//! Both are polled by the driver exactly once per pass: progress first, then
//! cancellation. Neither blocks.

use alloc::string::String;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicBool, Ordering};

/// One progress update, emitted after each pass.
///
/// `resolved` is `peak - collisions`, where `peak` is the largest collision
/// count seen so far in the run. `peak` never decreases across a run, so
/// `resolved / peak` reads as a fraction even though raw collision counts jump
/// around from pass to pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressReport {
    /// 1-based pass number.
    pub iteration: usize,
    /// Collisions resolved so far, relative to the peak.
    pub resolved: usize,
    /// Largest per-pass collision count so far.
    pub peak: usize,
    /// Human-readable status.
    pub message: String,
    /// Set while there is nothing to measure against (no collision seen yet).
    pub indeterminate: bool,
}

/// Sink for progress updates.
pub trait Progress {
    /// Receive one update.
    fn report(&mut self, report: &ProgressReport);
}

/// Discards updates.
impl Progress for () {
    fn report(&mut self, _report: &ProgressReport) {}
}

/// Records every update in order.
impl Progress for Vec<ProgressReport> {
    fn report(&mut self, report: &ProgressReport) {
        self.push(report.clone());
    }
}

impl<P: Progress + ?Sized> Progress for &mut P {
    fn report(&mut self, report: &ProgressReport) {
        (**self).report(report);
    }
}

/// Cooperative cancellation signal.
pub trait Cancellation {
    /// Whether the run should stop at the next pass boundary.
    fn is_cancelled(&self) -> bool;
}

/// Never cancels.
impl Cancellation for () {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Cancels once the flag is set, typically from another thread.
impl Cancellation for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

impl<C: Cancellation + ?Sized> Cancellation for &C {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}
