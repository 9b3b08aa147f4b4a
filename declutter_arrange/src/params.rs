// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run configuration: rank, padding, iteration cap, and behavior flags.

use declutter_tree::TreeConfig;

use crate::error::{Error, Result};
use crate::graph::Scope;

/// Padding used when none is configured.
pub const DEFAULT_MIN_PADDING: f64 = 1.0;

/// Pass cap used when none is configured.
pub const DEFAULT_MAX_ITERATIONS: usize = 2000;

/// Which rank to declutter in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dimensions {
    /// Circles in the XY plane; Z is carried through untouched.
    #[default]
    Two,
    /// Spheres in XYZ space.
    Three,
}

impl Dimensions {
    /// Number of axes.
    pub const fn count(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

impl TryFrom<u8> for Dimensions {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(Error::InvalidDimension(other)),
        }
    }
}

bitflags::bitflags! {
    /// Optional behaviors of a run.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ArrangeFlags: u8 {
        /// Translate the result so the participating nodes keep their original centroid.
        const MAINTAIN_MEAN   = 0b0000_0001;
        /// Store each node's pre-run position in the host's previous-position slot.
        const RECORD_PREVIOUS = 0b0000_0010;
        /// Only nodes the host reports as selected take part.
        const SELECTED_ONLY   = 0b0000_0100;
    }
}

impl Default for ArrangeFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Parameters of one declutter run.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameters {
    /// Rank of the layout.
    pub dimension: Dimensions,
    /// Minimum gap enforced between the surfaces of any two orbs.
    pub min_padding: f64,
    /// The run stops after this many passes even if collisions remain.
    pub max_iterations: usize,
    /// Optional behaviors.
    pub flags: ArrangeFlags,
    /// Splitting rules for the per-pass tree.
    pub tree: TreeConfig,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dimension: Dimensions::Two,
            min_padding: DEFAULT_MIN_PADDING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            flags: ArrangeFlags::default(),
            tree: TreeConfig::default(),
        }
    }
}

impl Parameters {
    /// Default parameters for a rank given as a number; anything but 2 or 3 is rejected.
    pub fn for_dimension(dimension: u8) -> Result<Self> {
        Ok(Self::default().with_dimension(Dimensions::try_from(dimension)?))
    }

    /// Set the rank.
    pub fn with_dimension(mut self, dimension: Dimensions) -> Self {
        self.dimension = dimension;
        self
    }

    /// Set the minimum padding.
    pub fn with_min_padding(mut self, min_padding: f64) -> Self {
        self.min_padding = min_padding;
        self
    }

    /// Set the pass cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Replace the flags.
    pub fn with_flags(mut self, flags: ArrangeFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the tree splitting rules.
    pub fn with_tree(mut self, tree: TreeConfig) -> Self {
        self.tree = tree;
        self
    }

    /// Whether the original centroid is restored after the run.
    pub fn maintain_mean(&self) -> bool {
        self.flags.contains(ArrangeFlags::MAINTAIN_MEAN)
    }

    /// Whether pre-run positions are recorded.
    pub fn record_previous(&self) -> bool {
        self.flags.contains(ArrangeFlags::RECORD_PREVIOUS)
    }

    /// Which nodes take part.
    pub fn scope(&self) -> Scope {
        if self.flags.contains(ArrangeFlags::SELECTED_ONLY) {
            Scope::Selected
        } else {
            Scope::All
        }
    }

    /// Reject settings no run can honor. Called before any geometry work.
    pub fn validate(&self) -> Result<()> {
        if !self.min_padding.is_finite() || self.min_padding < 0.0 {
            return Err(Error::InvalidPadding(self.min_padding));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidIterationLimit);
        }
        if !self.tree.is_bounded() {
            return Err(Error::InvalidTreeConfig {
                leaf_capacity: self.tree.leaf_capacity,
                max_depth: self.tree.max_depth,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_run() {
        let p = Parameters::default();
        assert_eq!(p.dimension, Dimensions::Two);
        assert_eq!(p.min_padding, 1.0);
        assert_eq!(p.max_iterations, 2000);
        assert!(!p.maintain_mean());
        assert!(!p.record_previous());
        assert_eq!(p.scope(), Scope::All);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn only_two_and_three_are_dimensions() {
        assert_eq!(Dimensions::try_from(2), Ok(Dimensions::Two));
        assert_eq!(Dimensions::try_from(3), Ok(Dimensions::Three));
        assert_eq!(Dimensions::try_from(1), Err(Error::InvalidDimension(1)));
        assert_eq!(Dimensions::try_from(4), Err(Error::InvalidDimension(4)));
        assert_eq!(Parameters::for_dimension(0), Err(Error::InvalidDimension(0)));
        assert_eq!(Parameters::for_dimension(3).map(|p| p.dimension.count()), Ok(3));
    }

    #[test]
    fn bad_padding_and_zero_cap_are_rejected() {
        let p = Parameters::default();
        assert_eq!(
            p.clone().with_min_padding(-1.0).validate(),
            Err(Error::InvalidPadding(-1.0))
        );
        assert!(p.clone().with_min_padding(f64::NAN).validate().is_err());
        assert!(p.clone().with_min_padding(f64::INFINITY).validate().is_err());
        assert_eq!(
            p.clone().with_max_iterations(0).validate(),
            Err(Error::InvalidIterationLimit)
        );
        assert!(p.with_min_padding(0.0).validate().is_ok());
    }

    #[test]
    fn unbounded_tree_configs_are_rejected() {
        let p = Parameters::default();
        let empty_leaves = TreeConfig {
            leaf_capacity: 0,
            ..TreeConfig::default()
        };
        assert_eq!(
            p.clone().with_tree(empty_leaves).validate(),
            Err(Error::InvalidTreeConfig {
                leaf_capacity: 0,
                max_depth: 16
            })
        );
        let too_deep = TreeConfig {
            max_depth: declutter_tree::MAX_TREE_DEPTH + 1,
            ..TreeConfig::default()
        };
        assert!(p.clone().with_tree(too_deep).validate().is_err());
        let deepest = TreeConfig {
            leaf_capacity: 1,
            max_depth: declutter_tree::MAX_TREE_DEPTH,
        };
        assert!(p.with_tree(deepest).validate().is_ok());
    }

    #[test]
    fn flags_drive_the_accessors() {
        let p = Parameters::default()
            .with_flags(ArrangeFlags::MAINTAIN_MEAN | ArrangeFlags::SELECTED_ONLY);
        assert!(p.maintain_mean());
        assert!(!p.record_previous());
        assert_eq!(p.scope(), Scope::Selected);
    }
}
