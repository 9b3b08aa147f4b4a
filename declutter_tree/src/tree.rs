// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena-backed region tree: a quadtree for [`Planar`] and an octree for [`Spatial`].
//!
//! The tree is meant to be rebuilt every declutter iteration. [`PartitionTree::reset`]
//! keeps the cell arena (and each cell's item buffer) allocated, so after the
//! first iteration a rebuild does not allocate unless the tree grows deeper.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::bounds::BoundingVolume;
use crate::collision::{Clearance, separation};
use crate::dimension::{Dimension, Planar, Spatial};
use crate::orb::Orb;

/// Deepest level a [`TreeConfig`] may ask for. Deeper requests are clamped.
pub const MAX_TREE_DEPTH: u32 = 32;

/// Tuning for cell splitting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TreeConfig {
    /// A leaf holding more than this many orbs splits.
    pub leaf_capacity: usize,
    /// Cells at this depth never split, whatever they hold.
    ///
    /// This is what stops coincident or zero-size data from splitting forever.
    pub max_depth: u32,
}

impl TreeConfig {
    /// Whether splitting under this configuration is bounded as configured:
    /// leaves hold at least one orb and depth is within [`MAX_TREE_DEPTH`].
    pub const fn is_bounded(&self) -> bool {
        self.leaf_capacity > 0 && self.max_depth <= MAX_TREE_DEPTH
    }

    /// The configuration actually used by a tree: capacity at least 1, depth at
    /// most [`MAX_TREE_DEPTH`].
    pub fn clamped(self) -> Self {
        Self {
            leaf_capacity: self.leaf_capacity.max(1),
            max_depth: self.max_depth.min(MAX_TREE_DEPTH),
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            leaf_capacity: 8,
            max_depth: 16,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct CellIdx(usize);

impl CellIdx {
    const ROOT: Self = Self(0);

    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

struct Cell<D: Dimension> {
    bounds: BoundingVolume<D>,
    depth: u32,
    /// Children occupy `first..first + D::SPLIT_COUNT` in the arena.
    first_child: Option<CellIdx>,
    /// Orb slots with the center they were inserted at. Empty once split.
    items: Vec<(usize, D::Point)>,
}

/// Spatial partition over orb centers, with in-place overlap resolution.
///
/// Orbs are referred to by their index ("slot") in the caller's orb slice.
/// The tree remembers where each center was when inserted; overlap tests in
/// [`uncollide`](Self::uncollide) always use the caller's current positions.
pub struct PartitionTree<D: Dimension> {
    config: TreeConfig,
    cells: Vec<Cell<D>>,
    live: usize,
    len: usize,
    max_radius: f64,
    stack: Vec<CellIdx>,
}

impl<D: Dimension> PartitionTree<D> {
    /// Create an empty tree over `bounds` with the default [`TreeConfig`].
    pub fn new(bounds: BoundingVolume<D>) -> Self {
        Self::with_config(bounds, TreeConfig::default())
    }

    /// Create an empty tree over `bounds`.
    ///
    /// `config` is [clamped](TreeConfig::clamped) so splitting always terminates.
    pub fn with_config(bounds: BoundingVolume<D>, config: TreeConfig) -> Self {
        let mut tree = Self {
            config: config.clamped(),
            cells: Vec::new(),
            live: 0,
            len: 0,
            max_radius: 0.0,
            stack: Vec::new(),
        };
        tree.reset(bounds);
        tree
    }

    /// Empty the tree and give it a new root region, keeping allocations.
    pub fn reset(&mut self, bounds: BoundingVolume<D>) {
        self.live = 0;
        self.len = 0;
        self.max_radius = 0.0;
        let _ = self.alloc_cell(bounds, 0);
    }

    /// Reset over the volume enclosing `orbs` and insert all of them.
    ///
    /// Returns the volume used, or `None` (leaving the tree untouched) if `orbs` is empty.
    pub fn rebuild(&mut self, orbs: &[Orb<D>]) -> Option<BoundingVolume<D>> {
        let bounds = BoundingVolume::enclosing(orbs)?;
        self.reset(bounds);
        for (slot, orb) in orbs.iter().enumerate() {
            self.insert(slot, orb);
        }
        Some(bounds)
    }

    /// Insert the orb at `slot`.
    ///
    /// Descends by child region of the orb's center. A leaf over capacity splits
    /// and redistributes its orbs. Centers outside the root region are kept in the
    /// border cell their comparisons lead to.
    pub fn insert(&mut self, slot: usize, orb: &Orb<D>) {
        let center = orb.center();
        self.max_radius = self.max_radius.max(orb.reach());
        self.len += 1;

        let mut idx = CellIdx::ROOT;
        while let Some(first) = self.cells[idx.get()].first_child {
            let mid = self.cells[idx.get()].bounds.center();
            idx = CellIdx::new(first.get() + D::child_index(mid, center));
        }
        let cell = &mut self.cells[idx.get()];
        cell.items.push((slot, center));
        if cell.items.len() > self.config.leaf_capacity && cell.depth < self.config.max_depth {
            self.split(idx);
        }
    }

    /// Push the orb at `slot` clear of every neighbor it overlaps.
    ///
    /// Neighbors are gathered from cells intersecting a box around the orb that
    /// is wide enough to reach any orb in the tree (`radius + largest radius +
    /// padding`). Every neighbor closer than `radius + other radius + padding`
    /// to the orb's center *as it was when the call started* contributes a push
    /// directly away from it by the missing distance (plus the clearance
    /// margin), and the orb is moved by the sum of those pushes.
    ///
    /// Measuring every neighbor from the starting center means the orb may end
    /// up overlapping a neighbor it was tangent to. That neighbor then sees the
    /// overlap in its own turn and moves, so crowding spreads outward instead of
    /// settling into a pass where pushes cancel and nobody moves.
    ///
    /// `clearance` accepts a plain padding (`f64`) or a [`Clearance`].
    /// Returns the number of overlaps corrected. Only `orbs[slot]` is modified.
    pub fn uncollide(
        &mut self,
        orbs: &mut [Orb<D>],
        slot: usize,
        clearance: impl Into<Clearance>,
    ) -> usize {
        let clearance = clearance.into();
        let Some(orb) = orbs.get(slot).copied() else {
            return 0;
        };
        let reach = orb.reach();
        let start = orb.center();
        let region = BoundingVolume::around(start, reach + self.max_radius + clearance.padding);

        let mut center = start;
        let mut collisions = 0;
        let neighbors: &[Orb<D>] = orbs;
        self.visit(&region, |other| {
            if other == slot {
                return;
            }
            let Some(neighbor) = neighbors.get(other) else {
                return;
            };
            let required = reach + neighbor.reach() + clearance.padding;
            if let Some(push) =
                separation::<D>(start, neighbor.center(), required, clearance.margin)
            {
                center = D::translate(center, push);
                collisions += 1;
            }
        });
        if collisions > 0 {
            orbs[slot].set_center(center);
        }
        collisions
    }

    /// Collect the slots held by cells intersecting `region`, in tree order.
    ///
    /// This is a candidate set: the orbs themselves may lie outside `region`.
    pub fn query(&mut self, region: &BoundingVolume<D>, out: &mut Vec<usize>) {
        self.visit(region, |slot| out.push(slot));
    }

    /// Number of orbs inserted since the last reset.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no orb was inserted since the last reset.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Root region.
    pub fn bounds(&self) -> BoundingVolume<D> {
        self.cells[CellIdx::ROOT.get()].bounds
    }

    /// Largest orb radius inserted since the last reset.
    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// Cells in use (root included).
    pub fn cell_count(&self) -> usize {
        self.live
    }

    /// Deepest cell in use.
    pub fn depth(&self) -> u32 {
        self.cells[..self.live]
            .iter()
            .map(|c| c.depth)
            .max()
            .unwrap_or(0)
    }

    /// Splitting configuration.
    pub fn config(&self) -> TreeConfig {
        self.config
    }

    fn alloc_cell(&mut self, bounds: BoundingVolume<D>, depth: u32) -> CellIdx {
        let idx = CellIdx::new(self.live);
        if let Some(cell) = self.cells.get_mut(self.live) {
            cell.bounds = bounds;
            cell.depth = depth;
            cell.first_child = None;
            cell.items.clear();
        } else {
            self.cells.push(Cell {
                bounds,
                depth,
                first_child: None,
                items: Vec::new(),
            });
        }
        self.live += 1;
        idx
    }

    fn split(&mut self, idx: CellIdx) {
        let mut pending = Some(idx);
        while let Some(parent) = pending.take() {
            let (bounds, depth) = {
                let cell = &self.cells[parent.get()];
                (cell.bounds, cell.depth)
            };
            let first = CellIdx::new(self.live);
            for i in 0..D::SPLIT_COUNT {
                let _ = self.alloc_cell(bounds.child(i), depth + 1);
            }

            let mid = bounds.center();
            let mut items = core::mem::take(&mut self.cells[parent.get()].items);
            for &(slot, center) in &items {
                let child = first.get() + D::child_index(mid, center);
                self.cells[child].items.push((slot, center));
            }
            items.clear();
            let cell = &mut self.cells[parent.get()];
            cell.items = items;
            cell.first_child = Some(first);

            // All items may have landed in one child; keep splitting that one.
            if depth + 1 < self.config.max_depth {
                pending = (0..D::SPLIT_COUNT)
                    .map(|i| CellIdx::new(first.get() + i))
                    .find(|c| self.cells[c.get()].items.len() > self.config.leaf_capacity);
            }
        }
    }

    fn visit(&mut self, region: &BoundingVolume<D>, mut f: impl FnMut(usize)) {
        self.stack.clear();
        if self.live == 0 {
            return;
        }
        self.stack.push(CellIdx::ROOT);
        while let Some(idx) = self.stack.pop() {
            let cell = &self.cells[idx.get()];
            if !cell.bounds.intersects(region) {
                continue;
            }
            match cell.first_child {
                Some(first) => {
                    for i in (0..D::SPLIT_COUNT).rev() {
                        self.stack.push(CellIdx::new(first.get() + i));
                    }
                }
                None => {
                    for &(slot, _) in &cell.items {
                        f(slot);
                    }
                }
            }
        }
    }
}

impl<D: Dimension> Debug for PartitionTree<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PartitionTree")
            .field("config", &self.config)
            .field("bounds", &self.bounds())
            .field("len", &self.len)
            .field("cells", &self.live)
            .field("arena_capacity", &self.cells.len())
            .field("max_radius", &self.max_radius)
            .finish_non_exhaustive()
    }
}

/// Region tree with four children per split, over circles.
pub type Quadtree = PartitionTree<Planar>;

/// Region tree with eight children per split, over spheres.
pub type Octree = PartitionTree<Spatial>;
