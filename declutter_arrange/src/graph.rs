// Copyright 2025 the Declutter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host graph seam and an in-memory store.

use alloc::vec::Vec;

/// Node position as stored by the host, in single precision.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Position {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate (depth). Untouched by 2D runs.
    pub z: f32,
}

impl Position {
    /// Create a position.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Which nodes of a graph take part in a run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Every node.
    #[default]
    All,
    /// Only nodes the store reports as selected.
    Selected,
}

/// Read/write access to the node attributes a declutter run needs.
///
/// Nodes are addressed by opaque handles. `node_ids` must return them in a
/// stable order: the run resolves orbs in that order, and the same order gives
/// the same layout.
pub trait GraphStore {
    /// Opaque node handle.
    type NodeId: Copy;

    /// All node handles, in a stable order.
    fn node_ids(&self) -> Vec<Self::NodeId>;

    /// Whether the node is part of the current selection.
    fn is_selected(&self, id: Self::NodeId) -> bool;

    /// Current position.
    fn position(&self, id: Self::NodeId) -> Position;

    /// Overwrite the position.
    fn set_position(&mut self, id: Self::NodeId, position: Position);

    /// Radius attribute, if the node has one.
    fn radius(&self, id: Self::NodeId) -> Option<f32>;

    /// Store the position the node had before the run.
    fn set_previous_position(&mut self, id: Self::NodeId, position: Position);

    /// Participating handles for `scope`, in `node_ids` order.
    fn participants(&self, scope: Scope) -> Vec<Self::NodeId> {
        let mut ids = self.node_ids();
        if scope == Scope::Selected {
            ids.retain(|&id| self.is_selected(id));
        }
        ids
    }
}

/// Handle into a [`MemoryGraph`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(u32);

impl VertexId {
    #[inline]
    fn idx(self) -> usize {
        self.0 as usize
    }
}

/// One node of a [`MemoryGraph`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryNode {
    /// Current position.
    pub position: Position,
    /// Radius attribute; `None` reads as the default radius.
    pub radius: Option<f32>,
    /// Selection state.
    pub selected: bool,
    /// Position recorded by the last run that asked for it.
    pub previous: Option<Position>,
}

/// `Vec`-backed [`GraphStore`].
///
/// Handles are dense indices in insertion order. Reads through a handle from
/// another graph return the origin and no radius; writes through one are ignored.
#[derive(Clone, Debug, Default)]
pub struct MemoryGraph {
    nodes: Vec<MemoryNode>,
}

impl MemoryGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an unselected node and return its handle.
    pub fn add_node(&mut self, position: Position, radius: Option<f32>) -> VertexId {
        self.push(MemoryNode {
            position,
            radius,
            ..MemoryNode::default()
        })
    }

    /// Add a fully specified node and return its handle.
    pub fn push(&mut self, node: MemoryNode) -> VertexId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "graphs beyond u32::MAX nodes are out of scope"
        )]
        let id = VertexId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Node behind `id`.
    pub fn node(&self, id: VertexId) -> Option<&MemoryNode> {
        self.nodes.get(id.idx())
    }

    /// Mutable node behind `id`.
    pub fn node_mut(&mut self, id: VertexId) -> Option<&mut MemoryNode> {
        self.nodes.get_mut(id.idx())
    }

    /// Select or deselect a node.
    pub fn set_selected(&mut self, id: VertexId, selected: bool) {
        if let Some(node) = self.node_mut(id) {
            node.selected = selected;
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in handle order.
    pub fn nodes(&self) -> &[MemoryNode] {
        &self.nodes
    }

    /// Current positions in handle order.
    pub fn positions(&self) -> Vec<Position> {
        self.nodes.iter().map(|n| n.position).collect()
    }
}

impl GraphStore for MemoryGraph {
    type NodeId = VertexId;

    fn node_ids(&self) -> Vec<VertexId> {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "push never hands out an index beyond u32::MAX"
        )]
        (0..self.nodes.len()).map(|i| VertexId(i as u32)).collect()
    }

    fn is_selected(&self, id: VertexId) -> bool {
        self.node(id).is_some_and(|n| n.selected)
    }

    fn position(&self, id: VertexId) -> Position {
        self.node(id).map(|n| n.position).unwrap_or_default()
    }

    fn set_position(&mut self, id: VertexId, position: Position) {
        if let Some(node) = self.node_mut(id) {
            node.position = position;
        }
    }

    fn radius(&self, id: VertexId) -> Option<f32> {
        self.node(id).and_then(|n| n.radius)
    }

    fn set_previous_position(&mut self, id: VertexId, position: Position) {
        if let Some(node) = self.node_mut(id) {
            node.previous = Some(position);
        }
    }
}
