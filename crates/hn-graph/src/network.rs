//! The validated river network and its adjacency contract.

use std::collections::HashMap;

use hn_core::{NodeId, Point};

use crate::error::{GraphError, GraphResult};
use crate::node::{Node, NodeKind, Tracked};

/// Read access to node adjacency, kind and position.
///
/// This is the whole contract the layout operations need from a network.
pub trait NodeAdjacency {
    /// Whether `id` refers to a node in this network.
    fn contains(&self, id: NodeId) -> bool;

    /// Downstream neighbour, if any.
    fn downstream(&self, id: NodeId) -> Option<NodeId>;

    /// Upstream neighbours; empty for unknown ids.
    fn upstream(&self, id: NodeId) -> &[NodeId];

    fn kind(&self, id: NodeId) -> Option<NodeKind>;

    fn position(&self, id: NodeId) -> Option<Point>;

    /// User-facing identifier, for messages.
    fn common_id(&self, id: NodeId) -> Option<&str>;
}

/// Write access to node positions.
pub trait NodePlacement: NodeAdjacency {
    /// Move a node and mark it dirty.
    fn set_position(&mut self, id: NodeId, pos: Point) -> GraphResult<()>;
}

/// A validated river network.
///
/// Nodes are stored by index; `NodeId`s handed out by the builder stay valid
/// for the life of the network. Downstream links are acyclic and each node has
/// at most one.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub(crate) nodes: Vec<Node>,
    pub(crate) by_common_id: HashMap<String, NodeId>,
}

impl Network {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by id (returns None if out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.slot())
    }

    pub fn node_by_common_id(&self, common_id: &str) -> Option<&Node> {
        self.by_common_id
            .get(common_id)
            .and_then(|&id| self.node(id))
    }

    /// Look up the handle for a common id.
    pub fn find(&self, common_id: &str) -> GraphResult<NodeId> {
        self.by_common_id
            .get(common_id)
            .copied()
            .ok_or_else(|| GraphError::UnknownCommonId {
                id: common_id.to_string(),
            })
    }

    /// Resolve a list of common ids, failing on the first unknown one.
    pub fn resolve<S: AsRef<str>>(&self, common_ids: &[S]) -> GraphResult<Vec<NodeId>> {
        common_ids.iter().map(|id| self.find(id.as_ref())).collect()
    }

    /// Nodes with no downstream link.
    pub fn terminals(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.downstream.is_none())
    }

    /// Nodes with no upstream links.
    pub fn headwaters(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.upstream.is_empty())
    }

    pub fn is_dirty(&self) -> bool {
        self.nodes.iter().any(Tracked::is_dirty)
    }

    pub fn dirty_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_dirty())
    }

    /// Forget pending modifications, e.g. after the network was persisted.
    pub fn clear_dirty(&mut self) {
        for node in &mut self.nodes {
            node.clear_dirty();
        }
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> GraphResult<&mut Node> {
        self.nodes
            .get_mut(id.slot())
            .ok_or(GraphError::UnknownNode { id })
    }
}

impl NodeAdjacency for Network {
    fn contains(&self, id: NodeId) -> bool {
        id.slot() < self.nodes.len()
    }

    fn downstream(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.downstream)
    }

    fn upstream(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.upstream.as_slice()).unwrap_or(&[])
    }

    fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.node(id).map(|n| n.kind)
    }

    fn position(&self, id: NodeId) -> Option<Point> {
        self.node(id).map(|n| n.pos)
    }

    fn common_id(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.common_id.as_str())
    }
}

impl NodePlacement for Network {
    fn set_position(&mut self, id: NodeId, pos: Point) -> GraphResult<()> {
        let node = self.node_mut(id)?;
        if !pos.is_finite() {
            return Err(GraphError::NonFinitePosition {
                node: node.common_id.clone(),
            });
        }
        node.place(pos);
        Ok(())
    }
}
