//! Incremental network builder.

use std::collections::HashMap;

use hn_core::{NodeId, Point};
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::network::Network;
use crate::node::{Node, NodeKind};
use crate::validate;

/// Builder for constructing a network incrementally.
///
/// Use `add_node` and `connect` to describe the network, then call `build()`
/// to validate it and derive upstream adjacency.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    nodes: Vec<Node>,
    links: Vec<(NodeId, NodeId)>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its handle.
    pub fn add_node(
        &mut self,
        common_id: impl Into<String>,
        name: impl Into<String>,
        kind: NodeKind,
        pos: Point,
    ) -> GraphResult<NodeId> {
        let id = u32::try_from(self.nodes.len())
            .ok()
            .and_then(NodeId::from_index)
            .ok_or(GraphError::Capacity {
                count: self.nodes.len(),
            })?;
        self.nodes.push(Node {
            id,
            common_id: common_id.into(),
            name: name.into(),
            kind,
            pos,
            downstream: None,
            upstream: Vec::new(),
            dirty: false,
        });
        Ok(id)
    }

    /// Record that water flows from `upstream` into `downstream`.
    ///
    /// Links are checked in `build()`.
    pub fn connect(&mut self, upstream: NodeId, downstream: NodeId) {
        self.links.push((upstream, downstream));
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Validate and freeze the network.
    pub fn build(self) -> GraphResult<Network> {
        let Self { mut nodes, links } = self;

        validate::validate_nodes(&nodes)?;
        validate::validate_links(&nodes, &links)?;

        for &(up, down) in &links {
            nodes[up.slot()].downstream = Some(down);
            nodes[down.slot()].upstream.push(up);
        }
        for node in &mut nodes {
            node.upstream.sort_unstable();
        }

        validate::validate_acyclic(&nodes)?;

        let by_common_id: HashMap<String, NodeId> = nodes
            .iter()
            .map(|n| (n.common_id.clone(), n.id))
            .collect();

        debug!(nodes = nodes.len(), links = links.len(), "network built");

        Ok(Network {
            nodes,
            by_common_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NodeAdjacency;

    #[test]
    fn builder_basic() {
        let mut builder = NetworkBuilder::new();
        let n1 = builder
            .add_node("N1", "Node1", NodeKind::Diversion, Point::default())
            .unwrap();
        let n2 = builder
            .add_node("N2", "Node2", NodeKind::End, Point::default())
            .unwrap();
        builder.connect(n1, n2);

        assert_eq!(n1.index(), 0);
        assert_eq!(n2.index(), 1);
        assert_eq!(builder.node_count(), 2);
        assert_eq!(builder.links.len(), 1);
    }

    #[test]
    fn upstream_is_derived_and_sorted() {
        let mut builder = NetworkBuilder::new();
        let conf = builder
            .add_node("C", "Confluence", NodeKind::Confluence, Point::default())
            .unwrap();
        let left = builder
            .add_node("L", "Left fork", NodeKind::StreamGage, Point::default())
            .unwrap();
        let right = builder
            .add_node("R", "Right fork", NodeKind::StreamGage, Point::default())
            .unwrap();
        // Connect in reverse index order; upstream lists come out sorted anyway.
        builder.connect(right, conf);
        builder.connect(left, conf);

        let net = builder.build().unwrap();
        assert_eq!(net.upstream(conf), &[left, right]);
        assert_eq!(net.downstream(left), Some(conf));
        assert_eq!(net.downstream(right), Some(conf));
        assert_eq!(net.downstream(conf), None);
    }

    #[test]
    fn empty_network_builds() {
        let net = NetworkBuilder::new().build().unwrap();
        assert!(net.is_empty());
    }
}
