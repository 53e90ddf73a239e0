//! Network validation logic.

use std::collections::HashSet;

use hn_core::NodeId;

use crate::error::{GraphError, GraphResult};
use crate::node::Node;

/// Common ids are non-empty and unique; positions are finite.
pub(crate) fn validate_nodes(nodes: &[Node]) -> GraphResult<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(nodes.len());
    for (index, node) in nodes.iter().enumerate() {
        if node.common_id.trim().is_empty() {
            return Err(GraphError::EmptyCommonId { index });
        }
        if !seen.insert(node.common_id.as_str()) {
            return Err(GraphError::DuplicateCommonId {
                id: node.common_id.clone(),
            });
        }
        if !node.pos.is_finite() {
            return Err(GraphError::NonFinitePosition {
                node: node.common_id.clone(),
            });
        }
    }
    Ok(())
}

/// Every link endpoint exists, no node links to itself, and no node has two
/// downstream links.
pub(crate) fn validate_links(nodes: &[Node], links: &[(NodeId, NodeId)]) -> GraphResult<()> {
    let mut has_downstream: HashSet<NodeId> = HashSet::with_capacity(links.len());
    for &(up, down) in links {
        for id in [up, down] {
            if id.slot() >= nodes.len() {
                return Err(GraphError::UnknownNode { id });
            }
        }
        if up == down {
            return Err(GraphError::SelfLink {
                node: nodes[up.slot()].common_id.clone(),
            });
        }
        if !has_downstream.insert(up) {
            return Err(GraphError::MultipleDownstream {
                node: nodes[up.slot()].common_id.clone(),
            });
        }
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unseen,
    OnPath,
    Done,
}

/// Downstream links must not loop. Each node has at most one downstream
/// link, so a plain walk from every node finds any cycle.
pub(crate) fn validate_acyclic(nodes: &[Node]) -> GraphResult<()> {
    let mut state = vec![Visit::Unseen; nodes.len()];
    let mut path = Vec::new();

    for start in nodes {
        let mut current = Some(start.id);
        while let Some(id) = current {
            match state[id.slot()] {
                Visit::Done => break,
                Visit::OnPath => {
                    return Err(GraphError::Cycle {
                        node: nodes[id.slot()].common_id.clone(),
                    });
                }
                Visit::Unseen => {
                    state[id.slot()] = Visit::OnPath;
                    path.push(id);
                    current = nodes[id.slot()].downstream;
                }
            }
        }
        for id in path.drain(..) {
            state[id.slot()] = Visit::Done;
        }
    }
    Ok(())
}
