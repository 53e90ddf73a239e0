//! Upstream-to-downstream ordering of a reach.

use std::collections::HashSet;

use hn_core::NodeId;
use hn_graph::NodeAdjacency;
use tracing::debug;

use crate::error::{ChainDefect, LayoutError, LayoutResult};

/// Order `nodes` from the most upstream to the most downstream.
///
/// The selection must be one unbranched reach: exactly one member has no
/// upstream neighbour inside the selection, and following downstream links
/// from it visits every member exactly once. Anything else fails with
/// [`LayoutError::NotASimpleChain`]; no partial ordering is returned.
pub fn sequence<N>(network: &N, nodes: &[NodeId]) -> LayoutResult<Vec<NodeId>>
where
    N: NodeAdjacency + ?Sized,
{
    let members = check_selection(network, nodes)?;
    if members.is_empty() {
        return Err(LayoutError::chain(ChainDefect::Empty));
    }

    let mut sources = nodes.iter().copied().filter(|&id| {
        !network
            .upstream(id)
            .iter()
            .any(|up| members.contains(up))
    });
    let source = match (sources.next(), sources.next()) {
        (Some(only), None) => only,
        (None, _) => return Err(LayoutError::chain(ChainDefect::NoSource)),
        (Some(_), Some(_)) => {
            return Err(LayoutError::chain(ChainDefect::MultipleSources {
                count: 2 + sources.count(),
            }));
        }
    };

    let mut remaining = members.clone();
    remaining.remove(&source);
    let mut ordered = Vec::with_capacity(nodes.len());
    ordered.push(source);

    let mut current = source;
    while let Some(next) = network.downstream(current) {
        if !remaining.remove(&next) {
            break;
        }
        ordered.push(next);
        current = next;
    }

    if !remaining.is_empty() {
        return Err(LayoutError::chain(ChainDefect::Incomplete {
            placed: ordered.len(),
            total: nodes.len(),
        }));
    }
    if let Some(next) = network.downstream(current).filter(|id| members.contains(id)) {
        return Err(LayoutError::chain(ChainDefect::ClosedLoop {
            node: display_id(network, next),
        }));
    }

    debug!(len = ordered.len(), "sequenced reach");
    Ok(ordered)
}

/// Every node on the downstream path from `from` to `to`, both included.
///
/// Handy for turning two picked endpoints into a selection for
/// [`crate::space_evenly`].
pub fn walk_reach<N>(network: &N, from: NodeId, to: NodeId) -> LayoutResult<Vec<NodeId>>
where
    N: NodeAdjacency + ?Sized,
{
    for id in [from, to] {
        if !network.contains(id) {
            return Err(LayoutError::UnknownNode { id });
        }
    }

    let mut path = vec![from];
    let mut seen = HashSet::from([from]);
    let mut current = from;
    while current != to {
        match network.downstream(current) {
            Some(next) if seen.insert(next) => {
                path.push(next);
                current = next;
            }
            _ => {
                return Err(LayoutError::NotDownstream {
                    from: display_id(network, from),
                    to: display_id(network, to),
                });
            }
        }
    }
    Ok(path)
}

/// All ids exist and none repeats; returns the selection as a set.
pub(crate) fn check_selection<N>(network: &N, nodes: &[NodeId]) -> LayoutResult<HashSet<NodeId>>
where
    N: NodeAdjacency + ?Sized,
{
    let mut members = HashSet::with_capacity(nodes.len());
    for &id in nodes {
        if !network.contains(id) {
            return Err(LayoutError::UnknownNode { id });
        }
        if !members.insert(id) {
            return Err(LayoutError::DuplicateNode {
                node: display_id(network, id),
            });
        }
    }
    Ok(members)
}

pub(crate) fn display_id<N>(network: &N, id: NodeId) -> String
where
    N: NodeAdjacency + ?Sized,
{
    network
        .common_id(id)
        .map_or_else(|| id.to_string(), str::to_string)
}
