//! Conversion between the file schema and the in-memory network.

use std::collections::HashMap;

use hn_core::{NodeId, Point};
use hn_graph::{GraphError, GraphResult, Network, NetworkBuilder, NodeKind};

use crate::ProjectResult;
use crate::migrate::LATEST_VERSION;
use crate::schema::{NetworkFile, NodeDef, NodeKindDef};
use crate::validate::validate_file;

impl From<NodeKindDef> for NodeKind {
    fn from(kind: NodeKindDef) -> Self {
        match kind {
            NodeKindDef::Confluence => NodeKind::Confluence,
            NodeKindDef::Diversion => NodeKind::Diversion,
            NodeKindDef::Reservoir => NodeKind::Reservoir,
            NodeKindDef::StreamGage => NodeKind::StreamGage,
            NodeKindDef::Well => NodeKind::Well,
            NodeKindDef::InstreamFlow => NodeKind::InstreamFlow,
            NodeKindDef::End => NodeKind::End,
            NodeKindDef::Other => NodeKind::Other,
        }
    }
}

impl From<NodeKind> for NodeKindDef {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Confluence => NodeKindDef::Confluence,
            NodeKind::Diversion => NodeKindDef::Diversion,
            NodeKind::Reservoir => NodeKindDef::Reservoir,
            NodeKind::StreamGage => NodeKindDef::StreamGage,
            NodeKind::Well => NodeKindDef::Well,
            NodeKind::InstreamFlow => NodeKindDef::InstreamFlow,
            NodeKind::End => NodeKindDef::End,
            NodeKind::Other => NodeKindDef::Other,
        }
    }
}

/// Build a validated network from a file. Node handles follow file order.
pub fn to_network(file: &NetworkFile) -> ProjectResult<Network> {
    validate_file(file)?;

    let mut builder = NetworkBuilder::new();
    for node in &file.nodes {
        builder.add_node(
            node.id.as_str(),
            node.name.as_str(),
            node.kind.into(),
            Point::new(node.x, node.y),
        )?;
    }
    let network = link(builder, file)?;
    Ok(network)
}

fn link(mut builder: NetworkBuilder, file: &NetworkFile) -> GraphResult<Network> {
    let index: HashMap<&str, usize> = file
        .nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.as_str(), i))
        .collect();
    let handle = |i: usize| {
        u32::try_from(i)
            .ok()
            .and_then(NodeId::from_index)
            .ok_or(GraphError::Capacity { count: i })
    };

    for (i, node) in file.nodes.iter().enumerate() {
        if let Some(down) = &node.downstream {
            let j = index
                .get(down.as_str())
                .copied()
                .ok_or_else(|| GraphError::UnknownCommonId { id: down.clone() })?;
            builder.connect(handle(i)?, handle(j)?);
        }
    }
    builder.build()
}

/// Write every node of `network` into a fresh file.
pub fn from_network(name: impl Into<String>, network: &Network) -> NetworkFile {
    let nodes = network
        .nodes()
        .iter()
        .map(|node| NodeDef {
            id: node.common_id().to_string(),
            name: node.name().to_string(),
            kind: node.kind().into(),
            x: node.pos().x,
            y: node.pos().y,
            downstream: node
                .downstream()
                .and_then(|d| network.node(d))
                .map(|d| d.common_id().to_string()),
        })
        .collect();
    NetworkFile {
        version: LATEST_VERSION,
        name: name.into(),
        nodes,
    }
}

/// Copy node positions from `network` back into `file`, leaving every other
/// field alone. Returns how many entries changed.
pub fn store_positions(file: &mut NetworkFile, network: &Network) -> usize {
    let mut changed = 0;
    for def in &mut file.nodes {
        if let Some(node) = network.node_by_common_id(&def.id) {
            let pos = node.pos();
            if def.x != pos.x || def.y != pos.y {
                def.x = pos.x;
                def.y = pos.y;
                changed += 1;
            }
        }
    }
    changed
}
