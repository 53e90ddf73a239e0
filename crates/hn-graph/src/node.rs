//! Node data.

use core::fmt;
use core::str::FromStr;

use hn_core::{NodeId, Point};

use crate::error::GraphError;

/// Physical or logical role of a node in the river network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Junction of two tributaries.
    Confluence,
    Diversion,
    Reservoir,
    StreamGage,
    Well,
    InstreamFlow,
    /// Terminal node at the bottom of the network.
    End,
    Other,
}

impl NodeKind {
    pub const ALL: [NodeKind; 8] = [
        NodeKind::Confluence,
        NodeKind::Diversion,
        NodeKind::Reservoir,
        NodeKind::StreamGage,
        NodeKind::Well,
        NodeKind::InstreamFlow,
        NodeKind::End,
        NodeKind::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Confluence => "Confluence",
            NodeKind::Diversion => "Diversion",
            NodeKind::Reservoir => "Reservoir",
            NodeKind::StreamGage => "StreamGage",
            NodeKind::Well => "Well",
            NodeKind::InstreamFlow => "InstreamFlow",
            NodeKind::End => "End",
            NodeKind::Other => "Other",
        }
    }

    pub fn is_confluence(self) -> bool {
        matches!(self, NodeKind::Confluence)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NodeKind {
    type Err = GraphError;

    /// Case-insensitive; also accepts the short codes used by model files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let kind = match trimmed.to_ascii_lowercase().as_str() {
            "confluence" | "con" => NodeKind::Confluence,
            "diversion" | "div" => NodeKind::Diversion,
            "reservoir" | "res" => NodeKind::Reservoir,
            "streamgage" | "stream_gage" | "flo" => NodeKind::StreamGage,
            "well" | "wel" => NodeKind::Well,
            "instreamflow" | "instream_flow" | "isf" => NodeKind::InstreamFlow,
            "end" => NodeKind::End,
            "other" | "oth" => NodeKind::Other,
            _ => {
                return Err(GraphError::UnknownKind {
                    kind: trimmed.to_string(),
                });
            }
        };
        Ok(kind)
    }
}

/// Modification tracking shared by editable entities.
pub trait Tracked {
    fn is_dirty(&self) -> bool;
    fn mark_dirty(&mut self);
    fn clear_dirty(&mut self);
}

/// A vertex of the river network.
///
/// Identity, kind and adjacency are fixed once the network is built; only the
/// diagram position (and with it the dirty flag) can change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) common_id: String,
    pub(crate) name: String,
    pub(crate) kind: NodeKind,
    pub(crate) pos: Point,
    pub(crate) downstream: Option<NodeId>,
    /// Sorted by index.
    pub(crate) upstream: Vec<NodeId>,
    pub(crate) dirty: bool,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn common_id(&self) -> &str {
        &self.common_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn downstream(&self) -> Option<NodeId> {
        self.downstream
    }

    pub fn upstream(&self) -> &[NodeId] {
        &self.upstream
    }

    pub(crate) fn place(&mut self, pos: Point) {
        self.pos = pos;
        self.mark_dirty();
    }
}

impl Tracked for Node {
    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
