//! Network file schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkFile {
    /// Files written before versioning carry no key and read as 0.
    #[serde(default)]
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<NodeDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeDef {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub kind: NodeKindDef,
    pub x: f64,
    pub y: f64,
    /// Common id of the downstream node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downstream: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum NodeKindDef {
    Confluence,
    Diversion,
    Reservoir,
    StreamGage,
    Well,
    InstreamFlow,
    End,
    Other,
}

impl NetworkFile {
    pub fn node(&self, id: &str) -> Option<&NodeDef> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
