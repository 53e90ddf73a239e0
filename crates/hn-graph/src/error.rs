//! Network construction and editing errors.

use hn_core::NodeId;
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node at index {index} has an empty common id")]
    EmptyCommonId { index: usize },

    #[error("Duplicate node id: {id}")]
    DuplicateCommonId { id: String },

    #[error("Node {id} does not exist in this network")]
    UnknownNode { id: NodeId },

    #[error("No node with id '{id}'")]
    UnknownCommonId { id: String },

    #[error("Unknown node kind '{kind}'")]
    UnknownKind { kind: String },

    #[error("Node '{node}' has more than one downstream link")]
    MultipleDownstream { node: String },

    #[error("Node '{node}' links downstream to itself")]
    SelfLink { node: String },

    #[error("Downstream links form a cycle through node '{node}'")]
    Cycle { node: String },

    #[error("Node '{node}' has a non-finite position")]
    NonFinitePosition { node: String },

    #[error("Network is full ({count} nodes)")]
    Capacity { count: usize },

    #[error("Snapshot covers {expected} nodes but the network has {actual}")]
    SnapshotMismatch { expected: usize, actual: usize },
}
