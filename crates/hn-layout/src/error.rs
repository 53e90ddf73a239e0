//! Layout error types.

use hn_core::NodeId;
use hn_graph::GraphError;
use thiserror::Error;

pub type LayoutResult<T> = Result<T, LayoutError>;

/// Why a selection is not a single unbranched reach.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainDefect {
    #[error("no nodes selected")]
    Empty,

    #[error("every selected node has an upstream neighbour in the selection")]
    NoSource,

    #[error("{count} selected nodes have no upstream neighbour in the selection")]
    MultipleSources { count: usize },

    #[error("only {placed} of {total} nodes lie on one downstream path")]
    Incomplete { placed: usize, total: usize },

    #[error("the reach loops back on itself at '{node}'")]
    ClosedLoop { node: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Nodes must form a single reach with no branches: {defect}")]
    NotASimpleChain { defect: ChainDefect },

    #[error("Node {id} does not exist in this network")]
    UnknownNode { id: NodeId },

    #[error("Node '{node}' is selected more than once")]
    DuplicateNode { node: String },

    #[error("Node '{to}' is not downstream of '{from}'")]
    NotDownstream { from: String, to: String },

    #[error("Computed a non-finite position for node '{node}'")]
    NonFinite { node: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl LayoutError {
    pub(crate) fn chain(defect: ChainDefect) -> Self {
        LayoutError::NotASimpleChain { defect }
    }

    pub fn is_not_a_simple_chain(&self) -> bool {
        matches!(self, LayoutError::NotASimpleChain { .. })
    }
}
