//! Error types for the hn-app service layer.

use std::path::PathBuf;

use hn_layout::LayoutError;

/// Application error type that wraps errors from the backend crates and
/// gives front ends one interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to read network file: {path}")]
    NetworkFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Network error: {0}")]
    Graph(String),

    #[error("The selected nodes must form a single reach with no branches ({0})")]
    NotAReach(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for hn-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<hn_project::ProjectError> for AppError {
    fn from(err: hn_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<hn_graph::GraphError> for AppError {
    fn from(err: hn_graph::GraphError) -> Self {
        AppError::Graph(err.to_string())
    }
}

impl From<LayoutError> for AppError {
    fn from(err: LayoutError) -> Self {
        match err {
            LayoutError::NotASimpleChain { defect } => AppError::NotAReach(defect.to_string()),
            LayoutError::Graph(inner) => inner.into(),
            other => AppError::Layout(other.to_string()),
        }
    }
}
