//! hn-project: network file format, migration and validation.

pub mod convert;
pub mod migrate;
pub mod schema;
pub mod validate;

use std::path::Path;

use tracing::info;

pub use convert::{from_network, store_positions, to_network};
pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use validate::{ValidationError, validate_file};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("Network error: {0}")]
    Graph(#[from] hn_graph::GraphError),

    #[error("Unsupported file extension: {path}")]
    UnknownFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encoding of a network file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Pick the format from a file extension: `.json` is JSON, `.yaml`/`.yml`
    /// are YAML.
    pub fn from_path(path: &Path) -> ProjectResult<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(ProjectError::UnknownFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

pub fn load_yaml(path: &Path) -> ProjectResult<NetworkFile> {
    let content = std::fs::read_to_string(path)?;
    let file: NetworkFile = serde_yaml::from_str(&content)?;
    finish_load(path, file)
}

pub fn save_yaml(path: &Path, file: &NetworkFile) -> ProjectResult<()> {
    validate_file(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    info!(path = %path.display(), nodes = file.nodes.len(), "saved network");
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<NetworkFile> {
    let content = std::fs::read_to_string(path)?;
    let file: NetworkFile = serde_json::from_str(&content)?;
    finish_load(path, file)
}

pub fn save_json(path: &Path, file: &NetworkFile) -> ProjectResult<()> {
    validate_file(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    info!(path = %path.display(), nodes = file.nodes.len(), "saved network");
    Ok(())
}

/// Load a network file, choosing the format from the extension.
pub fn load(path: &Path) -> ProjectResult<NetworkFile> {
    match Format::from_path(path)? {
        Format::Yaml => load_yaml(path),
        Format::Json => load_json(path),
    }
}

/// Save a network file, choosing the format from the extension.
pub fn save(path: &Path, file: &NetworkFile) -> ProjectResult<()> {
    match Format::from_path(path)? {
        Format::Yaml => save_yaml(path, file),
        Format::Json => save_json(path, file),
    }
}

fn finish_load(path: &Path, file: NetworkFile) -> ProjectResult<NetworkFile> {
    let file = migrate_to_latest(file)?;
    validate_file(&file)?;
    info!(path = %path.display(), nodes = file.nodes.len(), "loaded network");
    Ok(file)
}
