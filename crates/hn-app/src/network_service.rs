//! Opening, summarizing and saving network files.

use std::path::{Path, PathBuf};

use hn_graph::{EditSession, Network, Node, NodeKind, Tracked};
use hn_project::{NetworkFile, ProjectError};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::table::{Column, render_table};

/// A network file loaded for editing.
#[derive(Debug)]
pub struct OpenNetwork {
    pub path: PathBuf,
    pub file: NetworkFile,
    pub session: EditSession,
}

impl OpenNetwork {
    pub fn network(&self) -> &Network {
        self.session.network()
    }
}

/// Summary of a network for listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSummary {
    pub name: String,
    pub node_count: usize,
    pub confluence_count: usize,
    pub headwater_count: usize,
    pub terminal_count: usize,
    pub dirty: bool,
}

/// Load a network file (YAML or JSON by extension) and build its network.
pub fn open(path: &Path) -> AppResult<OpenNetwork> {
    let file = hn_project::load(path).map_err(|err| match err {
        ProjectError::Io(source) => AppError::NetworkFileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })?;
    let network = hn_project::to_network(&file)?;
    Ok(OpenNetwork {
        path: path.to_path_buf(),
        file,
        session: EditSession::new(network),
    })
}

/// Write edited positions back to the file the network came from.
///
/// Returns how many node entries changed on disk. Nothing is written when
/// no node is dirty.
pub fn save(open: &mut OpenNetwork) -> AppResult<usize> {
    if !open.session.is_dirty() {
        return Ok(0);
    }
    let changed = hn_project::store_positions(&mut open.file, open.session.network());
    hn_project::save(&open.path, &open.file)?;
    open.session.mark_saved();
    info!(path = %open.path.display(), changed, "network saved");
    Ok(changed)
}

pub fn summarize(open: &OpenNetwork) -> NetworkSummary {
    let network = open.network();
    NetworkSummary {
        name: open.file.name.clone(),
        node_count: network.len(),
        confluence_count: network
            .nodes()
            .iter()
            .filter(|n| n.kind() == NodeKind::Confluence)
            .count(),
        headwater_count: network.headwaters().count(),
        terminal_count: network.terminals().count(),
        dirty: network.is_dirty(),
    }
}

/// Node listing with id, kind, position, downstream link and dirty marker.
pub fn node_table(network: &Network) -> String {
    let columns = [
        Column::left("ID", |n: &Node| n.common_id().to_string()),
        Column::left("NAME", |n: &Node| n.name().to_string()),
        Column::left("KIND", |n: &Node| n.kind().to_string()),
        Column::right("X", |n: &Node| format!("{:.2}", n.pos().x)),
        Column::right("Y", |n: &Node| format!("{:.2}", n.pos().y)),
        Column::left("DOWNSTREAM", |n: &Node| {
            n.downstream()
                .and_then(|d| network.node(d))
                .map_or_else(|| "-".to_string(), |d| d.common_id().to_string())
        }),
        Column::left("", |n: &Node| String::from(if n.is_dirty() { "*" } else { "" })),
    ];
    render_table(network.nodes(), &columns)
}
