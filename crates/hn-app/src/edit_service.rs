//! Sequencing and layout edits on an open network.

use core::fmt;
use core::str::FromStr;
use std::path::Path;

use hn_core::NodeId;
use hn_graph::Network;
use hn_layout::{sequence, snap_to_confluence_x, snap_to_confluence_y, space_evenly, walk_reach};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::network_service::{self, OpenNetwork};

/// A layout edit a user can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutOp {
    SpaceEvenly,
    SnapX,
    SnapY,
}

impl LayoutOp {
    pub fn label(self) -> &'static str {
        match self {
            LayoutOp::SpaceEvenly => "space evenly",
            LayoutOp::SnapX => "snap x to confluence",
            LayoutOp::SnapY => "snap y to confluence",
        }
    }
}

impl fmt::Display for LayoutOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LayoutOp {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "space-evenly" => Ok(LayoutOp::SpaceEvenly),
            "snap-x" => Ok(LayoutOp::SnapX),
            "snap-y" => Ok(LayoutOp::SnapY),
            other => Err(AppError::InvalidInput(format!(
                "unknown layout operation '{other}'"
            ))),
        }
    }
}

/// What an edit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub op: LayoutOp,
    /// Number of nodes moved; 0 means the network is unchanged.
    pub moved: usize,
}

/// How the user picked the nodes to edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Explicit common ids, in any order.
    Ids(Vec<String>),
    /// Every node on the downstream path from `from` to `to`.
    Reach { from: String, to: String },
}

impl Selection {
    /// Common ids of the selected nodes.
    pub fn common_ids(&self, network: &Network) -> AppResult<Vec<String>> {
        match self {
            Selection::Ids(ids) => Ok(ids.clone()),
            Selection::Reach { from, to } => reach_ids(network, from, to),
        }
    }
}

/// Result of [`run_edit`]: the edited network and what reached disk.
#[derive(Debug)]
pub struct EditRun {
    pub open: OpenNetwork,
    pub outcome: EditOutcome,
    /// Node entries written back; always 0 for a dry run.
    pub written: usize,
}

/// Open a network file, apply one layout edit and write the file back.
///
/// A dry run, or an edit that moves nothing, leaves the file untouched.
pub fn run_edit(path: &Path, op: LayoutOp, selection: &Selection, dry_run: bool) -> AppResult<EditRun> {
    let mut open = network_service::open(path)?;
    let ids = selection.common_ids(open.network())?;
    debug!(%op, selected = ids.len(), dry_run, "edit requested");

    let outcome = apply(&mut open, op, &ids)?;
    let written = if dry_run {
        0
    } else {
        network_service::save(&mut open)?
    };
    Ok(EditRun {
        open,
        outcome,
        written,
    })
}

/// Resolve user-facing ids, rejecting an empty selection.
pub fn resolve_selection<S: AsRef<str>>(network: &Network, ids: &[S]) -> AppResult<Vec<NodeId>> {
    if ids.is_empty() {
        return Err(AppError::InvalidInput("no nodes selected".to_string()));
    }
    Ok(network.resolve(ids)?)
}

/// Order the selection from upstream to downstream, as common ids.
pub fn sequence_ids<S: AsRef<str>>(network: &Network, ids: &[S]) -> AppResult<Vec<String>> {
    let selection = resolve_selection(network, ids)?;
    let ordered = sequence(network, &selection)?;
    Ok(common_ids(network, &ordered))
}

/// Common ids of every node from `from` down to `to`.
pub fn reach_ids(network: &Network, from: &str, to: &str) -> AppResult<Vec<String>> {
    let path = walk_reach(network, network.find(from)?, network.find(to)?)?;
    Ok(common_ids(network, &path))
}

/// Run one layout edit through the open network's session, so it can be
/// undone and a failure leaves positions untouched.
pub fn apply<S: AsRef<str>>(open: &mut OpenNetwork, op: LayoutOp, ids: &[S]) -> AppResult<EditOutcome> {
    let selection = resolve_selection(open.network(), ids)?;
    let moved = open.session.apply(op.label(), |net| match op {
        LayoutOp::SpaceEvenly => space_evenly(net, &selection),
        LayoutOp::SnapX => snap_to_confluence_x(net, &selection),
        LayoutOp::SnapY => snap_to_confluence_y(net, &selection),
    })?;
    info!(%op, selected = selection.len(), moved, "layout edit");
    Ok(EditOutcome { op, moved })
}

/// Undo the last edit; returns its label if there was one.
pub fn undo(open: &mut OpenNetwork) -> AppResult<Option<String>> {
    Ok(open.session.undo()?)
}

fn common_ids(network: &Network, ids: &[NodeId]) -> Vec<String> {
    ids.iter()
        .filter_map(|&id| network.node(id))
        .map(|n| n.common_id().to_string())
        .collect()
}
