//! Editing session: the explicit context for modifying one network.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::network::Network;
use crate::snapshot::Snapshot;

pub const DEFAULT_HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone)]
struct Edit {
    label: String,
    before: Snapshot,
    after: Snapshot,
}

/// Owns the network being edited along with its undo/redo history.
///
/// All position edits go through [`EditSession::apply`], so every change can
/// be undone and a failed edit never leaves the network half-modified.
#[derive(Debug, Clone)]
pub struct EditSession {
    network: Network,
    undo: VecDeque<Edit>,
    redo: Vec<Edit>,
    limit: usize,
    /// Placement at the last [`EditSession::mark_saved`], if any.
    saved: Option<Snapshot>,
}

impl EditSession {
    pub fn new(network: Network) -> Self {
        Self::with_history_limit(network, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_history_limit(network: Network, limit: usize) -> Self {
        Self {
            network,
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit: limit.max(1),
            saved: None,
        }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn into_network(self) -> Network {
        self.network
    }

    /// Run one edit against the network.
    ///
    /// If `edit` fails the network is restored to its prior positions and
    /// dirty flags. An edit that moves nothing leaves no history entry.
    pub fn apply<T, E, F>(&mut self, label: impl Into<String>, edit: F) -> Result<T, E>
    where
        F: FnOnce(&mut Network) -> Result<T, E>,
        E: From<GraphError>,
    {
        let before = Snapshot::capture(&self.network);
        let value = match edit(&mut self.network) {
            Ok(value) => value,
            Err(err) => {
                before.restore(&mut self.network)?;
                return Err(err);
            }
        };

        let moved = before.moved(&self.network)?;
        let label = label.into();
        if moved.is_empty() {
            debug!(%label, "edit moved no nodes");
            return Ok(value);
        }

        debug!(%label, moved = moved.len(), "edit recorded");
        self.redo.clear();
        if self.undo.len() == self.limit {
            self.undo.pop_front();
        }
        self.undo.push_back(Edit {
            label,
            before,
            after: Snapshot::capture(&self.network),
        });
        Ok(value)
    }

    /// Revert the most recent edit; returns its label.
    pub fn undo(&mut self) -> GraphResult<Option<String>> {
        let Some(edit) = self.undo.pop_back() else {
            return Ok(None);
        };
        self.settle(&edit.before)?;
        let label = edit.label.clone();
        debug!(%label, "undo");
        self.redo.push(edit);
        Ok(Some(label))
    }

    /// Re-apply the most recently undone edit; returns its label.
    pub fn redo(&mut self) -> GraphResult<Option<String>> {
        let Some(edit) = self.redo.pop() else {
            return Ok(None);
        };
        self.settle(&edit.after)?;
        let label = edit.label.clone();
        debug!(%label, "redo");
        self.undo.push_back(edit);
        Ok(Some(label))
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Labels of undoable edits, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.undo.iter().map(|e| e.label.as_str())
    }

    pub fn is_dirty(&self) -> bool {
        self.network.is_dirty()
    }

    /// The network has been persisted; clear its dirty flags.
    ///
    /// Later undo and redo compare against this state, so stepping back to
    /// it leaves the network clean and stepping away from it marks nodes
    /// dirty.
    pub fn mark_saved(&mut self) {
        self.network.clear_dirty();
        self.saved = Some(Snapshot::capture(&self.network));
    }

    fn settle(&mut self, target: &Snapshot) -> GraphResult<()> {
        target.restore(&mut self.network)?;
        if let Some(saved) = &self.saved {
            saved.mark_departures(&mut self.network)?;
        }
        Ok(())
    }
}
