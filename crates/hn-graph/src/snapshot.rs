//! Immutable placement snapshots.

use hn_core::{NodeId, Point, Tolerances};

use crate::error::{GraphError, GraphResult};
use crate::network::Network;
use crate::node::Tracked;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Placement {
    pos: Point,
    dirty: bool,
}

/// Position and dirty flag of every node in a network at one moment.
///
/// Capture one before an edit, then diff against or restore from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    placements: Vec<Placement>,
}

impl Snapshot {
    pub fn capture(network: &Network) -> Self {
        Self {
            placements: network
                .nodes
                .iter()
                .map(|n| Placement {
                    pos: n.pos,
                    dirty: n.is_dirty(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.placements.get(id.slot()).map(|p| p.pos)
    }

    /// Dirty flag the node carried when the snapshot was taken.
    pub fn was_dirty(&self, id: NodeId) -> Option<bool> {
        self.placements.get(id.slot()).map(|p| p.dirty)
    }

    /// Nodes whose position in `network` differs from the snapshot.
    pub fn moved(&self, network: &Network) -> GraphResult<Vec<NodeId>> {
        self.check_shape(network)?;
        Ok(network
            .nodes
            .iter()
            .zip(&self.placements)
            .filter(|(node, p)| !node.pos.nearly_equal(p.pos, Tolerances::PLACEMENT))
            .map(|(node, _)| node.id)
            .collect())
    }

    /// Put every node back where the snapshot saw it, with the dirty flag it
    /// had then. Returns how many nodes changed position.
    pub fn restore(&self, network: &mut Network) -> GraphResult<usize> {
        self.check_shape(network)?;
        let mut restored = 0;
        for (node, p) in network.nodes.iter_mut().zip(&self.placements) {
            if !node.pos.nearly_equal(p.pos, Tolerances::PLACEMENT) {
                restored += 1;
            }
            node.pos = p.pos;
            if p.dirty {
                node.mark_dirty();
            } else {
                node.clear_dirty();
            }
        }
        Ok(restored)
    }

    /// Treat the snapshot as the persisted state: nodes away from their
    /// captured position become dirty, the rest clean. Returns the dirty
    /// count.
    pub fn mark_departures(&self, network: &mut Network) -> GraphResult<usize> {
        self.check_shape(network)?;
        let mut dirty = 0;
        for (node, p) in network.nodes.iter_mut().zip(&self.placements) {
            if node.pos.nearly_equal(p.pos, Tolerances::PLACEMENT) {
                node.clear_dirty();
            } else {
                node.mark_dirty();
                dirty += 1;
            }
        }
        Ok(dirty)
    }

    fn check_shape(&self, network: &Network) -> GraphResult<()> {
        if self.placements.len() != network.len() {
            return Err(GraphError::SnapshotMismatch {
                expected: self.placements.len(),
                actual: network.len(),
            });
        }
        Ok(())
    }
}
