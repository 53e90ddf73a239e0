//! Position edits: even spacing along a reach and snapping to a confluence.

use hn_core::{Axis, NodeId, Point};
use hn_graph::NodePlacement;
use tracing::debug;

use crate::error::{LayoutError, LayoutResult};
use crate::sequence::{check_selection, display_id, sequence};

/// Spread the interior nodes of a reach evenly between its endpoints.
///
/// The selection is sequenced first; node `i` (counting from the upstream
/// end) lands at `first + i * (last - first) / (n - 1)`. The endpoints never
/// move. Selections of fewer than three nodes have no interior and are left
/// alone. Returns the number of nodes moved.
pub fn space_evenly<N>(network: &mut N, nodes: &[NodeId]) -> LayoutResult<usize>
where
    N: NodePlacement + ?Sized,
{
    check_selection(&*network, nodes)?;
    if nodes.len() < 3 {
        debug!(len = nodes.len(), "reach has no interior nodes to space");
        return Ok(0);
    }

    let ordered = sequence(&*network, nodes)?;
    let n = ordered.len();
    let first = position_of(&*network, ordered[0])?;
    let last = position_of(&*network, ordered[n - 1])?;
    let steps = (n - 1) as f64;
    let dx = (last.x - first.x) / steps;
    let dy = (last.y - first.y) / steps;

    let mut targets = Vec::with_capacity(n - 2);
    for (i, &id) in ordered.iter().enumerate().take(n - 1).skip(1) {
        let step = i as f64;
        let target = Point::new(first.x + dx * step, first.y + dy * step);
        if !target.is_finite() {
            return Err(LayoutError::NonFinite {
                node: display_id(&*network, id),
            });
        }
        targets.push((id, target));
    }

    for &(id, target) in &targets {
        network.set_position(id, target)?;
    }
    debug!(moved = targets.len(), "spaced reach evenly");
    Ok(targets.len())
}

/// Copy the confluence node's coordinate on `axis` to every other selected
/// node.
///
/// Needs exactly one confluence in the selection. With none, or several, the
/// selection is left alone and 0 is returned: callers often pick a set
/// without a confluence, which is not an error. Otherwise returns the number
/// of nodes moved (`nodes.len() - 1`).
pub fn snap_to_confluence<N>(network: &mut N, nodes: &[NodeId], axis: Axis) -> LayoutResult<usize>
where
    N: NodePlacement + ?Sized,
{
    check_selection(&*network, nodes)?;

    let mut confluences = nodes
        .iter()
        .copied()
        .filter(|&id| network.kind(id).is_some_and(|k| k.is_confluence()));
    let confluence = match (confluences.next(), confluences.next()) {
        (Some(only), None) => only,
        (first, _) => {
            let found = if first.is_some() { "several" } else { "none" };
            debug!(%axis, found, "no unique confluence in selection, nothing snapped");
            return Ok(0);
        }
    };

    let value = position_of(&*network, confluence)?.get(axis);
    let mut targets = Vec::with_capacity(nodes.len().saturating_sub(1));
    for &id in nodes.iter().filter(|&&id| id != confluence) {
        targets.push((id, position_of(&*network, id)?.with(axis, value)));
    }

    for &(id, target) in &targets {
        network.set_position(id, target)?;
    }
    debug!(%axis, moved = targets.len(), "snapped to confluence");
    Ok(targets.len())
}

/// [`snap_to_confluence`] on the X axis.
pub fn snap_to_confluence_x<N>(network: &mut N, nodes: &[NodeId]) -> LayoutResult<usize>
where
    N: NodePlacement + ?Sized,
{
    snap_to_confluence(network, nodes, Axis::X)
}

/// [`snap_to_confluence`] on the Y axis.
pub fn snap_to_confluence_y<N>(network: &mut N, nodes: &[NodeId]) -> LayoutResult<usize>
where
    N: NodePlacement + ?Sized,
{
    snap_to_confluence(network, nodes, Axis::Y)
}

fn position_of<N>(network: &N, id: NodeId) -> LayoutResult<Point>
where
    N: NodePlacement + ?Sized,
{
    network
        .position(id)
        .ok_or(LayoutError::UnknownNode { id })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use hn_core::Tolerances;
    use hn_graph::{NetworkBuilder, NodeAdjacency, NodeKind};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn interior_nodes_land_on_the_line(
            n in 3usize..16,
            x0 in -1e4_f64..1e4, y0 in -1e4_f64..1e4,
            x1 in -1e4_f64..1e4, y1 in -1e4_f64..1e4,
            jitter in prop::collection::vec((-1e3_f64..1e3, -1e3_f64..1e3), 16),
        ) {
            let mut builder = NetworkBuilder::new();
            let ids: Vec<_> = (0..n)
                .map(|i| {
                    let pos = if i == 0 {
                        Point::new(x0, y0)
                    } else if i == n - 1 {
                        Point::new(x1, y1)
                    } else {
                        Point::new(jitter[i].0, jitter[i].1)
                    };
                    builder.add_node(format!("N{i}"), "", NodeKind::Other, pos).unwrap()
                })
                .collect();
            for pair in ids.windows(2) {
                builder.connect(pair[0], pair[1]);
            }
            let mut net = builder.build().unwrap();

            let moved = space_evenly(&mut net, &ids).unwrap();
            prop_assert_eq!(moved, n - 2);
            prop_assert_eq!(net.position(ids[0]), Some(Point::new(x0, y0)));
            prop_assert_eq!(net.position(ids[n - 1]), Some(Point::new(x1, y1)));

            let tol = Tolerances::new(1e-6, 1e-9);
            for (i, &id) in ids.iter().enumerate() {
                let t = i as f64 / (n - 1) as f64;
                let expected = Point::new(x0, y0).lerp(Point::new(x1, y1), t);
                let got = net.position(id).unwrap();
                prop_assert!(got.nearly_equal(expected, tol));
            }
        }
    }
}
