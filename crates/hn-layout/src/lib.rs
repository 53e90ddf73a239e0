//! hn-layout: diagram layout edits over a river network.
//!
//! - [`sequence`] orders a selection of nodes from one unbranched reach,
//!   most upstream first.
//! - [`space_evenly`] spreads the interior nodes of a reach evenly between
//!   its two endpoints.
//! - [`snap_to_confluence_x`] / [`snap_to_confluence_y`] line a selection up
//!   with its confluence node.
//!
//! Every operation validates the whole selection before it writes a single
//! position, so a failure never leaves a partial edit behind.
//!
//! # Example
//!
//! ```
//! use hn_core::Point;
//! use hn_graph::{NetworkBuilder, NodeAdjacency, NodeKind};
//! use hn_layout::space_evenly;
//!
//! let mut builder = NetworkBuilder::new();
//! let pts = [(0.0, 0.0), (1.0, 5.0), (7.0, -2.0), (9.0, 0.0)];
//! let ids: Vec<_> = pts
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &(x, y))| {
//!         builder
//!             .add_node(format!("N{i}"), "", NodeKind::Other, Point::new(x, y))
//!             .unwrap()
//!     })
//!     .collect();
//! for pair in ids.windows(2) {
//!     builder.connect(pair[0], pair[1]);
//! }
//! let mut network = builder.build().unwrap();
//!
//! let moved = space_evenly(&mut network, &[ids[3], ids[1], ids[0], ids[2]]).unwrap();
//! assert_eq!(moved, 2);
//! assert_eq!(network.position(ids[1]), Some(Point::new(3.0, 0.0)));
//! assert_eq!(network.position(ids[2]), Some(Point::new(6.0, 0.0)));
//! ```

pub mod adjust;
pub mod error;
pub mod sequence;

pub use adjust::{snap_to_confluence, snap_to_confluence_x, snap_to_confluence_y, space_evenly};
pub use error::{ChainDefect, LayoutError, LayoutResult};
pub use sequence::{sequence, walk_reach};
