//! hn-graph: the river network model for hydronet.
//!
//! Provides:
//! - Node data (common id, kind, diagram position, dirty flag)
//! - A validated network with upstream/downstream adjacency
//! - Incremental network builder
//! - Position snapshots and an explicit edit session with undo/redo
//!
//! # Example
//!
//! ```
//! use hn_core::Point;
//! use hn_graph::{NetworkBuilder, NodeAdjacency, NodeKind};
//!
//! let mut builder = NetworkBuilder::new();
//! let head = builder.add_node("0100501", "Headgate", NodeKind::Diversion, Point::new(0.0, 0.0)).unwrap();
//! let gage = builder.add_node("09010500", "Gage", NodeKind::StreamGage, Point::new(0.0, 10.0)).unwrap();
//! builder.connect(head, gage);
//! let network = builder.build().unwrap();
//!
//! assert_eq!(network.downstream(head), Some(gage));
//! assert_eq!(network.upstream(gage), &[head]);
//! ```

pub mod builder;
pub mod error;
pub mod network;
pub mod node;
pub mod session;
pub mod snapshot;
pub(crate) mod validate;

pub use builder::NetworkBuilder;
pub use error::{GraphError, GraphResult};
pub use network::{Network, NodeAdjacency, NodePlacement};
pub use node::{Node, NodeKind, Tracked};
pub use session::EditSession;
pub use snapshot::Snapshot;
