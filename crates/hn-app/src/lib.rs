//! hn-app: application service layer for hydronet.
//!
//! Front ends (the CLI today) go through these services rather than the
//! backend crates directly:
//! - `network_service`: open, summarize and save network files
//! - `edit_service`: sequencing and layout edits with undo
//! - `table`: column-described text tables for listing entities

pub mod edit_service;
pub mod error;
pub mod network_service;
pub mod table;

pub use edit_service::{EditOutcome, EditRun, LayoutOp, Selection};
pub use error::{AppError, AppResult};
pub use network_service::{NetworkSummary, OpenNetwork};
pub use table::{Align, Column, render_table};
