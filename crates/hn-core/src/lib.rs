//! hn-core: shared foundation for hydronet.
//!
//! Contains:
//! - ids (compact node ids for transient references into a network)
//! - numeric (Real + coordinate tolerances)
//! - geometry (diagram points and axes)

pub mod geometry;
pub mod ids;
pub mod numeric;

pub use geometry::{Axis, Point};
pub use ids::*;
pub use numeric::*;
