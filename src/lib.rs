//! Deterministic 2D guillotine bin-packing core for wood-cutting machinery.
//!
//! Given a stock panel size and a multiset of rectangular piece types,
//! [`driver::optimize`] assigns each piece to a position on one of as few
//! panels as possible, using a Bottom-Left Best Fit free-rect search (or, in
//! edge-aligned mode, a row-cursor search tailored to machines that only cut
//! pieces flush against the panel's top or bottom edge).

pub mod concurrency;
pub mod config;
pub mod driver;
pub mod error;
pub mod free_rect;
pub mod geometry;
pub mod panel;
pub mod piece;
pub mod placement;
pub mod result;
pub mod stats;

pub use config::{CuttingConfig, PanelSpec, PieceSpec, Settings};
pub use driver::optimize;
pub use error::{OptimizationError, Result};
pub use geometry::Rectangle;
pub use piece::Piece;
pub use result::{OptimizationResult, PanelResult, Placement};
pub use stats::Stats;
