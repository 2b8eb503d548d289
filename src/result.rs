//! Output types (§6.2): a committed placement, a panel's contents, and the
//! overall result of one `optimize` call.

use serde::{Deserialize, Serialize};

use crate::free_rect::FreeRect;
use crate::piece::Piece;
use crate::stats::Stats;

/// A committed (position, orientation) of a single piece on a specific panel.
///
/// `w`/`h` are the *oriented* dimensions actually cut: if `rotated`, they are
/// the original piece type's height and width swapped (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
    pub piece_id: u64,
    pub type_id: i64,
    pub rotated: bool,
    pub panel_index: usize,
}

impl Placement {
    pub fn right(&self) -> i64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.h
    }

    pub fn area(&self) -> i64 {
        self.w * self.h
    }
}

/// The state of one physical stock sheet: everything placed on it, and the
/// free space still usable on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelResult {
    pub panel_index: usize,
    pub placed: Vec<Placement>,
    pub free_rects: Vec<FreeRect>,
}

/// The full output of one `optimize` invocation.
///
/// No `Eq` derive: `Stats` carries `f64` percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub panels: Vec<PanelResult>,
    pub rejected: Vec<Piece>,
    pub stats: Stats,
}

impl OptimizationResult {
    /// The empty, well-formed result returned for invalid input (§7):
    /// `panel_count = 0`, `waste_percentage = 100`.
    pub fn empty_invalid() -> Self {
        Self {
            panels: Vec::new(),
            rejected: Vec::new(),
            stats: Stats::invalid(),
        }
    }
}
