//! Input configuration surface (§6.1).
//!
//! Mirrors the JSON shape callers send in: a panel size, a handful of
//! settings, and an ordered list of piece types. `serde(rename_all =
//! "camelCase")` on the wire-facing fields keeps the Rust-side `snake_case`
//! names idiomatic while matching the documented wire schema.

use serde::{Deserialize, Serialize};

use crate::error::{OptimizationError, Result};

/// The stock panel every emitted panel shares `(width, height)` with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub width: i64,
    pub height: i64,
}

/// Tunables that affect placement strategy and free-rect bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_min_waste_size")]
    pub min_waste_size: i64,
    #[serde(default)]
    pub poignet_enabled: bool,
}

fn default_min_waste_size() -> i64 {
    100
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_waste_size: default_min_waste_size(),
            poignet_enabled: false,
        }
    }
}

/// One piece type: a size and a quantity of congruent rectangles to cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceSpec {
    pub id: i64,
    pub width: i64,
    pub height: i64,
    pub quantity: i64,
    #[serde(default = "default_rotation_allowed")]
    pub rotation_allowed: bool,
}

fn default_rotation_allowed() -> bool {
    true
}

/// The full input to [`crate::driver::optimize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuttingConfig {
    pub panel: PanelSpec,
    #[serde(default)]
    pub settings: Settings,
    pub pieces: Vec<PieceSpec>,
}

impl CuttingConfig {
    /// Validates the panel and every piece type, returning the first
    /// violation found. `optimize` does not call this itself — per §7 it
    /// degrades to an empty result instead of erroring — but callers that
    /// want a fail-fast check before committing to a run can use it.
    pub fn validate(&self) -> Result<()> {
        if self.panel.width <= 0 || self.panel.height <= 0 {
            return Err(OptimizationError::InvalidPanel {
                width: self.panel.width,
                height: self.panel.height,
            });
        }

        for piece in &self.pieces {
            if piece.width <= 0 || piece.height <= 0 || piece.quantity <= 0 {
                return Err(OptimizationError::InvalidPiece {
                    type_id: piece.id,
                    width: piece.width,
                    height: piece.height,
                    quantity: piece.quantity,
                });
            }
        }

        Ok(())
    }
}
