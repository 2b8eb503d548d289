//! Piece expansion and ordering (§4.2).
//!
//! Turns the input multiset of [`crate::config::PieceSpec`] into the ordered
//! sequence of unit [`Piece`]s the driver consumes. This is the only place
//! the engine reorders work: once `expand` has sorted its output, every
//! downstream component treats that order as canonical.

use serde::{Deserialize, Serialize};

use crate::config::PieceSpec;

/// A single expanded unit of demand: one rectangle to be cut, still unplaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    /// Globally unique, monotonically assigned ordinal across the whole expansion.
    pub piece_id: u64,
    pub type_id: i64,
    pub w: i64,
    pub h: i64,
    pub rotation_allowed: bool,
}

impl Piece {
    pub fn area(&self) -> i64 {
        self.w * self.h
    }
}

/// Expands `types` into one [`Piece`] per unit of quantity, in type order
/// and ascending unit order within a type, then stable-sorts the result
/// descending by area (§4.2). Ties keep expansion order.
pub fn expand(types: &[PieceSpec]) -> Vec<Piece> {
    let mut next_id: u64 = 0;
    let mut pieces = Vec::new();

    for spec in types {
        for _ in 0..spec.quantity {
            pieces.push(Piece {
                piece_id: next_id,
                type_id: spec.id,
                w: spec.width,
                h: spec.height,
                rotation_allowed: spec.rotation_allowed,
            });
            next_id += 1;
        }
    }

    pieces.sort_by(|a, b| b.area().cmp(&a.area()));
    pieces
}
