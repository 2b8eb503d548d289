//! Multi-panel driver (§4.6): the outer loop that expands pieces, fills
//! panels, and re-visits prior panels before opening a new one.
//!
//! This is the crate's single public entry point. Everything above it
//! (geometry, the free-rect registry, the two placement strategies) exists
//! to serve [`optimize`].

use tracing::{debug, trace, warn};

use crate::config::CuttingConfig;
use crate::panel::Panel;
use crate::piece::{self, Piece};
use crate::placement::{edge_aligned, free_fit};
use crate::result::{OptimizationResult, Placement};
use crate::stats::Stats;

/// Hard cap on the number of panels a single run may open, guarding the
/// driver loop against pathological inputs (§4.6 step 3).
const PANEL_CAP: usize = 1000;

/// Runs the full cutting optimization for `config`.
///
/// Invalid input — a non-positive panel dimension, or a non-positive piece
/// width/height/quantity — degrades to the well-formed empty result (§7)
/// rather than an error; `optimize` never fails.
pub fn optimize(config: &CuttingConfig) -> OptimizationResult {
    let panel_width = config.panel.width;
    let panel_height = config.panel.height;

    if panel_width <= 0 || panel_height <= 0 {
        warn!(panel_width, panel_height, "rejecting invalid panel size");
        return OptimizationResult::empty_invalid();
    }

    if config
        .pieces
        .iter()
        .any(|p| p.width <= 0 || p.height <= 0 || p.quantity <= 0)
    {
        warn!("rejecting config containing a non-positive piece dimension or quantity");
        return OptimizationResult::empty_invalid();
    }

    let min_waste_size = config.settings.min_waste_size;
    let poignet_enabled = config.settings.poignet_enabled;

    let mut remaining = piece::expand(&config.pieces);
    debug!(piece_count = remaining.len(), panel_width, panel_height, poignet_enabled, "starting optimization run");

    let mut panels: Vec<Panel> = Vec::new();

    while !remaining.is_empty() {
        back_fill(&mut panels, &mut remaining, poignet_enabled, panel_width, panel_height, min_waste_size);

        if remaining.is_empty() {
            break;
        }

        if panels.len() >= PANEL_CAP {
            warn!(cap = PANEL_CAP, rejected = remaining.len(), "panel cap reached; remaining pieces rejected");
            break;
        }

        let panel_index = panels.len();
        trace!(panel_index, "opening a new panel");
        let mut panel = Panel::new(panel_index, panel_width, panel_height);
        let placed = fill_panel(&mut panel, &mut remaining, poignet_enabled, panel_width, panel_height, min_waste_size);

        if placed == 0 {
            trace!(panel_index, "newly opened panel placed nothing; remaining pieces cannot fit on any panel");
            break;
        }

        debug!(panel_index, placed, remaining = remaining.len(), "panel opened");
        panels.push(panel);
    }

    let panel_results: Vec<_> = panels.into_iter().map(Panel::into_result).collect();
    let stats = Stats::compute(&panel_results, &config.panel, &config.settings);

    debug!(
        panel_count = panel_results.len(),
        rejected = remaining.len(),
        waste_percentage = stats.waste_percentage,
        "optimization run complete"
    );

    OptimizationResult {
        panels: panel_results,
        rejected: remaining,
        stats,
    }
}

/// Sweeps every existing panel, in index order, attempting to place
/// remaining pieces into each — repeating the full sweep while any panel
/// made progress (§4.6 step 1). Run before a new panel is ever opened.
fn back_fill(
    panels: &mut [Panel],
    remaining: &mut Vec<Piece>,
    poignet_enabled: bool,
    panel_width: i64,
    panel_height: i64,
    min_waste_size: i64,
) {
    if panels.is_empty() {
        return;
    }

    loop {
        let mut progress = false;
        trace!(panel_count = panels.len(), remaining = remaining.len(), "back-fill sweep starting");

        for panel in panels.iter_mut() {
            if remaining.is_empty() {
                break;
            }
            let placed = fill_panel(panel, remaining, poignet_enabled, panel_width, panel_height, min_waste_size);
            if placed > 0 {
                panel.recompute_cursors(panel_height);
                debug!(panel_index = panel.panel_index, placed, "back-filled existing panel");
                progress = true;
            }
        }

        if !progress || remaining.is_empty() {
            break;
        }
    }
}

/// Single forward pass over `remaining`: attempts each piece once against
/// `panel`'s current free-rect registry, removing it from `remaining` on
/// success and updating the registry before moving to the next piece.
/// Returns the number of pieces placed.
fn fill_panel(
    panel: &mut Panel,
    remaining: &mut Vec<Piece>,
    poignet_enabled: bool,
    panel_width: i64,
    panel_height: i64,
    min_waste_size: i64,
) -> usize {
    let mut placed_count = 0;
    let mut i = 0;

    while i < remaining.len() {
        let piece = remaining[i];
        let placed = if poignet_enabled {
            try_place_edge_aligned(panel, &piece, panel_width, panel_height, min_waste_size)
        } else {
            try_place_free(panel, &piece, min_waste_size)
        };

        if placed {
            remaining.remove(i);
            placed_count += 1;
        } else {
            i += 1;
        }
    }

    placed_count
}

fn try_place_free(panel: &mut Panel, piece: &Piece, min_waste_size: i64) -> bool {
    let Some(candidate) = free_fit::choose(&panel.free_rects, piece) else {
        return false;
    };

    let placement = Placement {
        x: candidate.x,
        y: candidate.y,
        w: candidate.w,
        h: candidate.h,
        piece_id: piece.piece_id,
        type_id: piece.type_id,
        rotated: candidate.orientation.is_rotated(),
        panel_index: panel.panel_index,
    };
    panel.commit_free_mode(candidate.free_index, placement, min_waste_size);
    true
}

fn try_place_edge_aligned(panel: &mut Panel, piece: &Piece, panel_width: i64, panel_height: i64, min_waste_size: i64) -> bool {
    let Some(candidate) = edge_aligned::choose(&panel.free_rects, piece, panel.top_x, panel.bottom_x, panel_width, panel_height) else {
        return false;
    };

    let placement = Placement {
        x: candidate.x,
        y: candidate.y,
        w: candidate.w,
        h: candidate.h,
        piece_id: piece.piece_id,
        type_id: piece.type_id,
        rotated: candidate.orientation.is_rotated(),
        panel_index: panel.panel_index,
    };
    panel.commit_edge_mode(placement, min_waste_size, panel_height);
    true
}
