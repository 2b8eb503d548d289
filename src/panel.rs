//! A single stock sheet: its placements, its free-rect registry, and (in
//! edge-aligned mode) the two row cursors §4.5 tracks.

use crate::free_rect::{self, FreeRect};
use crate::geometry::Rectangle;
use crate::result::{PanelResult, Placement};

/// The state of one physical panel while the driver is still filling it.
#[derive(Debug, Clone)]
pub struct Panel {
    pub panel_index: usize,
    pub placements: Vec<Placement>,
    pub free_rects: Vec<FreeRect>,
    /// Right edge of the rightmost piece placed so far in the top row (edge-aligned mode only).
    pub top_x: i64,
    /// Right edge of the rightmost piece placed so far in the bottom row (edge-aligned mode only).
    pub bottom_x: i64,
    /// The stock rectangle this panel was cut from, at `(0, 0)`. Kept around
    /// so every registry update can check invariant 2 — every free rect
    /// stays entirely inside the stock (§3) — with [`Rectangle::contains_rect`].
    stock: Rectangle,
}

impl Panel {
    /// Opens a fresh panel: the whole stock rectangle is free, both cursors at 0.
    pub fn new(panel_index: usize, width: i64, height: i64) -> Self {
        let stock = Rectangle::new(0, 0, width, height);
        Self {
            panel_index,
            placements: Vec::new(),
            free_rects: vec![stock],
            top_x: 0,
            bottom_x: 0,
            stock,
        }
    }

    /// Debug-only check of invariant 2: every free rect lies entirely within
    /// the stock rectangle. A no-op in release builds.
    fn debug_assert_free_rects_within_stock(&self) {
        debug_assert!(
            self.free_rects.iter().all(|f| self.stock.contains_rect(f)),
            "free rect escaped the stock rectangle on panel {}",
            self.panel_index
        );
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Registry update for free mode (§4.3): remove the chosen free rect,
    /// push its vertical-first guillotine split around `placement`, subtract
    /// `placement` from every remaining free rect, merge colinear-adjacent
    /// rects, then drop anything below `min_waste_size`.
    pub fn commit_free_mode(&mut self, chosen_index: usize, placement: Placement, min_waste_size: i64) {
        let placed_rect = Rectangle::new(placement.x, placement.y, placement.w, placement.h);
        let used_rect = self.free_rects.remove(chosen_index);

        let mut frees = std::mem::take(&mut self.free_rects);
        frees.extend(free_rect::split_around(used_rect, placed_rect));
        frees = free_rect::subtract_placed(&frees, placed_rect);
        frees = free_rect::merge_colinear(frees);
        frees = free_rect::filter_small(frees, min_waste_size);

        self.free_rects = frees;
        self.debug_assert_free_rects_within_stock();
        self.placements.push(placement);
    }

    /// Registry update for edge-aligned mode (§4.5): no `split_around` — the
    /// placement is not generally at a free rect's top-left, so the general
    /// subtraction is the correct operation against the whole registry.
    pub fn commit_edge_mode(&mut self, placement: Placement, min_waste_size: i64, panel_height: i64) {
        let placed_rect = Rectangle::new(placement.x, placement.y, placement.w, placement.h);

        let mut frees = std::mem::take(&mut self.free_rects);
        frees = free_rect::subtract_placed(&frees, placed_rect);
        frees = free_rect::merge_colinear(frees);
        frees = free_rect::filter_small(frees, min_waste_size);
        self.free_rects = frees;
        self.debug_assert_free_rects_within_stock();

        if placement.y == 0 {
            self.top_x = self.top_x.max(placement.right());
        }
        if placement.bottom() == panel_height {
            self.bottom_x = self.bottom_x.max(placement.right());
        }

        self.placements.push(placement);
    }

    /// Recomputes `top_x`/`bottom_x` from the current placements — used
    /// after back-filling a piece into an already-open panel (§4.6).
    pub fn recompute_cursors(&mut self, panel_height: i64) {
        self.top_x = self
            .placements
            .iter()
            .filter(|p| p.y == 0)
            .map(|p| p.right())
            .max()
            .unwrap_or(0);
        self.bottom_x = self
            .placements
            .iter()
            .filter(|p| p.bottom() == panel_height)
            .map(|p| p.right())
            .max()
            .unwrap_or(0);
    }

    pub fn into_result(self) -> PanelResult {
        PanelResult {
            panel_index: self.panel_index,
            placed: self.placements,
            free_rects: self.free_rects,
        }
    }
}
