//! Free-region registry (§4.3).
//!
//! A panel's free space is a flat, possibly-overlapping collection of
//! [`FreeRect`]s — a MaxRects representation, not a partition (§9: "implementers
//! who come from tiling backgrounds must note that free rectangles can
//! overlap each other; they are candidate windows"). Four pure operations
//! are defined here; the registry update sequences that chain them together
//! live in [`crate::panel::Panel::commit_free_mode`] and
//! [`crate::panel::Panel::commit_edge_mode`].

use crate::geometry::Rectangle;

/// A candidate placement window still free on a panel. Plain alias over
/// [`Rectangle`]: the set of free rects is just a vector of these, tracked
/// by position (index), never by structural equality — two distinct free
/// rects can be structurally equal after independent subtractions (§9).
pub type FreeRect = Rectangle;

/// Vertical-first guillotine decomposition of `used_rect` after `placed` has
/// been cut from its top-left corner (§4.3). Emits up to three residuals, in
/// this fixed order: right strip, bottom strip (placed width), bottom-left
/// corner. Zero-area residuals are omitted.
pub fn split_around(used_rect: FreeRect, placed: Rectangle) -> Vec<FreeRect> {
    let mut out = Vec::with_capacity(3);

    let right_w = used_rect.right() - placed.right();
    if right_w > 0 {
        out.push(FreeRect::new(placed.right(), used_rect.y, right_w, used_rect.h));
    }

    let bottom_h = used_rect.bottom() - placed.bottom();
    if bottom_h > 0 {
        out.push(FreeRect::new(placed.x, placed.bottom(), placed.w, bottom_h));
    }

    let corner_w = placed.x - used_rect.x;
    if corner_w > 0 && bottom_h > 0 {
        out.push(FreeRect::new(used_rect.x, placed.bottom(), corner_w, bottom_h));
    }

    out
}

/// Subtracts `placed` from every free rect, restoring invariant 2 (no free
/// rect overlaps a placement). Rects that don't overlap `placed` pass
/// through unchanged; rects that do are replaced by up to four
/// non-overlapping strips (left/right span the rect's original height,
/// top/bottom span its original width) covering what's left outside
/// `placed` (§4.3).
pub fn subtract_placed(frees: &[FreeRect], placed: Rectangle) -> Vec<FreeRect> {
    let mut out = Vec::with_capacity(frees.len());

    for f in frees {
        if !f.overlaps(&placed) {
            out.push(*f);
            continue;
        }

        if placed.x > f.x {
            out.push(FreeRect::new(f.x, f.y, placed.x - f.x, f.h));
        }
        if placed.right() < f.right() {
            out.push(FreeRect::new(placed.right(), f.y, f.right() - placed.right(), f.h));
        }
        if placed.y > f.y {
            out.push(FreeRect::new(f.x, f.y, f.w, placed.y - f.y));
        }
        if placed.bottom() < f.bottom() {
            out.push(FreeRect::new(f.x, placed.bottom(), f.w, f.bottom() - placed.bottom()));
        }
    }

    out
}

fn mergeable(a: &FreeRect, b: &FreeRect) -> Option<FreeRect> {
    if a.y == b.y && a.h == b.h && (a.right() == b.x || b.right() == a.x) {
        let x = a.x.min(b.x);
        return Some(FreeRect::new(x, a.y, a.w + b.w, a.h));
    }
    if a.x == b.x && a.w == b.w && (a.bottom() == b.y || b.bottom() == a.y) {
        let y = a.y.min(b.y);
        return Some(FreeRect::new(a.x, y, a.w, a.h + b.h));
    }
    None
}

/// Bounded greedy fixpoint: repeatedly merges any pair of free rects that
/// share a full edge exactly, until no merge applies (§4.3).
pub fn merge_colinear(mut frees: Vec<FreeRect>) -> Vec<FreeRect> {
    loop {
        let mut merged_pair = None;
        'search: for i in 0..frees.len() {
            for j in (i + 1)..frees.len() {
                if let Some(merged) = mergeable(&frees[i], &frees[j]) {
                    merged_pair = Some((i, j, merged));
                    break 'search;
                }
            }
        }

        match merged_pair {
            None => break,
            Some((i, j, merged)) => {
                // Remove the higher index first so the lower index stays valid.
                frees.remove(j);
                frees.remove(i);
                frees.push(merged);
            }
        }
    }

    frees
}

/// Drops any free rect with a dimension below `min_waste_size` (§4.3).
pub fn filter_small(frees: Vec<FreeRect>, min_waste_size: i64) -> Vec<FreeRect> {
    frees
        .into_iter()
        .filter(|r| r.w >= min_waste_size && r.h >= min_waste_size)
        .collect()
}
