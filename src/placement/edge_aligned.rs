//! Edge-aligned ("poignet") mode (§4.5): every placement touches the top or
//! bottom edge of the panel, and each row is filled left-to-right via a
//! cursor rather than a free-form Bottom-Left search.

use crate::free_rect::FreeRect;
use crate::piece::Piece;
use crate::placement::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeCandidate {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
    pub orientation: Orientation,
}

struct RowCandidate {
    x: i64,
    score: i64,
}

fn leftover(r: &FreeRect, pw: i64, ph: i64) -> i64 {
    (r.area() - pw * ph) / 1000
}

/// Scans free rects covering the top row's horizontal band `[0, ph]` for a
/// sequential-then-flexible candidate, per §4.5 step 2.
fn top_row_candidates(free_rects: &[FreeRect], pw: i64, ph: i64, top_x: i64, panel_width: i64) -> Vec<RowCandidate> {
    let mut out = Vec::new();
    for r in free_rects {
        if !(r.y <= 0 && r.y + r.h >= ph) {
            continue;
        }
        if r.x <= top_x && r.x + r.w >= top_x + pw && top_x + pw <= panel_width {
            out.push(RowCandidate {
                x: top_x,
                score: top_x * 100 + leftover(r, pw, ph),
            });
        } else {
            let x = r.x.max(top_x);
            if x + pw <= (r.x + r.w).min(panel_width) {
                out.push(RowCandidate {
                    x,
                    score: 10_000 + x * 100 + leftover(r, pw, ph),
                });
            }
        }
    }
    out
}

/// Same as [`top_row_candidates`] but for the bottom row's band
/// `[H-ph, H]`, with the score offsets that make top strictly preferred
/// (§4.5 step 3).
fn bottom_row_candidates(
    free_rects: &[FreeRect],
    pw: i64,
    ph: i64,
    bottom_x: i64,
    panel_width: i64,
    panel_height: i64,
) -> Vec<RowCandidate> {
    let band_top = panel_height - ph;
    let mut out = Vec::new();
    for r in free_rects {
        if !(r.y <= band_top && r.y + r.h >= panel_height) {
            continue;
        }
        if r.x <= bottom_x && r.x + r.w >= bottom_x + pw && bottom_x + pw <= panel_width {
            out.push(RowCandidate {
                x: bottom_x,
                score: 100_000 + bottom_x * 100 + leftover(r, pw, ph),
            });
        } else {
            let x = r.x.max(bottom_x);
            if x + pw <= (r.x + r.w).min(panel_width) {
                out.push(RowCandidate {
                    x,
                    score: 110_000 + x * 100 + leftover(r, pw, ph),
                });
            }
        }
    }
    out
}

/// Runs the top-row-then-bottom-row search for one fixed `(pw, ph)`
/// orientation. Bottom is only attempted when the top row has no candidate
/// at all (§4.5 step 3).
fn best_in_orientation(
    free_rects: &[FreeRect],
    pw: i64,
    ph: i64,
    top_x: i64,
    bottom_x: i64,
    panel_width: i64,
    panel_height: i64,
) -> Option<(Row, i64, i64)> {
    if ph > panel_height || pw > panel_width {
        return None;
    }

    let top = top_row_candidates(free_rects, pw, ph, top_x, panel_width);
    if let Some(best) = top.iter().min_by_key(|c| c.score) {
        return Some((Row::Top, best.x, best.score));
    }

    let bottom = bottom_row_candidates(free_rects, pw, ph, bottom_x, panel_width, panel_height);
    bottom
        .iter()
        .min_by_key(|c| c.score)
        .map(|best| (Row::Bottom, best.x, best.score))
}

/// Chooses a placement for `piece` under edge-aligned rules. Runs both
/// orientations when rotation is allowed and keeps the strictly better
/// score; ties keep the non-rotated orientation, mirroring free mode's rule.
pub fn choose(
    free_rects: &[FreeRect],
    piece: &Piece,
    top_x: i64,
    bottom_x: i64,
    panel_width: i64,
    panel_height: i64,
) -> Option<EdgeCandidate> {
    let original = best_in_orientation(free_rects, piece.w, piece.h, top_x, bottom_x, panel_width, panel_height)
        .map(|(row, x, score)| (row, x, score, piece.w, piece.h, Orientation::Original));

    let rotated = if piece.rotation_allowed {
        best_in_orientation(free_rects, piece.h, piece.w, top_x, bottom_x, panel_width, panel_height)
            .map(|(row, x, score)| (row, x, score, piece.h, piece.w, Orientation::Rotated))
    } else {
        None
    };

    let chosen = match (original, rotated) {
        (Some(o), Some(r)) => {
            if r.2 < o.2 {
                Some(r)
            } else {
                Some(o)
            }
        }
        (Some(o), None) => Some(o),
        (None, Some(r)) => Some(r),
        (None, None) => None,
    }?;

    let (row, x, _score, w, h, orientation) = chosen;
    let y = match row {
        Row::Top => 0,
        Row::Bottom => panel_height - h,
    };

    Some(EdgeCandidate { x, y, w, h, orientation })
}
