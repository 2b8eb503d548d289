//! Free-mode placement: Bottom-Left Best Fit with rotation (§4.4).

use crate::free_rect::FreeRect;
use crate::piece::Piece;
use crate::placement::Orientation;

/// A chosen free rect (by index, per §9 — never by structural equality)
/// plus the oriented placement within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeFitCandidate {
    pub free_index: usize,
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
    pub orientation: Orientation,
}

/// Lexicographic `(y, x, leftover_area)` — a literal reading of the
/// coefficient-weighted score `y*100000 + x*100 + leftover/1000`: a plain
/// tuple comparison is exact where a floating-point total order could
/// invert dominance.
fn score(r: &FreeRect, pw: i64, ph: i64) -> (i64, i64, i64) {
    (r.y, r.x, r.area() - pw * ph)
}

/// Best (lowest-scoring) free rect that fits a `pw x ph` piece, or `None`.
/// Ties keep the first rect encountered (§4.4).
fn best_fit(free_rects: &[FreeRect], pw: i64, ph: i64) -> Option<(usize, (i64, i64, i64))> {
    let mut best: Option<(usize, (i64, i64, i64))> = None;

    for (index, r) in free_rects.iter().enumerate() {
        if !r.contains_size(pw, ph) {
            continue;
        }
        let s = score(r, pw, ph);
        let is_better = match &best {
            None => true,
            Some((_, current)) => s < *current,
        };
        if is_better {
            best = Some((index, s));
        }
    }

    best
}

/// Chooses a placement for `piece` among `free_rects`. Runs both
/// orientations when rotation is allowed and keeps the strictly better
/// score; ties keep the non-rotated orientation (§4.4).
pub fn choose(free_rects: &[FreeRect], piece: &Piece) -> Option<FreeFitCandidate> {
    let original = best_fit(free_rects, piece.w, piece.h);
    let rotated = if piece.rotation_allowed {
        best_fit(free_rects, piece.h, piece.w)
    } else {
        None
    };

    match (original, rotated) {
        (Some((oi, os)), Some((ri, rs))) => {
            if rs < os {
                Some(candidate(ri, free_rects[ri], piece.h, piece.w, Orientation::Rotated))
            } else {
                Some(candidate(oi, free_rects[oi], piece.w, piece.h, Orientation::Original))
            }
        }
        (Some((oi, _)), None) => Some(candidate(oi, free_rects[oi], piece.w, piece.h, Orientation::Original)),
        (None, Some((ri, _))) => Some(candidate(ri, free_rects[ri], piece.h, piece.w, Orientation::Rotated)),
        (None, None) => None,
    }
}

fn candidate(free_index: usize, r: FreeRect, w: i64, h: i64, orientation: Orientation) -> FreeFitCandidate {
    FreeFitCandidate {
        free_index,
        x: r.x,
        y: r.y,
        w,
        h,
        orientation,
    }
}
