//! End-to-end scenarios covering a full `optimize` run for each placement
//! mode: a single panel, a piece too large to ever place, several panels
//! opened back to back, and edge-aligned row filling.

use guillotine_core::{optimize, CuttingConfig, PanelSpec, PieceSpec, Settings};

fn piece(id: i64, w: i64, h: i64, qty: i64, rotation_allowed: bool) -> PieceSpec {
    PieceSpec {
        id,
        width: w,
        height: h,
        quantity: qty,
        rotation_allowed,
    }
}

#[test]
fn single_piece_lands_at_the_origin() {
    let config = CuttingConfig {
        panel: PanelSpec { width: 1000, height: 1000 },
        settings: Settings::default(),
        pieces: vec![piece(0, 200, 150, 1, false)],
    };

    let result = optimize(&config);
    assert_eq!(result.panels.len(), 1);
    let placement = result.panels[0].placed[0];
    assert_eq!((placement.x, placement.y, placement.w, placement.h), (0, 0, 200, 150));
    assert_eq!(result.stats.total_used_area, 30_000);
    assert_eq!(result.stats.total_panel_area, 1_000_000);
}

#[test]
fn bottom_left_scoring_stacks_two_pieces_vertically() {
    let config = CuttingConfig {
        panel: PanelSpec { width: 300, height: 300 },
        settings: Settings::default(),
        pieces: vec![piece(0, 250, 50, 1, true), piece(1, 250, 50, 1, true)],
    };

    let result = optimize(&config);
    assert_eq!(result.panels.len(), 1);
    let placed = &result.panels[0].placed;
    assert_eq!(placed.len(), 2);

    let first = placed.iter().find(|p| p.piece_id == 0).unwrap();
    let second = placed.iter().find(|p| p.piece_id == 1).unwrap();
    assert_eq!((first.x, first.y), (0, 0));
    assert_eq!((second.x, second.y), (0, 50));
    assert!(!first.rotated && !second.rotated);
}

#[test]
fn piece_too_large_for_the_panel_is_rejected_and_no_panel_is_opened() {
    let config = CuttingConfig {
        panel: PanelSpec { width: 100, height: 300 },
        settings: Settings::default(),
        pieces: vec![piece(0, 200, 50, 1, false)],
    };

    let result = optimize(&config);
    assert_eq!(result.panels.len(), 0);
    assert_eq!(result.rejected.len(), 1);
    assert_eq!(result.stats.panel_count, 0);
}

#[test]
fn pieces_wider_than_half_the_panel_each_get_their_own_panel() {
    let config = CuttingConfig {
        panel: PanelSpec { width: 1000, height: 1000 },
        settings: Settings::default(),
        pieces: vec![piece(0, 600, 600, 3, false)],
    };

    let result = optimize(&config);
    assert_eq!(result.panels.len(), 3);
    assert!(result.rejected.is_empty());
    for panel in &result.panels {
        assert_eq!(panel.placed.len(), 1);
    }
}

#[test]
fn edge_aligned_mode_packs_rows_against_top_and_bottom() {
    let config = CuttingConfig {
        panel: PanelSpec { width: 1000, height: 500 },
        settings: Settings {
            min_waste_size: 100,
            poignet_enabled: true,
        },
        pieces: vec![piece(0, 400, 100, 3, false)],
    };

    let result = optimize(&config);
    assert_eq!(result.panels.len(), 1);
    let placed = &result.panels[0].placed;
    assert_eq!(placed.len(), 3);

    let mut by_id = placed.to_vec();
    by_id.sort_by_key(|p| p.piece_id);
    assert_eq!((by_id[0].x, by_id[0].y), (0, 0));
    assert_eq!((by_id[1].x, by_id[1].y), (400, 0));
    assert_eq!((by_id[2].x, by_id[2].y), (0, 400));
}

#[test]
fn mixed_piece_sizes_back_fill_before_a_new_panel_opens() {
    let config = CuttingConfig {
        panel: PanelSpec { width: 1000, height: 1000 },
        settings: Settings::default(),
        pieces: vec![piece(0, 600, 600, 2, false), piece(1, 300, 300, 1, false)],
    };

    let result = optimize(&config);
    assert_eq!(result.panels.len(), 2);
    assert!(result.rejected.is_empty());

    let first_panel = result.panels.iter().find(|p| p.panel_index == 0).unwrap();
    assert_eq!(first_panel.placed.len(), 2, "the 300x300 piece should back-fill panel 0 instead of opening panel 2");
}

#[test]
fn invalid_panel_dimensions_degrade_to_an_empty_result() {
    let config = CuttingConfig {
        panel: PanelSpec { width: 0, height: 500 },
        settings: Settings::default(),
        pieces: vec![piece(0, 100, 100, 1, true)],
    };

    let result = optimize(&config);
    assert_eq!(result.panels.len(), 0);
    assert_eq!(result.rejected.len(), 0);
    assert_eq!(result.stats.waste_percentage, 100.0);
}

#[test]
fn invariants_hold_across_a_mixed_multi_panel_run() {
    // A mix of sizes and quantities that forces multiple panels and back-fill,
    // checked against every quantified invariant in spec.md §8 at once.
    let config = CuttingConfig {
        panel: PanelSpec { width: 1200, height: 800 },
        settings: Settings {
            min_waste_size: 80,
            poignet_enabled: false,
        },
        pieces: vec![
            piece(0, 500, 400, 3, true),
            piece(1, 300, 200, 5, true),
            piece(2, 900, 750, 1, false),
            piece(3, 150, 150, 8, true),
        ],
    };

    let result = optimize(&config);
    let (w, h) = (config.panel.width, config.panel.height);

    for panel in &result.panels {
        for p in &panel.placed {
            // Property 1: containment.
            assert!(p.x >= 0 && p.y >= 0 && p.x + p.w <= w && p.y + p.h <= h);
            assert_eq!(p.panel_index, panel.panel_index);
        }

        // Property 2: non-overlap between every pair of placements on a panel.
        for i in 0..panel.placed.len() {
            for j in (i + 1)..panel.placed.len() {
                let a = panel.placed[i];
                let b = panel.placed[j];
                let ra = guillotine_core::Rectangle::new(a.x, a.y, a.w, a.h);
                let rb = guillotine_core::Rectangle::new(b.x, b.y, b.w, b.h);
                assert!(!ra.overlaps(&rb), "placements {} and {} overlap", a.piece_id, b.piece_id);
            }
        }

        // Property 3/4: free rects stay disjoint from placements and above min_waste_size.
        for f in &panel.free_rects {
            assert!(f.w >= config.settings.min_waste_size && f.h >= config.settings.min_waste_size);
            for p in &panel.placed {
                let rp = guillotine_core::Rectangle::new(p.x, p.y, p.w, p.h);
                assert!(!f.overlaps(&rp));
            }
        }
    }

    // Property 5: conservation of piece count.
    let placed_count: usize = result.panels.iter().map(|p| p.placed.len()).sum();
    let expected_total: i64 = config.pieces.iter().map(|p| p.quantity).sum();
    assert_eq!(placed_count as i64 + result.rejected.len() as i64, expected_total);

    // Property 7: orientation consistency against the originating piece type.
    let all_placements: Vec<_> = result.panels.iter().flat_map(|p| p.placed.iter()).collect();
    for p in &all_placements {
        let spec = config.pieces.iter().find(|t| t.id == p.type_id).unwrap();
        if p.rotated {
            assert_eq!((p.w, p.h), (spec.height, spec.width));
        } else {
            assert_eq!((p.w, p.h), (spec.width, spec.height));
        }
    }

    // Property 8: area accounting.
    let total_used: i64 = all_placements.iter().map(|p| p.w * p.h).sum();
    assert_eq!(result.stats.total_used_area, total_used);
    assert_eq!(result.stats.total_panel_area, w * h * result.panels.len() as i64);
    assert_eq!(result.stats.total_waste_area, result.stats.total_panel_area - result.stats.total_used_area);
}

#[test]
fn determinism_across_structurally_equal_inputs() {
    let config = CuttingConfig {
        panel: PanelSpec { width: 1000, height: 1000 },
        settings: Settings::default(),
        pieces: vec![piece(0, 350, 220, 4, true), piece(1, 180, 90, 6, true)],
    };

    let first = optimize(&config);
    let second = optimize(&config);
    assert_eq!(first, second);
}

#[test]
fn rotation_is_applied_when_it_is_the_only_fit() {
    let config = CuttingConfig {
        panel: PanelSpec { width: 60, height: 300 },
        settings: Settings::default(),
        pieces: vec![piece(0, 300, 60, 1, true)],
    };

    let result = optimize(&config);
    assert_eq!(result.panels.len(), 1);
    let placement = result.panels[0].placed[0];
    assert!(placement.rotated);
    assert_eq!((placement.w, placement.h), (60, 300));
}
