//! Statistics & result assembly (§3, §8 property 8).

use serde::{Deserialize, Serialize};

use crate::config::{PanelSpec, Settings};
use crate::result::PanelResult;

/// Aggregate statistics over every panel a single `optimize` call produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub panel_count: usize,
    pub total_used_area: i64,
    pub total_waste_area: i64,
    pub total_panel_area: i64,
    pub used_percentage: f64,
    pub waste_percentage: f64,
    /// Sum of the area of every free rect surviving in the final panels —
    /// residual off-cuts large enough (per `min_waste_size`) to be reusable.
    pub usable_waste_area: i64,
    pub min_waste_size: i64,
}

impl Stats {
    /// The degenerate stats for the invalid-input case (§7): no panels were
    /// opened, so nothing was used and the panel is reported as 100% waste.
    pub fn invalid() -> Self {
        Self {
            panel_count: 0,
            total_used_area: 0,
            total_waste_area: 0,
            total_panel_area: 0,
            used_percentage: 0.0,
            waste_percentage: 100.0,
            usable_waste_area: 0,
            min_waste_size: 0,
        }
    }

    /// Computes aggregate statistics from the panels a completed run produced.
    pub fn compute(panels: &[PanelResult], panel: &PanelSpec, settings: &Settings) -> Self {
        let panel_count = panels.len();
        let panel_area = panel.width * panel.height;
        let total_panel_area = panel_area * panel_count as i64;

        let total_used_area: i64 = panels
            .iter()
            .flat_map(|p| p.placed.iter())
            .map(|p| p.area())
            .sum();

        let usable_waste_area: i64 = panels
            .iter()
            .flat_map(|p| p.free_rects.iter())
            .map(|r| r.area())
            .sum();

        let total_waste_area = total_panel_area - total_used_area;

        let (used_percentage, waste_percentage) = if total_panel_area > 0 {
            (
                100.0 * total_used_area as f64 / total_panel_area as f64,
                100.0 * total_waste_area as f64 / total_panel_area as f64,
            )
        } else {
            (0.0, 100.0)
        };

        Self {
            panel_count,
            total_used_area,
            total_waste_area,
            total_panel_area,
            used_percentage,
            waste_percentage,
            usable_waste_area,
            min_waste_size: settings.min_waste_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Placement;

    #[test]
    fn invalid_stats_report_full_waste() {
        let stats = Stats::invalid();
        assert_eq!(stats.panel_count, 0);
        assert_eq!(stats.used_percentage, 0.0);
        assert_eq!(stats.waste_percentage, 100.0);
    }

    #[test]
    fn compute_reports_area_accounting() {
        let panel = PanelSpec { width: 1000, height: 1000 };
        let settings = Settings::default();
        let panels = vec![PanelResult {
            panel_index: 0,
            placed: vec![Placement {
                x: 0,
                y: 0,
                w: 200,
                h: 150,
                piece_id: 0,
                type_id: 0,
                rotated: false,
                panel_index: 0,
            }],
            free_rects: vec![],
        }];

        let stats = Stats::compute(&panels, &panel, &settings);
        assert_eq!(stats.panel_count, 1);
        assert_eq!(stats.total_panel_area, 1_000_000);
        assert_eq!(stats.total_used_area, 30_000);
        assert_eq!(stats.total_waste_area, 970_000);
        assert_eq!(stats.used_percentage, 3.0);
        assert_eq!(stats.waste_percentage, 97.0);
    }

    #[test]
    fn compute_of_zero_panels_has_zero_percentages_but_full_waste() {
        let panel = PanelSpec { width: 1000, height: 1000 };
        let settings = Settings::default();
        let stats = Stats::compute(&[], &panel, &settings);
        assert_eq!(stats.total_panel_area, 0);
        assert_eq!(stats.waste_percentage, 100.0);
    }
}
