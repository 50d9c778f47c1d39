//! KPI Panel Widget
//! Three side-by-side portfolio metrics.

use super::format::{thousands, trillions};
use crate::stats::Kpis;
use egui::{Color32, RichText};

pub struct KpiPanel;

impl KpiPanel {
    /// Label and display text for each metric, left to right.
    pub fn metrics(kpis: &Kpis) -> [(&'static str, String); 3] {
        [
            ("Total Assets", thousands(kpis.total_assets as u64)),
            ("Total Estimated Value", trillions(kpis.total_value)),
            (
                "Assets with Valuation",
                thousands(kpis.assets_with_valuation as u64),
            ),
        ]
    }

    pub fn show(ui: &mut egui::Ui, kpis: &Kpis) {
        let metrics = Self::metrics(kpis);

        ui.columns(metrics.len(), |columns| {
            for (col, (label, value)) in columns.iter_mut().zip(metrics.iter()) {
                Self::metric_card(col, label, value);
            }
        });
    }

    fn metric_card(ui: &mut egui::Ui, label: &str, value: &str) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(label).size(13.0).color(Color32::GRAY));
                ui.add_space(4.0);
                ui.label(RichText::new(value).size(28.0).strong());
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_are_formatted_for_display() {
        let kpis = Kpis {
            total_assets: 8652,
            total_value: 1.0468e12,
            assets_with_valuation: 8593,
        };

        let metrics = KpiPanel::metrics(&kpis);

        assert_eq!(metrics[0], ("Total Assets", "8,652".to_string()));
        assert_eq!(metrics[1], ("Total Estimated Value", "$1.05 Trillion".to_string()));
        assert_eq!(metrics[2], ("Assets with Valuation", "8,593".to_string()));
    }
}
