//! Source Panel Widget
//! Left side panel describing the data file and its load status.

use super::format::thousands;
use egui::{Color32, RichText};
use std::path::Path;

/// Read-only summary of the current data source.
pub struct SourcePanel {
    pub rows: usize,
    pub columns: usize,
    pub reads: usize,
    pub status: String,
    pub failed: bool,
}

impl Default for SourcePanel {
    fn default() -> Self {
        Self {
            rows: 0,
            columns: 0,
            reads: 0,
            status: "Waiting for data".to_string(),
            failed: false,
        }
    }
}

impl SourcePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_loaded(&mut self, rows: usize, columns: usize, reads: usize) {
        self.rows = rows;
        self.columns = columns;
        self.reads = reads;
        self.status = format!("Loaded {} rows, {} columns", thousands(rows as u64), columns);
        self.failed = false;
    }

    pub fn set_failed(&mut self, message: &str) {
        self.rows = 0;
        self.columns = 0;
        self.status = message.to_string();
        self.failed = true;
    }

    /// Draw the source panel
    pub fn show(&self, ui: &mut egui::Ui, path: &Path) {
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🏛 Asset Dashboard")
                    .size(20.0)
                    .color(Color32::from_rgb(0, 123, 255)),
            );
            ui.label(
                RichText::new("Real Property Valuation")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(RichText::new(path.display().to_string()).size(12.0).monospace());
                if !self.failed {
                    ui.add_space(4.0);
                    egui::Grid::new("source_stats")
                        .num_columns(2)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("Rows:");
                            ui.label(thousands(self.rows as u64));
                            ui.end_row();
                            ui.label("Columns:");
                            ui.label(self.columns.to_string());
                            ui.end_row();
                            ui.label("File reads:");
                            ui.label(self.reads.to_string());
                            ui.end_row();
                        });
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        ui.label(RichText::new("📊 Status").size(14.0).strong());
        ui.add_space(5.0);

        let status_color = if self.failed {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::from_rgb(40, 167, 69)
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));
    }
}
