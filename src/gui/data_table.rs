//! Raw Data Table Widget
//! Every column of the loaded file, rows virtualised inside a scroll area.

use super::format::thousands;
use crate::data::AssetTable;
use egui::{Color32, Label, RichText, ScrollArea};

const ROW_HEIGHT: f32 = 20.0;
const INDEX_WIDTH: f32 = 56.0;
const CELL_WIDTH: f32 = 170.0;
const MAX_HEIGHT: f32 = 420.0;

pub struct DataTable;

impl DataTable {
    pub fn show(ui: &mut egui::Ui, table: &AssetTable) {
        let columns = table.column_names();

        ui.label(
            RichText::new(format!(
                "{} rows x {} columns",
                thousands(table.row_count() as u64),
                columns.len()
            ))
            .size(11.0)
            .color(Color32::GRAY),
        );
        ui.add_space(4.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ScrollArea::horizontal()
                    .id_salt("raw_table_columns")
                    .show(ui, |ui| {
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                Self::cell(ui, INDEX_WIDTH, RichText::new(""));
                                for name in &columns {
                                    Self::cell(ui, CELL_WIDTH, RichText::new(name).strong());
                                }
                            });
                            ui.separator();

                            ScrollArea::vertical()
                                .id_salt("raw_table_rows")
                                .max_height(MAX_HEIGHT)
                                .show_rows(ui, ROW_HEIGHT, table.row_count(), |ui, rows| {
                                    for row in rows {
                                        ui.horizontal(|ui| {
                                            Self::cell(
                                                ui,
                                                INDEX_WIDTH,
                                                RichText::new(row.to_string())
                                                    .color(Color32::GRAY),
                                            );
                                            for col in 0..columns.len() {
                                                Self::cell(
                                                    ui,
                                                    CELL_WIDTH,
                                                    RichText::new(table.cell_text(row, col)),
                                                );
                                            }
                                        });
                                    }
                                });
                        });
                    });
            });
    }

    fn cell(ui: &mut egui::Ui, width: f32, text: RichText) {
        ui.add_sized([width, ROW_HEIGHT], Label::new(text.size(12.0)).truncate());
    }
}
