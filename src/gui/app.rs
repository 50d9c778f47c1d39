//! Asset Dashboard Main Application
//! Main window with the data source panel and the dashboard page.

use crate::charts::{ChartPlotter, MapMarker};
use crate::config::DashboardConfig;
use crate::data::{AssetTable, DataLoader, LoaderError};
use crate::gui::page::PageContent;
use crate::gui::{DataTable, KpiPanel, SourcePanel};
use crate::stats::DashboardViews;
use egui::{Color32, RichText, ScrollArea, SidePanel};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const ERROR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

/// Main application window.
pub struct DashboardApp {
    config: DashboardConfig,
    loader: DataLoader,
    source_panel: SourcePanel,

    /// The only user-controlled state: raw table visibility.
    show_raw_table: bool,
    map_needs_framing: bool,
    last_error: Option<String>,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        Self::with_config(config)
    }

    /// Initial state for `config`: raw table hidden, map framing pending.
    pub fn with_config(config: DashboardConfig) -> Self {
        Self {
            config,
            loader: DataLoader::new(),
            source_panel: SourcePanel::new(),
            show_raw_table: false,
            map_needs_framing: true,
            last_error: None,
        }
    }

    /// Update the source panel and log load failures once per distinct error.
    fn track_load(&mut self, loaded: &Result<Arc<AssetTable>, LoaderError>) {
        match loaded {
            Ok(table) => {
                if self.last_error.take().is_some() {
                    info!(path = %self.config.data_path.display(), "data file available");
                }
                self.source_panel.set_loaded(
                    table.row_count(),
                    table.column_count(),
                    self.loader.read_count(),
                );
            }
            Err(e) => {
                let message = format!("Error: {e}");
                if self.last_error.as_deref() != Some(message.as_str()) {
                    warn!("{e}");
                    self.last_error = Some(message.clone());
                }
                self.source_panel.set_failed(&message);
            }
        }
    }

    fn section_header(ui: &mut egui::Ui, text: &str) {
        ui.add_space(12.0);
        ui.label(RichText::new(text).size(20.0).strong());
        ui.add_space(6.0);
    }

    fn show_dashboard(
        &mut self,
        ui: &mut egui::Ui,
        table: &AssetTable,
        views: &DashboardViews<'_>,
        markers: &[MapMarker],
    ) {
        ui.label(
            RichText::new("🏛 Real Property Asset Analysis Dashboard")
                .size(28.0)
                .strong(),
        );
        ui.label(
            "An interactive dashboard for analyzing the value and distribution of real property assets.",
        );

        // ===== KPIs =====
        Self::section_header(ui, "📈 Portfolio Overview");
        KpiPanel::show(ui, &views.kpis);

        ui.add_space(10.0);
        ui.separator();

        // ===== Map =====
        Self::section_header(ui, "🗺 Geospatial Distribution of Assets");
        ChartPlotter::draw_asset_map(
            ui,
            markers,
            &self.config.map,
            &mut self.map_needs_framing,
        );

        // ===== State ranking =====
        Self::section_header(ui, "📊 Value Analysis by State");
        ui.label(
            RichText::new(format!(
                "Top {} States by Total Asset Value",
                self.config.top_states
            ))
            .size(15.0),
        );
        ChartPlotter::draw_state_bars(ui, &views.state_ranking);

        // ===== Raw data =====
        Self::section_header(ui, "📋 Explore the Data");
        ui.checkbox(&mut self.show_raw_table, "Show Raw Data Table");
        if self.show_raw_table {
            ui.add_space(6.0);
            DataTable::show(ui, table);
        }
        ui.add_space(20.0);
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll the data file even when the user is idle
        ctx.request_repaint_after(Duration::from_secs(self.config.refresh_secs.max(1)));

        let loaded = self.loader.load(&self.config.data_path);
        self.track_load(&loaded);

        // Left panel - Data source
        SidePanel::left("source_panel")
            .min_width(240.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                self.source_panel.show(ui, &self.config.data_path);
            });

        let page = PageContent::build(&loaded, self.config.top_states);

        // Central panel - Dashboard
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match &page {
                    PageContent::Failed(message) => {
                        ui.label(RichText::new(message).size(15.0).color(ERROR_COLOR));
                    }
                    PageContent::Ready {
                        table,
                        views,
                        markers,
                    } => self.show_dashboard(ui, table, views, markers),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_table_starts_hidden() {
        let app = DashboardApp::with_config(DashboardConfig::default());

        assert!(!app.show_raw_table);
        assert!(app.map_needs_framing);
        assert!(app.last_error.is_none());
    }

    #[test]
    fn failed_load_is_remembered_and_shown() {
        let mut app = DashboardApp::with_config(DashboardConfig::default());
        let missing: Result<Arc<AssetTable>, LoaderError> =
            Err(LoaderError::NotFound("gone.csv".into()));

        app.track_load(&missing);
        app.track_load(&missing);

        assert!(app.source_panel.failed);
        assert!(app
            .last_error
            .as_deref()
            .is_some_and(|m| m.contains("'gone.csv' was not found")));
    }
}
