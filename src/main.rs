//! Asset Dashboard - Real Property Asset Valuation Dashboard
//!
//! Loads a CSV of asset valuations and shows portfolio metrics, an asset
//! map, the top states by value and the raw data.

mod charts;
mod config;
mod data;
mod gui;
mod stats;

use config::{DashboardConfig, CONFIG_FILE};
use eframe::egui;
use gui::DashboardApp;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> eframe::Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let config = DashboardConfig::load_or_default(Path::new(CONFIG_FILE));
    info!(data_path = %config.data_path.display(), "starting asset dashboard");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("Real Property Asset Analysis Dashboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Asset Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, config)))),
    )
}
