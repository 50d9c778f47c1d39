//! GUI module - User interface components

mod app;
mod data_table;
pub mod format;
mod kpi_panel;
mod page;
mod source_panel;

pub use app::DashboardApp;
pub use data_table::DataTable;
pub use kpi_panel::KpiPanel;
pub use source_panel::SourcePanel;
