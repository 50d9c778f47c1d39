//! Charts module - Map and bar chart rendering

mod plotter;

pub use plotter::{ChartPlotter, MapMarker};
