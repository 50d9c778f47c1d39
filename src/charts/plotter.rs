//! Chart Plotter Module
//! Draws the asset map and the state ranking bar chart with egui_plot.

use crate::config::MapConfig;
use crate::data::AssetRecord;
use crate::gui::format::{compact_usd, thousands_f64};
use crate::stats::StateTotal;
use egui::Color32;
use egui_plot::{Bar, BarChart, Legend, MarkerShape, Plot, PlotBounds, PlotPoints, Points};

/// Qualitative palette, one colour per ranked state.
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(99, 110, 250),  // Blue
    Color32::from_rgb(239, 85, 59),   // Red
    Color32::from_rgb(0, 204, 150),   // Green
    Color32::from_rgb(171, 99, 250),  // Purple
    Color32::from_rgb(255, 161, 90),  // Orange
    Color32::from_rgb(25, 211, 243),  // Cyan
    Color32::from_rgb(255, 102, 146), // Pink
    Color32::from_rgb(182, 232, 128), // Lime
    Color32::from_rgb(255, 151, 255), // Magenta
    Color32::from_rgb(254, 203, 82),  // Yellow
];

const MARKER_SERIES: &str = "assets";
const BAR_CHART_HEIGHT: f32 = 420.0;
const BAR_WIDTH: f64 = 0.7;
/// Slippy-map tile edge in pixels
const TILE_SIZE: f64 = 256.0;

/// One map marker with its hover label.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub longitude: f64,
    pub latitude: f64,
    pub label: String,
}

impl MapMarker {
    /// Build a marker from a mappable record. Returns `None` otherwise.
    pub fn from_record(record: &AssetRecord) -> Option<Self> {
        let (latitude, longitude, value) = (record.latitude?, record.longitude?, record.value?);
        Some(Self {
            longitude,
            latitude,
            label: format!(
                "{}\nValue: ${}",
                record.name.as_deref().unwrap_or_default(),
                thousands_f64(value)
            ),
        })
    }
}

/// Creates the dashboard charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Colour for the state at `rank` in the bar chart.
    pub fn state_color(rank: usize) -> Color32 {
        PALETTE[rank % PALETTE.len()]
    }

    /// Longitude/latitude box seen at the configured centre and zoom.
    ///
    /// Follows web-map scaling: at zoom `z` one 256px tile spans
    /// `360 / 2^z` degrees of longitude; latitude is squeezed by the
    /// cosine of the centre latitude.
    pub fn initial_bounds(map: &MapConfig) -> ([f64; 2], [f64; 2]) {
        let degrees_per_tile = 360.0 / 2f64.powi(map.zoom as i32);
        let lon_span = degrees_per_tile * map.width as f64 / TILE_SIZE;
        let lat_span =
            lon_span * (map.height as f64 / map.width as f64) * map.center_lat.to_radians().cos();

        (
            [map.center_lon - lon_span / 2.0, map.center_lat - lat_span / 2.0],
            [map.center_lon + lon_span / 2.0, map.center_lat + lat_span / 2.0],
        )
    }

    /// Labels of every marker at exactly this point, joined in file order.
    /// Co-located assets each keep their own name and value.
    pub fn labels_at(markers: &[MapMarker], longitude: f64, latitude: f64) -> Option<String> {
        let labels: Vec<&str> = markers
            .iter()
            .filter(|m| m.longitude == longitude && m.latitude == latitude)
            .map(|m| m.label.as_str())
            .collect();

        if labels.is_empty() {
            None
        } else {
            Some(labels.join("\n\n"))
        }
    }

    /// Draw one circle marker per asset. `needs_framing` applies the
    /// configured centre and zoom once, then is cleared so the user's
    /// pan and zoom survive later passes.
    pub fn draw_asset_map(
        ui: &mut egui::Ui,
        markers: &[MapMarker],
        map: &MapConfig,
        needs_framing: &mut bool,
    ) {
        let [r, g, b] = map.marker_color;
        let color = Color32::from_rgb(r, g, b);
        let (min, max) = Self::initial_bounds(map);

        let positions: PlotPoints = markers.iter().map(|m| [m.longitude, m.latitude]).collect();
        let labels = markers.to_vec();

        Plot::new("asset_map")
            .width(map.width)
            .height(map.height)
            .x_axis_label("Longitude")
            .y_axis_label("Latitude")
            .allow_scroll(false)
            .label_formatter(move |name, value| {
                if name == MARKER_SERIES {
                    if let Some(label) = Self::labels_at(&labels, value.x, value.y) {
                        return label;
                    }
                }
                format!("{:.4}, {:.4}", value.y, value.x)
            })
            .show(ui, |plot_ui| {
                if *needs_framing {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max(min, max));
                    *needs_framing = false;
                }

                plot_ui.points(
                    Points::new(positions)
                        .name(MARKER_SERIES)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(map.marker_radius)
                        .color(color),
                );
            });
    }

    /// Draw one coloured bar per ranked state.
    pub fn draw_state_bars(ui: &mut egui::Ui, ranking: &[StateTotal]) {
        let x_labels: Vec<String> = ranking.iter().map(|s| s.state.clone()).collect();

        Plot::new("state_ranking")
            .height(BAR_CHART_HEIGHT)
            .legend(Legend::default())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label("State")
            .y_axis_label("Total Estimated Value (USD)")
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                    return String::new();
                }
                x_labels.get(idx as usize).cloned().unwrap_or_default()
            })
            .y_axis_formatter(|mark, _range| compact_usd(mark.value))
            .show(ui, |plot_ui| {
                for (i, entry) in ranking.iter().enumerate() {
                    let color = Self::state_color(i);
                    let bar = Bar::new(i as f64, entry.total_value)
                        .name(&entry.state)
                        .width(BAR_WIDTH)
                        .fill(color);

                    plot_ui.bar_chart(
                        BarChart::new(vec![bar])
                            .name(&entry.state)
                            .color(color)
                            .element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| {
                                format!("{}\n${}", bar.name, thousands_f64(bar.value))
                            })),
                    );
                }
            });
    }
}
