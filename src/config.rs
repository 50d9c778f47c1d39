//! Dashboard configuration with built-in defaults and an optional
//! `dashboard.json` override.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE: &str = "dashboard.json";
pub const DEFAULT_DATA_PATH: &str = "cleaned_asset_valuation.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub map: MapConfig,
    pub top_states: usize,
    /// Seconds between repaints that re-check the data file.
    pub refresh_secs: u64,
}

/// Initial framing and marker style of the asset map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    pub width: f32,
    pub height: f32,
    pub marker_radius: f32,
    pub marker_color: [u8; 3],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            map: MapConfig::default(),
            top_states: crate::stats::TOP_STATES,
            refresh_secs: 2,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        // Geographic centre of the contiguous US
        Self {
            center_lat: 39.8283,
            center_lon: -98.5795,
            zoom: 4,
            width: 725.0,
            height: 500.0,
            marker_radius: 5.0,
            marker_color: [0x00, 0x7b, 0xff],
        }
    }
}

impl DashboardConfig {
    /// Read `path` if it exists. `Ok(None)` means no override file.
    pub fn from_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(Some(config.clamped()))
    }

    /// Keep the map plot at least one pixel in each direction.
    fn clamped(mut self) -> Self {
        self.map.width = self.map.width.max(1.0);
        self.map.height = self.map.height.max(1.0);
        self
    }

    /// Defaults, overridden by `path` when present and valid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(Some(config)) => {
                info!(path = %path.display(), "using dashboard config");
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("{e:#}; falling back to defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_point_at_cleaned_csv() {
        let config = DashboardConfig::default();
        assert_eq!(config.data_path, PathBuf::from("cleaned_asset_valuation.csv"));
        assert_eq!(config.top_states, 10);
        assert_eq!(config.map.zoom, 4);
        assert_eq!(config.map.marker_color, [0, 123, 255]);
    }

    #[test]
    fn absent_file_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let loaded = DashboardConfig::from_file(&dir.path().join(CONFIG_FILE)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "data_path": "other.csv", "map": { "zoom": 6 } }"#).unwrap();

        let config = DashboardConfig::load_or_default(&path);

        assert_eq!(config.data_path, PathBuf::from("other.csv"));
        assert_eq!(config.map.zoom, 6);
        assert_eq!(config.map.center_lat, 39.8283);
        assert_eq!(config.refresh_secs, 2);
    }

    #[test]
    fn zero_sized_map_is_clamped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "map": { "width": 0, "height": -5 } }"#).unwrap();

        let config = DashboardConfig::load_or_default(&path);

        assert_eq!(config.map.width, 1.0);
        assert_eq!(config.map.height, 1.0);
        let (min, max) = crate::charts::ChartPlotter::initial_bounds(&config.map);
        assert!(min.iter().chain(max.iter()).all(|v| v.is_finite()));
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        assert!(DashboardConfig::from_file(&path).is_err());
        assert_eq!(DashboardConfig::load_or_default(&path), DashboardConfig::default());
    }
}
