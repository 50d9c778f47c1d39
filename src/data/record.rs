//! Asset Record Module
//! Typed view over the loaded asset valuation table.

use super::LoaderError;
use polars::prelude::*;

pub const NAME_COL: &str = "Real Property Asset Name";
pub const STATE_COL: &str = "State";
pub const LATITUDE_COL: &str = "Latitude";
pub const LONGITUDE_COL: &str = "Longitude";
pub const VALUE_COL: &str = "Estimated Asset Value (USD)";
pub const MISSING_VALUATION_COL: &str = "Missing Valuation";

/// One real-property asset, one row of the input file.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRecord {
    pub name: Option<String>,
    pub state: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub value: Option<f64>,
    pub missing_valuation: Option<bool>,
}

impl AssetRecord {
    /// True when the record can be placed on the map.
    pub fn is_mappable(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some() && self.value.is_some()
    }
}

/// The loaded table: typed records for aggregation plus the raw frame
/// with every column of the file for display.
#[derive(Debug, Clone)]
pub struct AssetTable {
    records: Vec<AssetRecord>,
    frame: DataFrame,
}

impl AssetTable {
    /// Build the typed view from a freshly read DataFrame.
    pub fn from_frame(frame: DataFrame) -> Result<Self, LoaderError> {
        let names = string_column(&frame, NAME_COL)?;
        let states = string_column(&frame, STATE_COL)?;
        let latitudes = float_column(&frame, LATITUDE_COL)?;
        let longitudes = float_column(&frame, LONGITUDE_COL)?;
        let values = float_column(&frame, VALUE_COL)?;
        let flags = string_column(&frame, MISSING_VALUATION_COL)?;

        let records = names
            .into_iter()
            .zip(states)
            .zip(latitudes.into_iter().zip(longitudes))
            .zip(values.into_iter().zip(flags))
            .map(
                |(((name, state), (latitude, longitude)), (value, flag))| AssetRecord {
                    name,
                    state,
                    latitude,
                    longitude,
                    value,
                    missing_valuation: flag.as_deref().and_then(parse_flag),
                },
            )
            .collect();

        Ok(Self { records, frame })
    }

    pub fn records(&self) -> &[AssetRecord] {
        &self.records
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    pub fn column_count(&self) -> usize {
        self.frame.width()
    }

    /// Display text for one cell of the raw table. Nulls render empty.
    pub fn cell_text(&self, row: usize, column: usize) -> String {
        self.frame
            .get_columns()
            .get(column)
            .and_then(|col| col.as_materialized_series().get(row).ok())
            .map(|val| {
                if val.is_null() {
                    String::new()
                } else {
                    val.to_string().trim_matches('"').to_string()
                }
            })
            .unwrap_or_default()
    }
}

/// Parse a boolean-like cell. Unrecognized text is treated as unknown.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

fn series<'a>(frame: &'a DataFrame, name: &str) -> Result<&'a Series, LoaderError> {
    frame
        .column(name)
        .map(|col| col.as_materialized_series())
        .map_err(|_| LoaderError::MissingColumn(name.to_string()))
}

fn string_column(frame: &DataFrame, name: &str) -> Result<Vec<Option<String>>, LoaderError> {
    let as_text = series(frame, name)?.cast(&DataType::String)?;
    let values = as_text
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect();
    Ok(values)
}

fn float_column(frame: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, LoaderError> {
    let as_f64 = series(frame, name)?.cast(&DataType::Float64)?;
    let values = as_f64
        .f64()?
        .into_iter()
        .map(|v| v.filter(|x| !x.is_nan()))
        .collect();
    Ok(values)
}
