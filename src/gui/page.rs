//! What one render pass shows, decided before any widget is drawn.

use crate::charts::MapMarker;
use crate::data::{AssetTable, LoaderError};
use crate::stats::DashboardViews;
use std::sync::Arc;

pub enum PageContent<'a> {
    /// Load failed: only the message is shown, nothing is computed.
    Failed(String),
    Ready {
        table: &'a AssetTable,
        views: DashboardViews<'a>,
        markers: Vec<MapMarker>,
    },
}

impl<'a> PageContent<'a> {
    pub fn build(loaded: &'a Result<Arc<AssetTable>, LoaderError>, top_states: usize) -> Self {
        match loaded {
            Err(e) => Self::Failed(format!("Error: {e}")),
            Ok(table) => {
                let views = DashboardViews::compute(table, top_states);
                let markers = views
                    .map_points
                    .iter()
                    .filter_map(|record| MapMarker::from_record(record))
                    .collect();
                Self::Ready {
                    table: table.as_ref(),
                    views,
                    markers,
                }
            }
        }
    }
}
