//! Stats module - portfolio aggregation

mod aggregator;

pub use aggregator::{DashboardViews, Kpis, StateTotal, TOP_STATES};
