//! Portfolio Aggregator Module
//! Derives the KPI, map and state ranking views from the asset table.

use crate::data::{AssetRecord, AssetTable};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Number of states shown in the ranking chart
pub const TOP_STATES: usize = 10;

/// Headline metrics for the whole portfolio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kpis {
    pub total_assets: usize,
    /// Sum over every record with a value, including missing-valuation ones.
    pub total_value: f64,
    pub assets_with_valuation: usize,
}

/// Summed value for one state code.
#[derive(Debug, Clone, PartialEq)]
pub struct StateTotal {
    pub state: String,
    pub total_value: f64,
}

/// All views rendered in one pass, borrowed from the cached table.
#[derive(Debug, Clone)]
pub struct DashboardViews<'a> {
    pub kpis: Kpis,
    pub map_points: Vec<&'a AssetRecord>,
    pub state_ranking: Vec<StateTotal>,
}

impl<'a> DashboardViews<'a> {
    pub fn compute(table: &'a AssetTable, top_states: usize) -> Self {
        Self {
            kpis: Aggregator::kpis(table),
            map_points: Aggregator::map_subset(table),
            state_ranking: Aggregator::state_ranking(table, top_states),
        }
    }
}

/// Pure computations over the loaded table.
pub struct Aggregator;

impl Aggregator {
    pub fn kpis(table: &AssetTable) -> Kpis {
        let records = table.records();

        Kpis {
            total_assets: records.len(),
            total_value: records.iter().filter_map(|r| r.value).sum(),
            assets_with_valuation: records
                .iter()
                .filter(|r| r.missing_valuation == Some(false))
                .count(),
        }
    }

    /// Records with latitude, longitude and value present, in file order.
    pub fn map_subset(table: &AssetTable) -> Vec<&AssetRecord> {
        table.records().iter().filter(|r| r.is_mappable()).collect()
    }

    /// Sum values per state and keep the `limit` largest, descending.
    ///
    /// Groups are emitted in ascending state-code order before a stable
    /// sort, so equal sums always come out in code order. Records without
    /// a state code are not grouped.
    pub fn state_ranking(table: &AssetTable, limit: usize) -> Vec<StateTotal> {
        let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
        for record in table.records() {
            if let Some(state) = record.state.as_deref() {
                *sums.entry(state).or_insert(0.0) += record.value.unwrap_or(0.0);
            }
        }

        let mut ranking: Vec<StateTotal> = sums
            .into_iter()
            .map(|(state, total_value)| StateTotal {
                state: state.to_string(),
                total_value,
            })
            .collect();

        ranking.sort_by(|a, b| {
            b.total_value
                .partial_cmp(&a.total_value)
                .unwrap_or(Ordering::Equal)
        });
        ranking.truncate(limit);
        ranking
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;

    #[test]
    fn scenario_views() {
        let table = fixtures::scenario();
        let views = DashboardViews::compute(&table, TOP_STATES);

        assert_eq!(
            views.kpis,
            Kpis {
                total_assets: 3,
                total_value: 350.0,
                assets_with_valuation: 2,
            }
        );

        let names: Vec<_> = views
            .map_points
            .iter()
            .map(|r| r.name.as_deref().unwrap_or(""))
            .collect();
        assert_eq!(names, vec!["Alpha", "Gamma"]);

        assert_eq!(
            views.state_ranking,
            vec![
                StateTotal {
                    state: "TX".into(),
                    total_value: 200.0
                },
                StateTotal {
                    state: "CA".into(),
                    total_value: 150.0
                },
            ]
        );
    }

    #[test]
    fn total_value_includes_missing_valuation_rows() {
        let table = fixtures::table(&[
            ("A", Some("CA"), None, None, Some(10.0), Some(true)),
            ("B", Some("CA"), None, None, Some(5.0), Some(true)),
            ("C", Some("CA"), None, None, None, Some(false)),
        ]);
        let kpis = Aggregator::kpis(&table);

        assert_eq!(kpis.total_assets, 3);
        assert_eq!(kpis.total_value, 15.0);
        assert_eq!(kpis.assets_with_valuation, 1);
    }

    #[test]
    fn unknown_flag_is_not_counted_as_valued() {
        let table = fixtures::table(&[
            ("A", Some("CA"), None, None, Some(1.0), None),
            ("B", Some("CA"), None, None, Some(1.0), Some(false)),
        ]);
        assert_eq!(Aggregator::kpis(&table).assets_with_valuation, 1);
    }

    #[test]
    fn map_subset_requires_all_three_fields() {
        let table = fixtures::table(&[
            ("lat", Some("CA"), None, Some(1.0), Some(1.0), Some(false)),
            ("lon", Some("CA"), Some(1.0), None, Some(1.0), Some(false)),
            ("val", Some("CA"), Some(1.0), Some(1.0), None, Some(false)),
            ("ok1", Some("CA"), Some(1.0), Some(1.0), Some(1.0), Some(true)),
            ("ok2", Some("NY"), Some(2.0), Some(2.0), Some(0.0), Some(false)),
        ]);
        let subset = Aggregator::map_subset(&table);

        let names: Vec<_> = subset
            .iter()
            .map(|r| r.name.as_deref().unwrap_or(""))
            .collect();
        assert_eq!(names, vec!["ok1", "ok2"]);
        assert!(subset.iter().all(|r| r.is_mappable()));
    }

    #[test]
    fn ranking_keeps_top_ten_descending() {
        let codes = [
            "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID",
        ];
        let rows: Vec<fixtures::Row<'_>> = codes
            .iter()
            .enumerate()
            .map(|(i, code)| ("x", Some(*code), None, None, Some(i as f64 * 10.0), Some(false)))
            .collect();
        let table = fixtures::table(&rows);

        let ranking = Aggregator::state_ranking(&table, TOP_STATES);

        assert_eq!(ranking.len(), TOP_STATES);
        assert_eq!(ranking[0].state, "ID");
        assert_eq!(ranking[9].state, "AZ");
        assert!(ranking
            .windows(2)
            .all(|w| w[0].total_value >= w[1].total_value));
    }

    #[test]
    fn ranking_sums_match_per_state_totals() {
        let table = fixtures::table(&[
            ("a", Some("NY"), None, None, Some(7.0), Some(false)),
            ("b", Some("CA"), Some(1.0), Some(1.0), Some(3.0), Some(true)),
            ("c", Some("NY"), None, None, None, None),
            ("d", None, None, None, Some(1000.0), Some(false)),
            ("e", Some("CA"), None, None, Some(2.0), Some(false)),
        ]);
        let ranking = Aggregator::state_ranking(&table, TOP_STATES);

        for entry in &ranking {
            let expected: f64 = table
                .records()
                .iter()
                .filter(|r| r.state.as_deref() == Some(entry.state.as_str()))
                .filter_map(|r| r.value)
                .sum();
            assert_eq!(entry.total_value, expected);
        }
        assert_eq!(ranking.len(), 2);
    }

    #[test]
    fn ties_come_out_in_state_code_order() {
        let table = fixtures::table(&[
            ("a", Some("TX"), None, None, Some(5.0), Some(false)),
            ("b", Some("CA"), None, None, Some(5.0), Some(false)),
            ("c", Some("NV"), None, None, Some(5.0), Some(false)),
        ]);

        for _ in 0..3 {
            let order: Vec<_> = Aggregator::state_ranking(&table, TOP_STATES)
                .into_iter()
                .map(|s| s.state)
                .collect();
            assert_eq!(order, vec!["CA", "NV", "TX"]);
        }
    }

    #[test]
    fn empty_table_yields_empty_views() {
        let table = fixtures::table(&[]);
        let views = DashboardViews::compute(&table, TOP_STATES);

        assert_eq!(views.kpis.total_assets, 0);
        assert_eq!(views.kpis.total_value, 0.0);
        assert!(views.map_points.is_empty());
        assert!(views.state_ranking.is_empty());
    }
}
