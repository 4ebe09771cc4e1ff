use std::cmp::Ordering;
use std::str::FromStr;

use super::config::ScoringConfig;
use super::rca::{calculate_final_score, calculate_productivity_score};
use super::trend::calculate_trend;
use crate::model::{Commodity, CommodityCategory, CommodityWithAnalysis};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    Rca,
    Productivity,
    #[default]
    Final,
    Name,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rca" => Ok(SortBy::Rca),
            "productivity" => Ok(SortBy::Productivity),
            "final" => Ok(SortBy::Final),
            "name" => Ok(SortBy::Name),
            other => Err(format!("unknown sort key '{}' (rca, productivity, final, name)", other)),
        }
    }
}

/// Derive trend, productivity score and final score for one commodity.
///
/// The input is not modified; the returned value owns a copy of it.
pub fn enrich_commodity_with_analysis(
    commodity: &Commodity,
    config: &ScoringConfig,
) -> CommodityWithAnalysis {
    let trend = calculate_trend(&commodity.historical);
    let productivity_score = calculate_productivity_score(
        commodity.data.productivity_rate,
        config.national_average_productivity,
    );
    let final_score = calculate_final_score(
        commodity.rca_data.rca_score,
        productivity_score,
        &config.weights,
    );

    CommodityWithAnalysis {
        commodity: commodity.clone(),
        trend,
        productivity_score,
        final_score,
    }
}

pub fn enrich_all(commodities: &[Commodity], config: &ScoringConfig) -> Vec<CommodityWithAnalysis> {
    commodities
        .iter()
        .map(|c| enrich_commodity_with_analysis(c, config))
        .collect()
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Return a new list sorted by `sort_by`. Scores sort descending, names
/// ascending. Ties keep their input order.
pub fn rank_commodities(
    commodities: &[CommodityWithAnalysis],
    sort_by: SortBy,
) -> Vec<CommodityWithAnalysis> {
    let mut ranked = commodities.to_vec();
    ranked.sort_by(|a, b| match sort_by {
        SortBy::Rca => descending(a.rca_score(), b.rca_score()),
        SortBy::Productivity => descending(a.productivity_score, b.productivity_score),
        SortBy::Final => descending(a.final_score, b.final_score),
        SortBy::Name => a
            .commodity
            .name
            .to_lowercase()
            .cmp(&b.commodity.name.to_lowercase()),
    });
    ranked
}

/// Keep commodities with RCA >= `min_rca`, optionally truncated to `limit`.
///
/// Input order is kept, so rank first if the top entries should be the best ones.
pub fn filter_top_commodities(
    commodities: &[CommodityWithAnalysis],
    min_rca: f64,
    limit: Option<usize>,
) -> Vec<CommodityWithAnalysis> {
    let filtered = commodities.iter().filter(|c| c.rca_score() >= min_rca).cloned();
    match limit {
        Some(n) if n > 0 => filtered.take(n).collect(),
        _ => filtered.collect(),
    }
}

/// Browse filters for a commodity listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommodityFilter {
    pub category: Option<CommodityCategory>,
    /// Applied only when > 0
    pub min_rca: f64,
    /// Case-insensitive substring match on the name
    pub search: Option<String>,
    pub sort_by: SortBy,
}

impl CommodityFilter {
    pub fn apply(&self, commodities: &[CommodityWithAnalysis]) -> Vec<CommodityWithAnalysis> {
        let query = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        let filtered: Vec<CommodityWithAnalysis> = commodities
            .iter()
            .filter(|c| self.category.map_or(true, |cat| c.commodity.category == cat))
            .filter(|c| self.min_rca <= 0.0 || c.rca_score() >= self.min_rca)
            .filter(|c| match &query {
                Some(q) => c.commodity.name.to_lowercase().contains(q),
                None => true,
            })
            .cloned()
            .collect();

        rank_commodities(&filtered, self.sort_by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CommodityData, HistoricalData, RcaData, TrendDirection};
    use approx::assert_relative_eq;

    fn sample_commodity(id: &str, name: &str, rca: f64, productivity: f64) -> Commodity {
        Commodity {
            id: id.to_string(),
            name: name.to_string(),
            category: CommodityCategory::Pertanian,
            region_id: "kalteng-kotim".to_string(),
            data: CommodityData {
                production: 1000.0,
                land_area: 200.0,
                economic_value: 5_000_000.0,
                productivity_rate: productivity,
            },
            historical: vec![
                HistoricalData { year: 2021, production: 900.0, land_area: 200.0, economic_value: 4_000_000.0 },
                HistoricalData { year: 2022, production: 950.0, land_area: 200.0, economic_value: 4_500_000.0 },
                HistoricalData { year: 2023, production: 1000.0, land_area: 200.0, economic_value: 5_000_000.0 },
            ],
            rca_data: RcaData {
                regional_production: 1000.0,
                national_production: 50000.0,
                regional_total: 10000.0,
                national_total: 1_000_000.0,
                rca_score: rca,
            },
        }
    }

    fn analyzed(id: &str, final_score: f64) -> CommodityWithAnalysis {
        CommodityWithAnalysis {
            commodity: sample_commodity(id, id, 1.0, 5.0),
            trend: TrendDirection::Stable,
            productivity_score: 100.0,
            final_score,
        }
    }

    #[test]
    fn test_enrich_derives_fields() {
        let commodity = sample_commodity("padi", "Padi", 5.0, 5.0);
        let result = enrich_commodity_with_analysis(&commodity, &ScoringConfig::default());
        assert_eq!(result.trend, TrendDirection::Up);
        assert_relative_eq!(result.productivity_score, 100.0);
        assert_relative_eq!(result.final_score, 50.0);
        assert_eq!(result.commodity, commodity);
    }

    #[test]
    fn test_enrich_is_deterministic() {
        let commodity = sample_commodity("padi", "Padi", 2.3, 4.1);
        let config = ScoringConfig::default();
        assert_eq!(
            enrich_commodity_with_analysis(&commodity, &config),
            enrich_commodity_with_analysis(&commodity, &config)
        );
    }

    #[test]
    fn test_rank_by_final_descending() {
        let list = vec![analyzed("a", 10.0), analyzed("b", 50.0), analyzed("c", 30.0)];
        let ranked = rank_commodities(&list, SortBy::Final);
        let scores: Vec<f64> = ranked.iter().map(|c| c.final_score).collect();
        assert_eq!(scores, vec![50.0, 30.0, 10.0]);
        // Input untouched
        assert_eq!(list[0].final_score, 10.0);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let list = vec![analyzed("first", 20.0), analyzed("top", 40.0), analyzed("second", 20.0)];
        let ranked = rank_commodities(&list, SortBy::Final);
        let ids: Vec<&str> = ranked.iter().map(|c| c.commodity.id.as_str()).collect();
        assert_eq!(ids, vec!["top", "first", "second"]);
    }

    #[test]
    fn test_rank_by_rca_and_productivity() {
        let config = ScoringConfig::default();
        let list = enrich_all(
            &[
                sample_commodity("a", "A", 0.5, 9.0),
                sample_commodity("b", "B", 3.0, 2.0),
            ],
            &config,
        );
        assert_eq!(rank_commodities(&list, SortBy::Rca)[0].commodity.id, "b");
        assert_eq!(rank_commodities(&list, SortBy::Productivity)[0].commodity.id, "a");
    }

    #[test]
    fn test_filter_top_commodities() {
        let config = ScoringConfig::default();
        let list = enrich_all(
            &[
                sample_commodity("a", "A", 0.8, 5.0),
                sample_commodity("b", "B", 1.0, 5.0),
                sample_commodity("c", "C", 2.5, 5.0),
            ],
            &config,
        );
        let top = filter_top_commodities(&list, 1.0, None);
        assert_eq!(top.len(), 2);
        let limited = filter_top_commodities(&list, 1.0, Some(1));
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].commodity.id, "b");
    }

    #[test]
    fn test_commodity_filter_search_and_category() {
        let config = ScoringConfig::default();
        let mut kopi = sample_commodity("kopi", "Kopi Robusta", 1.5, 5.0);
        kopi.category = CommodityCategory::Perkebunan;
        let list = enrich_all(&[sample_commodity("padi", "Padi", 2.0, 5.0), kopi], &config);

        let filter = CommodityFilter {
            category: Some(CommodityCategory::Perkebunan),
            ..CommodityFilter::default()
        };
        assert_eq!(filter.apply(&list).len(), 1);

        let filter = CommodityFilter {
            search: Some("ROBUSTA".to_string()),
            ..CommodityFilter::default()
        };
        let found = filter.apply(&list);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].commodity.id, "kopi");
    }

    #[test]
    fn test_commodity_filter_min_rca_and_name_sort() {
        let config = ScoringConfig::default();
        let list = enrich_all(
            &[
                sample_commodity("z", "Zaitun", 1.2, 5.0),
                sample_commodity("j", "Jagung", 0.3, 5.0),
                sample_commodity("c", "Cabai", 1.1, 5.0),
            ],
            &config,
        );
        let filter = CommodityFilter {
            min_rca: 1.0,
            sort_by: SortBy::Name,
            ..CommodityFilter::default()
        };
        let names: Vec<String> = filter.apply(&list).into_iter().map(|c| c.commodity.name).collect();
        assert_eq!(names, vec!["Cabai", "Zaitun"]);
    }

    #[test]
    fn test_rank_with_nan_score_is_total() {
        let list = vec![analyzed("a", 10.0), analyzed("nan", f64::NAN), analyzed("b", 30.0), analyzed("c", 20.0)];
        let ranked = rank_commodities(&list, SortBy::Final);
        assert_eq!(ranked.len(), 4);
        let ids: Vec<&str> = ranked
            .iter()
            .map(|c| c.commodity.id.as_str())
            .filter(|id| *id != "nan")
            .collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_by_parse() {
        assert_eq!("RCA".parse::<SortBy>(), Ok(SortBy::Rca));
        assert_eq!("final".parse::<SortBy>(), Ok(SortBy::Final));
        assert!("size".parse::<SortBy>().is_err());
    }
}
