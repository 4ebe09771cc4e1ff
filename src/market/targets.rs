use super::balance::find_deficit_regions;
use super::insights::generate_market_insights;
use crate::geo::{estimate_distance, CoordinateLookup, CoordinateTable, Coordinates, NATIONAL_CENTROID};
use crate::model::{Feasibility, MarketAnalysisResult, MarketTarget, RegionSurplusDeficit};

/// Tonnes of demand per kilometre above which shipping is highly feasible.
const HIGH_EFFICIENCY: f64 = 1000.0;
const MEDIUM_EFFICIENCY: f64 = 100.0;

/// Feasibility of supplying `deficit_amount` over `distance` km.
///
/// Unknown (or zero) distance is `Medium`.
pub fn feasibility_score(deficit_amount: f64, distance: Option<f64>) -> Feasibility {
    let distance = match distance {
        Some(d) if d != 0.0 => d,
        _ => return Feasibility::Medium,
    };

    let efficiency = deficit_amount / distance;
    if efficiency > HIGH_EFFICIENCY {
        Feasibility::High
    } else if efficiency > MEDIUM_EFFICIENCY {
        Feasibility::Medium
    } else {
        Feasibility::Low
    }
}

/// Turn deficit regions into ranked market targets.
///
/// Rank is the 1-based position in `deficit_regions`; callers pass them already
/// sorted. Distances are computed only when `source` is given.
pub fn generate_target_markets(
    deficit_regions: &[RegionSurplusDeficit],
    source: Option<Coordinates>,
    lookup: &dyn CoordinateLookup,
) -> Vec<MarketTarget> {
    deficit_regions
        .iter()
        .enumerate()
        .map(|(index, region)| {
            let distance = source.map(|from| estimate_distance(from, lookup.coordinates(&region.region_id)));
            let demand = region.surplus.abs();

            MarketTarget {
                rank: index + 1,
                region_id: region.region_id.clone(),
                region_name: region.region_name.clone(),
                province: region.province.clone(),
                deficit_amount: region.surplus,
                estimated_demand: demand,
                distance,
                feasibility: feasibility_score(demand, distance),
            }
        })
        .collect()
}

/// Market analysis for one surplus region, without distances.
///
/// Targets are every deficit region for the same commodity, worst deficit first.
pub fn analyze_market(source: &RegionSurplusDeficit, all: &[RegionSurplusDeficit]) -> MarketAnalysisResult {
    build_analysis(source, all, None)
}

/// [`analyze_market`], with distances measured from the source region's
/// coordinates as resolved by `lookup`.
pub fn analyze_market_with_distances(
    source: &RegionSurplusDeficit,
    all: &[RegionSurplusDeficit],
    lookup: &dyn CoordinateLookup,
) -> MarketAnalysisResult {
    build_analysis(source, all, Some(lookup))
}

fn build_analysis(
    source: &RegionSurplusDeficit,
    all: &[RegionSurplusDeficit],
    lookup: Option<&dyn CoordinateLookup>,
) -> MarketAnalysisResult {
    let deficit_regions = find_deficit_regions(all, &source.commodity_id);
    let target_markets = match lookup {
        Some(lookup) => {
            let origin = lookup.coordinates(&source.region_id);
            generate_target_markets(&deficit_regions, Some(origin), lookup)
        }
        None => generate_target_markets(&deficit_regions, None, &CoordinateTable::new(NATIONAL_CENTROID)),
    };

    tracing::debug!(
        source = %source.region_id,
        commodity = %source.commodity_id,
        targets = target_markets.len(),
        "built market targets"
    );

    let insights = generate_market_insights(&source.region_name, source.surplus, &target_markets);
    let total_potential_demand = target_markets.iter().map(|t| t.deficit_amount.abs()).sum();

    MarketAnalysisResult {
        source_commodity: source.commodity_id.clone(),
        source_region: source.region_name.clone(),
        available_surplus: source.surplus,
        target_markets,
        insights,
        total_potential_demand,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::balance::tests::record;
    use crate::model::SurplusDeficitStatus;
    use approx::assert_relative_eq;

    #[test]
    fn test_feasibility_thresholds() {
        assert_eq!(feasibility_score(1500.0, Some(1.0)), Feasibility::High);
        assert_eq!(feasibility_score(150.0, Some(10.0)), Feasibility::Low);
        assert_eq!(feasibility_score(500.0, None), Feasibility::Medium);
        assert_eq!(feasibility_score(5000.0, Some(10.0)), Feasibility::Medium);
    }

    #[test]
    fn test_feasibility_zero_distance_is_unknown() {
        assert_eq!(feasibility_score(10.0, Some(0.0)), Feasibility::Medium);
    }

    fn dataset() -> Vec<RegionSurplusDeficit> {
        vec![
            record("kalteng-kotim", "padi", 5000.0, SurplusDeficitStatus::Surplus),
            record("jakarta", "padi", -2_000_000.0, SurplusDeficitStatus::Deficit),
            record("jatim-surabaya", "padi", -3000.0, SurplusDeficitStatus::Deficit),
            record("papua-merauke", "padi", -100.0, SurplusDeficitStatus::Deficit),
            record("jabar-bandung", "jagung", -999.0, SurplusDeficitStatus::Deficit),
        ]
    }

    #[test]
    fn test_targets_keep_input_order_for_rank() {
        let regions = dataset();
        let deficits = vec![regions[3].clone(), regions[1].clone()];
        let targets = generate_target_markets(&deficits, None, &CoordinateTable::default());

        assert_eq!(targets[0].rank, 1);
        assert_eq!(targets[0].region_id, "papua-merauke");
        assert_eq!(targets[1].rank, 2);
        assert_eq!(targets[1].estimated_demand, 2_000_000.0);
        assert_eq!(targets[1].deficit_amount, -2_000_000.0);
        assert!(targets.iter().all(|t| t.distance.is_none() && t.feasibility == Feasibility::Medium));
    }

    #[test]
    fn test_targets_with_source_measure_distance() {
        let regions = dataset();
        let table = CoordinateTable::default();
        let source = table.coordinates("kalteng-kotim");
        let targets = generate_target_markets(&regions[1..2], Some(source), &table);

        let distance = targets[0].distance.unwrap();
        assert!(distance > 0.0);
        // 2M tonnes over roughly 790 km
        assert_eq!(targets[0].feasibility, Feasibility::High);
    }

    #[test]
    fn test_analyze_market() {
        let regions = dataset();
        let result = analyze_market(&regions[0], &regions);

        assert_eq!(result.source_commodity, "padi");
        assert_eq!(result.source_region, "KALTENG-KOTIM");
        assert_eq!(result.available_surplus, 5000.0);
        let ids: Vec<&str> = result.target_markets.iter().map(|t| t.region_id.as_str()).collect();
        assert_eq!(ids, vec!["jakarta", "jatim-surabaya", "papua-merauke"]);
        assert_relative_eq!(result.total_potential_demand, 2_003_100.0);
        assert!(!result.insights.is_empty());
    }

    #[test]
    fn test_analyze_market_with_distances() {
        let regions = dataset();
        let result = analyze_market_with_distances(&regions[0], &regions, &CoordinateTable::default());
        assert!(result.target_markets.iter().all(|t| t.distance.is_some()));
    }

    #[test]
    fn test_analyze_market_without_deficits() {
        let regions = vec![record("kalteng-kotim", "kopi", 10.0, SurplusDeficitStatus::Surplus)];
        let result = analyze_market(&regions[0], &regions);
        assert!(result.target_markets.is_empty());
        assert_eq!(result.total_potential_demand, 0.0);
        assert_eq!(result.insights.len(), 1);
    }
}
