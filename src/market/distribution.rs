use crate::model::{Allocation, MarketTarget};

/// Greedy allocation of a surplus across targets, most feasible first.
///
/// Targets are visited by feasibility tier (high, medium, low), keeping input
/// order within a tier. Each gets `min(remaining, |deficit|)` until the surplus
/// runs out.
///
/// This ordering differs from the one used for the coverage count in market
/// insights, which walks targets by deficit size. Both are kept as is.
pub fn calculate_distribution_plan(available_surplus: f64, targets: &[MarketTarget]) -> Vec<Allocation> {
    let mut ordered: Vec<&MarketTarget> = targets.iter().collect();
    ordered.sort_by(|a, b| b.feasibility.tier().cmp(&a.feasibility.tier()));

    let mut remaining = available_surplus;
    let mut plan = Vec::new();

    for market in ordered {
        if remaining <= 0.0 {
            break;
        }
        let allocated_amount = remaining.min(market.deficit_amount.abs());
        plan.push(Allocation {
            market: market.clone(),
            allocated_amount,
        });
        remaining -= allocated_amount;
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Feasibility;

    fn target(id: &str, deficit: f64, feasibility: Feasibility) -> MarketTarget {
        MarketTarget {
            rank: 0,
            region_id: id.to_string(),
            region_name: id.to_string(),
            province: "Provinsi".to_string(),
            deficit_amount: deficit,
            estimated_demand: deficit.abs(),
            distance: None,
            feasibility,
        }
    }

    #[test]
    fn test_high_feasibility_served_first() {
        let targets = vec![
            target("low", -60.0, Feasibility::Low),
            target("high", -50.0, Feasibility::High),
        ];
        let plan = calculate_distribution_plan(100.0, &targets);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].market.region_id, "high");
        assert_eq!(plan[0].allocated_amount, 50.0);
        assert_eq!(plan[1].market.region_id, "low");
        assert_eq!(plan[1].allocated_amount, 50.0);
    }

    #[test]
    fn test_stops_when_surplus_exhausted() {
        let targets = vec![
            target("a", -100.0, Feasibility::Medium),
            target("b", -100.0, Feasibility::Medium),
            target("c", -100.0, Feasibility::Medium),
        ];
        let plan = calculate_distribution_plan(150.0, &targets);
        let allocated: Vec<f64> = plan.iter().map(|a| a.allocated_amount).collect();
        assert_eq!(allocated, vec![100.0, 50.0]);
        // Ties keep input order
        assert_eq!(plan[0].market.region_id, "a");
        assert_eq!(plan[1].market.region_id, "b");
    }

    #[test]
    fn test_no_surplus_no_plan() {
        let targets = vec![target("a", -10.0, Feasibility::High)];
        assert!(calculate_distribution_plan(0.0, &targets).is_empty());
        assert!(calculate_distribution_plan(-5.0, &targets).is_empty());
    }

    #[test]
    fn test_surplus_larger_than_demand() {
        let targets = vec![target("a", -10.0, Feasibility::Low), target("b", -20.0, Feasibility::Medium)];
        let plan = calculate_distribution_plan(1000.0, &targets);
        let total: f64 = plan.iter().map(|a| a.allocated_amount).sum();
        assert_eq!(total, 30.0);
        assert_eq!(plan[0].market.region_id, "b");
    }
}
