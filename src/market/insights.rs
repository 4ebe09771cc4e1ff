use crate::format::{format_number, format_percentage};
use crate::model::{Feasibility, MarketTarget};

pub const NO_MARKET_MESSAGE: &str = "Tidak ditemukan pasar potensial dengan defisit signifikan.";

/// Number of leading targets whose cumulative demand fits in `available_surplus`.
///
/// Order-dependent: it walks `targets` as given and stops at the first one
/// that would overflow the surplus.
pub fn coverage_count(available_surplus: f64, targets: &[MarketTarget]) -> usize {
    targets
        .iter()
        .scan(0.0, |cumulative, target| {
            *cumulative += target.deficit_amount.abs();
            Some(*cumulative)
        })
        .take_while(|cumulative| *cumulative <= available_surplus)
        .count()
}

/// Human-readable observations about a market analysis, in target order.
pub fn generate_market_insights(
    source_region: &str,
    available_surplus: f64,
    targets: &[MarketTarget],
) -> Vec<String> {
    let Some(top) = targets.first() else {
        return vec![NO_MARKET_MESSAGE.to_string()];
    };

    let mut insights = vec![format!(
        "{} adalah pasar potensial utama dengan defisit {} ton.",
        top.region_name,
        format_number(top.deficit_amount.abs())
    )];

    let total_demand: f64 = targets.iter().map(|t| t.deficit_amount.abs()).sum();

    let covered = coverage_count(available_surplus, targets);
    if covered > 0 {
        insights.push(format!(
            "Surplus {} ton dapat memenuhi kebutuhan {} wilayah defisit.",
            format_number(available_surplus),
            covered
        ));
    }

    if available_surplus >= total_demand {
        insights.push(format!(
            "Surplus {} cukup untuk memenuhi seluruh kebutuhan pasar potensial.",
            source_region
        ));
    } else {
        insights.push(format!(
            "Surplus dapat memenuhi {} dari total kebutuhan pasar potensial.",
            format_percentage(available_surplus / total_demand * 100.0, 1)
        ));
    }

    let high = targets
        .iter()
        .filter(|t| t.feasibility == Feasibility::High)
        .count();
    if high > 0 {
        insights.push(format!("{} pasar memiliki kelayakan distribusi tinggi.", high));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(name: &str, deficit: f64, feasibility: Feasibility) -> MarketTarget {
        MarketTarget {
            rank: 0,
            region_id: name.to_lowercase(),
            region_name: name.to_string(),
            province: "Provinsi".to_string(),
            deficit_amount: deficit,
            estimated_demand: deficit.abs(),
            distance: None,
            feasibility,
        }
    }

    #[test]
    fn test_no_targets() {
        assert_eq!(
            generate_market_insights("Kotim", 1000.0, &[]),
            vec![NO_MARKET_MESSAGE.to_string()]
        );
    }

    #[test]
    fn test_full_coverage() {
        let targets = vec![
            target("Jakarta", -600.0, Feasibility::High),
            target("Bekasi", -300.0, Feasibility::Low),
        ];
        let insights = generate_market_insights("Kotim", 1000.0, &targets);
        assert_eq!(insights.len(), 4);
        assert_eq!(insights[0], "Jakarta adalah pasar potensial utama dengan defisit 600 ton.");
        assert_eq!(insights[1], "Surplus 1.000 ton dapat memenuhi kebutuhan 2 wilayah defisit.");
        assert_eq!(insights[2], "Surplus Kotim cukup untuk memenuhi seluruh kebutuhan pasar potensial.");
        assert_eq!(insights[3], "1 pasar memiliki kelayakan distribusi tinggi.");
    }

    #[test]
    fn test_partial_coverage_percentage() {
        let targets = vec![
            target("Jakarta", -1500.0, Feasibility::Medium),
            target("Bekasi", -500.0, Feasibility::Medium),
        ];
        let insights = generate_market_insights("Kotim", 1000.0, &targets);
        // Largest target alone exceeds the surplus: no coverage line
        assert_eq!(insights.len(), 2);
        assert_eq!(insights[1], "Surplus dapat memenuhi 50.0% dari total kebutuhan pasar potensial.");
    }

    #[test]
    fn test_coverage_count_is_prefix_based() {
        let targets = vec![
            target("A", -400.0, Feasibility::Low),
            target("B", -700.0, Feasibility::Low),
            target("C", -100.0, Feasibility::Low),
        ];
        // A fits, A+B does not; C would fit on its own but is not reached
        assert_eq!(coverage_count(1000.0, &targets), 1);
        assert_eq!(coverage_count(1200.0, &targets), 3);
        assert_eq!(coverage_count(0.0, &targets), 0);
    }
}
