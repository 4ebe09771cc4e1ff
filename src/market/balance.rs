use crate::model::{RegionSurplusDeficit, SurplusDeficitStatus, SurplusDeficitSummary};

/// Fraction of consumption within which production counts as balanced.
const BALANCE_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance {
    pub surplus: f64,
    pub status: SurplusDeficitStatus,
}

/// `surplus = production - consumption`, classified with a ±10%-of-consumption
/// balanced band.
pub fn calculate_surplus_deficit(production: f64, consumption: f64) -> Balance {
    let surplus = production - consumption;
    let tolerance = consumption * BALANCE_TOLERANCE;

    let status = if surplus > tolerance {
        SurplusDeficitStatus::Surplus
    } else if surplus < -tolerance {
        SurplusDeficitStatus::Deficit
    } else {
        SurplusDeficitStatus::Balanced
    };

    Balance { surplus, status }
}

/// Surplus regions for a commodity, largest surplus first.
pub fn find_surplus_regions(all: &[RegionSurplusDeficit], commodity_id: &str) -> Vec<RegionSurplusDeficit> {
    let mut regions: Vec<RegionSurplusDeficit> = all
        .iter()
        .filter(|r| r.commodity_id == commodity_id && r.status == SurplusDeficitStatus::Surplus)
        .cloned()
        .collect();
    regions.sort_by(|a, b| b.surplus.total_cmp(&a.surplus));
    regions
}

/// Deficit regions for a commodity, worst (most negative) deficit first.
pub fn find_deficit_regions(all: &[RegionSurplusDeficit], commodity_id: &str) -> Vec<RegionSurplusDeficit> {
    let mut regions: Vec<RegionSurplusDeficit> = all
        .iter()
        .filter(|r| r.commodity_id == commodity_id && r.status == SurplusDeficitStatus::Deficit)
        .cloned()
        .collect();
    regions.sort_by(|a, b| a.surplus.total_cmp(&b.surplus));
    regions
}

/// Totals and counts per status. Deficit totals are reported as positive amounts.
pub fn surplus_deficit_summary(regions: &[RegionSurplusDeficit]) -> SurplusDeficitSummary {
    regions
        .iter()
        .fold(SurplusDeficitSummary::default(), |mut summary, region| {
            match region.status {
                SurplusDeficitStatus::Surplus => {
                    summary.total_surplus += region.surplus;
                    summary.surplus_count += 1;
                }
                SurplusDeficitStatus::Deficit => {
                    summary.total_deficit += region.surplus.abs();
                    summary.deficit_count += 1;
                }
                SurplusDeficitStatus::Balanced => summary.balanced_count += 1,
            }
            summary
        })
}
