use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurplusDeficitStatus {
    Surplus,
    Deficit,
    Balanced,
}

impl SurplusDeficitStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SurplusDeficitStatus::Surplus => "Surplus",
            SurplusDeficitStatus::Deficit => "Defisit",
            SurplusDeficitStatus::Balanced => "Seimbang",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feasibility {
    High,
    Medium,
    Low,
}

impl Feasibility {
    /// Allocation priority: high=3, medium=2, low=1.
    pub fn tier(&self) -> u8 {
        match self {
            Feasibility::High => 3,
            Feasibility::Medium => 2,
            Feasibility::Low => 1,
        }
    }
}

impl fmt::Display for Feasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Feasibility::High => "high",
            Feasibility::Medium => "medium",
            Feasibility::Low => "low",
        };
        f.write_str(s)
    }
}

/// Production/consumption balance of one commodity in one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSurplusDeficit {
    pub region_id: String,
    pub region_name: String,
    pub province: String,
    pub commodity_id: String,
    pub production: f64,
    pub consumption: f64,
    pub population: f64,
    pub consumption_per_capita: f64,
    /// production - consumption; negative means shortfall.
    pub surplus: f64,
    pub status: SurplusDeficitStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTarget {
    pub rank: usize,
    pub region_id: String,
    pub region_name: String,
    pub province: String,
    /// Signed; negative denotes shortfall.
    pub deficit_amount: f64,
    pub estimated_demand: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub feasibility: Feasibility,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalysisResult {
    pub source_commodity: String,
    pub source_region: String,
    pub available_surplus: f64,
    pub target_markets: Vec<MarketTarget>,
    pub insights: Vec<String>,
    pub total_potential_demand: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub market: MarketTarget,
    pub allocated_amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurplusDeficitSummary {
    pub total_surplus: f64,
    pub total_deficit: f64,
    pub surplus_count: usize,
    pub deficit_count: usize,
    pub balanced_count: usize,
}
