pub mod balance;
pub mod distribution;
pub mod insights;
pub mod targets;

pub use balance::{
    calculate_surplus_deficit, find_deficit_regions, find_surplus_regions,
    surplus_deficit_summary, Balance,
};
pub use distribution::calculate_distribution_plan;
pub use insights::{coverage_count, generate_market_insights};
pub use targets::{
    analyze_market, analyze_market_with_distances, feasibility_score, generate_target_markets,
};
