pub mod config;
pub mod engine;
pub mod rca;
pub mod trend;
pub mod validation;

pub use config::*;
pub use engine::{
    enrich_all, enrich_commodity_with_analysis, filter_top_commodities, rank_commodities,
    CommodityFilter, SortBy,
};
pub use rca::{calculate_final_score, calculate_productivity_score, calculate_rca};
pub use trend::calculate_trend;
pub use validation::validate_scoring;
