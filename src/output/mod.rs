pub mod formatter;

pub use formatter::{
    format_assessment, format_distribution_plan, format_market_analysis, format_ranking_table,
    format_ranking_tsv, format_region_balances, format_summary, should_use_colors,
};
