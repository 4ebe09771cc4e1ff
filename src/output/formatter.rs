use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::format::{format_compact, format_number, format_weight};
use crate::model::{
    Allocation, CommodityWithAnalysis, Feasibility, Grade, MarketAnalysisResult, ParameterResult,
    QualityAssessmentResult, RcaStatus, RegionSurplusDeficit, SurplusDeficitSummary,
};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn colored_grade(grade: Grade, use_colors: bool) -> String {
    let text = grade.to_string();
    if !use_colors {
        return text;
    }
    match grade {
        Grade::A => text.green().bold().to_string(),
        Grade::B => text.yellow().bold().to_string(),
        Grade::C => text.red().bold().to_string(),
    }
}

fn colored_feasibility(feasibility: Feasibility, use_colors: bool) -> String {
    let text = format!("{:<6}", feasibility.to_string());
    if !use_colors {
        return text;
    }
    match feasibility {
        Feasibility::High => text.green().to_string(),
        Feasibility::Medium => text.yellow().to_string(),
        Feasibility::Low => text.red().to_string(),
    }
}

fn rca_status_label(status: RcaStatus) -> &'static str {
    match status {
        RcaStatus::Unggulan => "unggulan",
        RcaStatus::Potensial => "potensial",
        RcaStatus::Rendah => "rendah",
    }
}

/// Ranked commodities, one per line: index, final score, name, RCA,
/// economic value, trend.
/// Index column is 1-based and right-aligned with a trailing dot.
pub fn format_ranking_table(commodities: &[CommodityWithAnalysis], use_colors: bool) -> String {
    if commodities.is_empty() {
        return "No commodities found.".to_string();
    }

    let term_width = get_terminal_width();
    let index_width = 3;
    let score_width = 6;
    let rca_width = 22;
    let value_width = 11;
    let separator = "  ";
    let fixed_width =
        index_width + 1 + score_width + rca_width + value_width + separator.len() * 4 + 1;

    commodities
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>width$.2}", item.final_score, width = score_width);
            let rca_str = format!(
                "RCA {:>6.2} {:<10}",
                item.rca_score(),
                format!("({})", rca_status_label(item.rca_status()))
            );

            let name = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_name(&item.commodity.name, width - fixed_width)
                }
                Some(_) => truncate_name(&item.commodity.name, 20),
                None => item.commodity.name.clone(),
            };
            let name_padded = format!("{:<20}", name);
            let value_str = format!(
                "Rp {:>8}",
                format_compact(item.commodity.data.economic_value)
            );
            let trend = item.trend.symbol();

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    name_padded,
                    separator,
                    rca_str.cyan(),
                    separator,
                    value_str,
                    separator,
                    trend
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}{}{}",
                    index_str,
                    score_str,
                    separator,
                    name_padded,
                    separator,
                    rca_str,
                    separator,
                    value_str,
                    separator,
                    trend
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ranked commodities as tab-separated values for scripting
/// Columns: id, name, category, rca, productivity_score, final_score, trend
pub fn format_ranking_tsv(commodities: &[CommodityWithAnalysis]) -> String {
    commodities
        .iter()
        .map(|item| {
            format!(
                "{}\t{}\t{}\t{:.2}\t{:.2}\t{:.2}\t{}",
                item.commodity.id,
                item.commodity.name,
                item.commodity.category.label(),
                item.rca_score(),
                item.productivity_score,
                item.final_score,
                item.trend.symbol()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_parameter_line(result: &ParameterResult, use_colors: bool) -> String {
    format!(
        "  [{}] {}: {} {}",
        colored_grade(result.grade, use_colors),
        result.parameter_name,
        format_number(result.value),
        result.unit
    )
}

/// Multi-line report of one quality assessment.
pub fn format_assessment(
    result: &QualityAssessmentResult,
    quality_index: Option<f64>,
    worst: &[ParameterResult],
    use_colors: bool,
) -> String {
    let mut lines = Vec::new();

    let title = format!("{} ({})", result.commodity_name, result.commodity_type);
    lines.push(if use_colors {
        title.bold().to_string()
    } else {
        title
    });
    lines.push(format!(
        "  Grade: {} - {}",
        colored_grade(result.overall_grade, use_colors),
        result.grade_label
    ));
    lines.push(format!(
        "  Retail ready: {}",
        if result.is_retail_ready { "ya" } else { "tidak" }
    ));
    if let Some(index) = quality_index {
        lines.push(format!("  Quality index: {:.1}", index));
    }

    lines.push(String::new());
    lines.push("Parameters:".to_string());
    if result.parameter_results.is_empty() {
        lines.push("  (none assessed)".to_string());
    }
    for parameter in &result.parameter_results {
        lines.push(format_parameter_line(parameter, use_colors));
    }

    if !worst.is_empty() && worst.iter().any(|p| p.grade != Grade::A) {
        lines.push(String::new());
        lines.push("Needs attention:".to_string());
        for parameter in worst.iter().filter(|p| p.grade != Grade::A) {
            lines.push(format_parameter_line(parameter, use_colors));
        }
    }

    lines.push(String::new());
    lines.push("Recommendations:".to_string());
    for recommendation in &result.recommendations {
        lines.push(format!("  - {}", recommendation));
    }

    lines.join("\n")
}

pub fn format_summary(commodity_id: &str, summary: &SurplusDeficitSummary) -> String {
    format!(
        "{}: {} surplus / {} defisit / {} seimbang\n  Total surplus: {}\n  Total defisit: {}",
        commodity_id,
        summary.surplus_count,
        summary.deficit_count,
        summary.balanced_count,
        format_weight(summary.total_surplus),
        format_weight(summary.total_deficit)
    )
}

/// Regions with their balance, one per line.
pub fn format_region_balances(regions: &[RegionSurplusDeficit], use_colors: bool) -> String {
    if regions.is_empty() {
        return "No regions found.".to_string();
    }

    regions
        .iter()
        .enumerate()
        .map(|(idx, region)| {
            let index_str = format!("{:>2}.", idx + 1);
            let amount = format!("{:>16}", format_weight(region.surplus.abs()));
            let status = format!("{:<8}", region.status.label());
            if use_colors {
                format!(
                    "{} {}  {}  {} ({})",
                    index_str.dimmed(),
                    status,
                    amount.bold(),
                    region.region_name,
                    region.province
                )
            } else {
                format!(
                    "{} {}  {}  {} ({})",
                    index_str, status, amount, region.region_name, region.province
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_distance(distance: Option<f64>) -> String {
    match distance {
        Some(km) => format!("{:>7} km", format_number(km)),
        None => format!("{:>10}", "-"),
    }
}

/// Market analysis: header, ranked targets and insights.
pub fn format_market_analysis(analysis: &MarketAnalysisResult, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let header = format!(
        "{} dari {}: surplus {}, permintaan potensial {}",
        analysis.source_commodity,
        analysis.source_region,
        format_weight(analysis.available_surplus),
        format_weight(analysis.total_potential_demand)
    );
    lines.push(if use_colors {
        header.bold().to_string()
    } else {
        header
    });

    if analysis.target_markets.is_empty() {
        lines.push("  No target markets.".to_string());
    }
    for target in &analysis.target_markets {
        lines.push(format!(
            "{:>3}. {}  {:>16}  {}  {} ({})",
            target.rank,
            colored_feasibility(target.feasibility, use_colors),
            format_weight(target.estimated_demand),
            format_distance(target.distance),
            target.region_name,
            target.province
        ));
    }

    lines.push(String::new());
    lines.push("Insights:".to_string());
    for insight in &analysis.insights {
        lines.push(format!("  - {}", insight));
    }

    lines.join("\n")
}

pub fn format_distribution_plan(plan: &[Allocation], use_colors: bool) -> String {
    if plan.is_empty() {
        return "No allocation possible.".to_string();
    }

    plan.iter()
        .enumerate()
        .map(|(idx, allocation)| {
            let index_str = format!("{:>2}.", idx + 1);
            let amount = format!("{:>16}", format_weight(allocation.allocated_amount));
            if use_colors {
                format!(
                    "{} {}  {}  {}",
                    index_str.dimmed(),
                    amount.bold(),
                    colored_feasibility(allocation.market.feasibility, true),
                    allocation.market.region_name
                )
            } else {
                format!(
                    "{} {}  {}  {}",
                    index_str,
                    amount,
                    colored_feasibility(allocation.market.feasibility, false),
                    allocation.market.region_name
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
