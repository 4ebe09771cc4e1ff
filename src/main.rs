use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commodity_advantage::config::{self, Config};
use commodity_advantage::error::AnalysisError;
use commodity_advantage::model::{CommodityCategory, QualityAssessmentInput};
use commodity_advantage::ranking::{self, CommodityFilter, SortBy};
use commodity_advantage::{dataset, logging, market, output, quality};

const EXIT_SUCCESS: i32 = 0;
const EXIT_DATA: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank commodities by comparative advantage
    Rank {
        /// Sort key: rca, productivity, final or name
        #[arg(long, default_value = "final")]
        sort_by: SortBy,

        /// Only this category (pertanian, peternakan, perikanan, perkebunan)
        #[arg(long)]
        category: Option<CommodityCategory>,

        /// Minimum RCA (ignored when 0)
        #[arg(long, default_value_t = 0.0)]
        min_rca: f64,

        /// Case-insensitive name search
        #[arg(long)]
        search: Option<String>,

        /// Keep only the first N rows (0 = all)
        #[arg(long)]
        limit: Option<usize>,

        /// Keep only commodities at or above the configured min_rca
        #[arg(long)]
        top: bool,

        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Grade a commodity sample against the quality thresholds
    Assess {
        /// Commodity type (padi, jagung, kopi)
        commodity_type: String,

        /// Parameter value as id=NUMBER, repeatable
        #[arg(long = "value", value_parser = parse_parameter_value)]
        values: Vec<(String, f64)>,

        /// Reject incomplete or negative input
        #[arg(long)]
        strict: bool,
    },
    /// Find target markets for a commodity surplus
    Market {
        /// Commodity id as used in the surplus/deficit dataset
        commodity_id: String,

        /// Surplus region to ship from (defaults to the largest surplus)
        #[arg(long)]
        source: Option<String>,

        /// Estimate distances from the source region
        #[arg(long)]
        distances: bool,
    },
    /// Show the full administrative path of a region
    Region {
        /// Province, regency or district id
        id: String,
    },
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "commodity-advantage")]
#[command(about = "Regional commodity advantage, quality grading and market targeting", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/commodity-advantage/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

enum Failure {
    Data(anyhow::Error),
    Invalid(Vec<String>),
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        Failure::Data(err)
    }
}

impl From<AnalysisError> for Failure {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::InvalidInput(errors) => Failure::Invalid(errors),
            AnalysisError::OutOfDomain { .. } | AnalysisError::EmptyGrades => {
                Failure::Invalid(vec![err.to_string()])
            }
            other => Failure::Data(other.into()),
        }
    }
}

fn parse_parameter_value(s: &str) -> Result<(String, f64), String> {
    let (id, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected id=NUMBER, got '{}'", s))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;
    Ok((id.trim().to_string(), value))
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Commands::Init { force } = cli.command {
        let path = match cli.config.clone().map_or_else(config::get_config_path, Ok) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Config error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        };
        if let Err(e) = config::write_config(&path, &Config::default(), force) {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        println!("Wrote default config to {}", path.display());
        std::process::exit(EXIT_SUCCESS);
    }

    let config = match config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let use_colors = output::should_use_colors();

    let result = match cli.command {
        Commands::Rank {
            sort_by,
            category,
            min_rca,
            search,
            limit,
            top,
            tsv,
        } => {
            let filter = CommodityFilter {
                category,
                min_rca,
                search,
                sort_by,
            };
            run_rank(&config, &filter, limit, top, tsv, use_colors)
        }
        Commands::Assess {
            commodity_type,
            values,
            strict,
        } => run_assess(&config, &commodity_type, values, strict, use_colors),
        Commands::Market {
            commodity_id,
            source,
            distances,
        } => run_market(&config, &commodity_id, source.as_deref(), distances, use_colors),
        Commands::Region { id } => run_region(&config, &id),
        Commands::Init { .. } => Ok(()),
    };

    match result {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(Failure::Data(e)) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_DATA);
        }
        Err(Failure::Invalid(errors)) => {
            eprintln!("Invalid input:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
    }
}

fn run_rank(
    config: &Config,
    filter: &CommodityFilter,
    limit: Option<usize>,
    top: bool,
    tsv: bool,
    use_colors: bool,
) -> Result<(), Failure> {
    let commodities = dataset::load_commodities(&config.data.commodities_path())?;
    let enriched = ranking::enrich_all(&commodities, &config.scoring);

    let mut ranked = filter.apply(&enriched);
    if top {
        ranked = ranking::filter_top_commodities(&ranked, config.scoring.min_rca, None);
    }
    let limit = limit.or(config.scoring.limit);
    if let Some(n) = limit.filter(|n| *n > 0) {
        ranked.truncate(n);
    }

    if tsv {
        let out = output::format_ranking_tsv(&ranked);
        if !out.is_empty() {
            println!("{}", out);
        }
    } else {
        println!("{}", output::format_ranking_table(&ranked, use_colors));
    }
    Ok(())
}

fn run_assess(
    config: &Config,
    commodity_type: &str,
    values: Vec<(String, f64)>,
    strict: bool,
    use_colors: bool,
) -> Result<(), Failure> {
    let thresholds = dataset::load_quality_thresholds(&config.data.quality_thresholds_path())?;
    let quality_config = thresholds
        .get(commodity_type)
        .ok_or_else(|| AnalysisError::UnknownCommodityType(commodity_type.to_string()))?;

    let input = values
        .into_iter()
        .fold(QualityAssessmentInput::new(commodity_type), |input, (id, value)| {
            input.with_value(id, value)
        });

    let result = if strict {
        quality::assess_quality_strict(&input, quality_config)?
    } else {
        quality::assess_quality(&input, quality_config)
    };

    let index = quality::calculate_quality_index(&result.parameter_results);
    let worst = quality::worst_parameters(&result.parameter_results, 3);
    println!("{}", output::format_assessment(&result, index, &worst, use_colors));
    Ok(())
}

fn run_market(
    config: &Config,
    commodity_id: &str,
    source: Option<&str>,
    distances: bool,
    use_colors: bool,
) -> Result<(), Failure> {
    let records = dataset::load_surplus_deficit(&config.data.surplus_deficit_path())?;
    let for_commodity: Vec<_> = records
        .iter()
        .filter(|r| r.commodity_id == commodity_id)
        .cloned()
        .collect();
    if for_commodity.is_empty() {
        return Err(AnalysisError::UnknownCommodity(commodity_id.to_string()).into());
    }

    let summary = market::surplus_deficit_summary(&for_commodity);
    println!("{}", output::format_summary(commodity_id, &summary));

    let surplus_regions = market::find_surplus_regions(&records, commodity_id);
    println!();
    println!("Surplus regions:");
    println!("{}", output::format_region_balances(&surplus_regions, use_colors));

    let source_region = match source {
        Some(id) => surplus_regions
            .iter()
            .find(|r| r.region_id == id)
            .ok_or_else(|| AnalysisError::UnknownRegion(id.to_string()))?,
        None => match surplus_regions.first() {
            Some(region) => region,
            None => return Ok(()),
        },
    };

    let analysis = if distances {
        market::analyze_market_with_distances(source_region, &records, &config.coordinates)
    } else {
        market::analyze_market(source_region, &records)
    };
    println!();
    println!("{}", output::format_market_analysis(&analysis, use_colors));

    let plan = market::calculate_distribution_plan(analysis.available_surplus, &analysis.target_markets);
    println!();
    println!("Distribution plan:");
    println!("{}", output::format_distribution_plan(&plan, use_colors));
    Ok(())
}

fn run_region(config: &Config, id: &str) -> Result<(), Failure> {
    let regions = dataset::load_regions(&config.data.regions_path())?;
    if regions.find_by_id(id).is_empty() {
        return Err(AnalysisError::UnknownRegion(id.to_string()).into());
    }
    println!("{}", regions.full_path(id));
    Ok(())
}
