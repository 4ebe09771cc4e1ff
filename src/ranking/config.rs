use serde::{Deserialize, Serialize};

/// Relative weights of the two normalized components of the final score.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoreWeights {
    pub rca: f64,
    pub productivity: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            rca: 0.6,
            productivity: 0.4,
        }
    }
}

/// Ranking configuration.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   weights: { rca: 0.6, productivity: 0.4 }
///   national_average_productivity: 5.0
///   min_rca: 1.0
///   limit: 10
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: ScoreWeights,

    /// National average productivity (ton/ha) that a productivity score of 100 maps to
    #[serde(default = "default_national_average")]
    pub national_average_productivity: f64,

    /// Minimum RCA for the "top commodities" view
    #[serde(default = "default_min_rca")]
    pub min_rca: f64,

    /// Optional cap on the "top commodities" view
    #[serde(default)]
    pub limit: Option<usize>,
}

pub const DEFAULT_NATIONAL_AVERAGE_PRODUCTIVITY: f64 = 5.0;

fn default_national_average() -> f64 {
    DEFAULT_NATIONAL_AVERAGE_PRODUCTIVITY
}

fn default_min_rca() -> f64 {
    1.0
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            national_average_productivity: default_national_average(),
            min_rca: default_min_rca(),
            limit: None,
        }
    }
}
