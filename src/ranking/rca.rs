use super::config::ScoreWeights;

/// RCA above this contributes no further to the final score.
const RCA_CAP: f64 = 10.0;
/// Productivity score above this contributes no further to the final score.
const PRODUCTIVITY_CAP: f64 = 200.0;

/// Revealed Comparative Advantage (Balassa index).
///
/// `(regional_production / regional_total) / (national_production / national_total)`.
/// Returns 0 when any denominator is zero.
pub fn calculate_rca(
    regional_production: f64,
    regional_total: f64,
    national_production: f64,
    national_total: f64,
) -> f64 {
    if regional_total == 0.0 || national_total == 0.0 || national_production == 0.0 {
        return 0.0;
    }

    let regional_share = regional_production / regional_total;
    let national_share = national_production / national_total;

    regional_share / national_share
}

/// Actual productivity as a percentage of the national average. 0 if the average is 0.
pub fn calculate_productivity_score(actual: f64, national_average: f64) -> f64 {
    if national_average == 0.0 {
        return 0.0;
    }
    actual / national_average * 100.0
}

/// Composite score in `[0, 100]` (for weights summing to 1).
pub fn calculate_final_score(rca: f64, productivity_score: f64, weights: &ScoreWeights) -> f64 {
    let normalized_rca = rca.clamp(0.0, RCA_CAP) / RCA_CAP;
    let normalized_productivity = productivity_score.clamp(0.0, PRODUCTIVITY_CAP) / PRODUCTIVITY_CAP;

    (normalized_rca * weights.rca + normalized_productivity * weights.productivity) * 100.0
}
