use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let weights = &config.weights;
    if weights.rca < 0.0 || !weights.rca.is_finite() {
        errors.push(format!("scoring.weights.rca: must be a non-negative number, got {}", weights.rca));
    }
    if weights.productivity < 0.0 || !weights.productivity.is_finite() {
        errors.push(format!(
            "scoring.weights.productivity: must be a non-negative number, got {}",
            weights.productivity
        ));
    }
    if weights.rca == 0.0 && weights.productivity == 0.0 {
        errors.push("scoring.weights: at least one weight must be greater than zero".to_string());
    }

    if config.national_average_productivity <= 0.0 || !config.national_average_productivity.is_finite() {
        errors.push(format!(
            "scoring.national_average_productivity: must be positive, got {}",
            config.national_average_productivity
        ));
    }

    if config.min_rca < 0.0 || !config.min_rca.is_finite() {
        errors.push(format!("scoring.min_rca: must be non-negative, got {}", config.min_rca));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
