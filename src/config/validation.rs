use super::schema::Config;
use crate::geo::Coordinates;
use crate::ranking::validate_scoring;

fn check_coordinates(field: &str, coords: &Coordinates, errors: &mut Vec<String>) {
    if !(-90.0..=90.0).contains(&coords.lat()) {
        errors.push(format!("{}: latitude {} out of range [-90, 90]", field, coords.lat()));
    }
    if !(-180.0..=180.0).contains(&coords.lon()) {
        errors.push(format!("{}: longitude {} out of range [-180, 180]", field, coords.lon()));
    }
}

/// Validate the whole configuration, collecting every error.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = match validate_scoring(&config.scoring) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };

    check_coordinates("coordinates.fallback", &config.coordinates.fallback, &mut errors);
    for (region_id, coords) in &config.coordinates.regions {
        check_coordinates(&format!("coordinates.regions.{}", region_id), coords, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_bad_coordinates() {
        let mut config = Config::default();
        config.coordinates.fallback = Coordinates(120.0, 0.0);
        config
            .coordinates
            .regions
            .insert("mars".to_string(), Coordinates(0.0, 200.0));

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("coordinates.fallback"));
        assert!(errors[1].starts_with("coordinates.regions.mars"));
    }

    #[test]
    fn test_scoring_errors_included() {
        let mut config = Config::default();
        config.scoring.min_rca = -1.0;
        config.coordinates.fallback = Coordinates(-95.0, 0.0);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("scoring.min_rca"));
    }
}
