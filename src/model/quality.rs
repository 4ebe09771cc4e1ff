use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
}

impl Grade {
    /// Rank used for averaging and ordering: A=3, B=2, C=1.
    pub fn rank(&self) -> u8 {
        match self {
            Grade::A => 3,
            Grade::B => 2,
            Grade::C => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::A => "Premium Quality",
            Grade::B => "Standard Quality",
            Grade::C => "Below Standard",
        }
    }

    pub fn is_retail_ready(&self) -> bool {
        matches!(self, Grade::A | Grade::B)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
        };
        f.write_str(s)
    }
}

/// Inclusive `[min, max]` band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityThreshold {
    pub min: f64,
    pub max: f64,
}

impl QualityThreshold {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The A/B/C bands of one parameter. Bands are not required to partition the
/// value domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeThresholds {
    #[serde(rename = "A")]
    pub a: QualityThreshold,
    #[serde(rename = "B")]
    pub b: QualityThreshold,
    #[serde(rename = "C")]
    pub c: QualityThreshold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityParameter {
    pub id: String,
    pub name: String,
    pub unit: String,
    #[serde(default)]
    pub description: String,
    pub thresholds: GradeThresholds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommodityQualityConfig {
    pub name: String,
    pub parameters: Vec<QualityParameter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityAssessmentInput {
    pub commodity_type: String,
    pub parameter_values: HashMap<String, f64>,
}

impl QualityAssessmentInput {
    pub fn new(commodity_type: impl Into<String>) -> Self {
        Self {
            commodity_type: commodity_type.into(),
            parameter_values: HashMap::new(),
        }
    }

    pub fn with_value(mut self, parameter_id: impl Into<String>, value: f64) -> Self {
        self.parameter_values.insert(parameter_id.into(), value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterResult {
    pub parameter_id: String,
    pub parameter_name: String,
    pub value: f64,
    pub unit: String,
    pub grade: Grade,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityAssessmentResult {
    pub commodity_type: String,
    pub commodity_name: String,
    pub overall_grade: Grade,
    pub grade_label: String,
    pub is_retail_ready: bool,
    pub parameter_results: Vec<ParameterResult>,
    pub recommendations: Vec<String>,
    pub assessed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_rank_and_labels() {
        assert_eq!(Grade::A.rank(), 3);
        assert_eq!(Grade::C.rank(), 1);
        assert_eq!(Grade::B.label(), "Standard Quality");
        assert!(Grade::B.is_retail_ready());
        assert!(!Grade::C.is_retail_ready());
        assert_eq!(Grade::A.to_string(), "A");
    }

    #[test]
    fn test_threshold_inclusive() {
        let band = QualityThreshold { min: 0.0, max: 5.0 };
        assert!(band.contains(0.0));
        assert!(band.contains(5.0));
        assert!(!band.contains(5.01));
        assert!(!band.contains(-0.1));
    }

    #[test]
    fn test_quality_config_parse() {
        let json = r#"{
            "name": "Beras",
            "parameters": [{
                "id": "kadarAir", "name": "Kadar Air", "unit": "%",
                "thresholds": { "A": {"min": 0, "max": 14}, "B": {"min": 14.01, "max": 15}, "C": {"min": 15.01, "max": 100} }
            }]
        }"#;
        let config: CommodityQualityConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.parameters[0].thresholds.a.max, 14.0);
        assert_eq!(config.parameters[0].description, "");
    }
}
