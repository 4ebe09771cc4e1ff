use chrono::Utc;
use std::collections::BTreeMap;

use super::grade::{calculate_overall_grade, determine_grade, determine_grade_strict};
use super::recommendations::RecommendationTable;
use crate::error::AnalysisError;
use crate::model::{
    CommodityQualityConfig, Grade, ParameterResult, QualityAssessmentInput, QualityAssessmentResult,
};

/// Grade every configured parameter that has a value in `input`.
///
/// Parameters without a value are skipped and do not appear in the result. If
/// nothing could be graded the overall grade is C.
pub fn assess_quality(input: &QualityAssessmentInput, config: &CommodityQualityConfig) -> QualityAssessmentResult {
    assess_quality_with(input, config, &RecommendationTable::builtin())
}

/// [`assess_quality`] with a caller-supplied recommendation table.
pub fn assess_quality_with(
    input: &QualityAssessmentInput,
    config: &CommodityQualityConfig,
    table: &RecommendationTable,
) -> QualityAssessmentResult {
    let mut parameter_results = Vec::with_capacity(config.parameters.len());

    for parameter in &config.parameters {
        let Some(&value) = input.parameter_values.get(&parameter.id) else {
            tracing::debug!(parameter = %parameter.id, "no value supplied, skipping");
            continue;
        };

        parameter_results.push(ParameterResult {
            parameter_id: parameter.id.clone(),
            parameter_name: parameter.name.clone(),
            value,
            unit: parameter.unit.clone(),
            grade: determine_grade(value, &parameter.thresholds),
        });
    }

    build_result(input, config, parameter_results, table)
}

/// Validate the input first, then grade with band C range-checked as well.
pub fn assess_quality_strict(
    input: &QualityAssessmentInput,
    config: &CommodityQualityConfig,
) -> Result<QualityAssessmentResult, AnalysisError> {
    let validation = validate_assessment_input(input, config);
    if !validation.is_valid {
        return Err(AnalysisError::InvalidInput(validation.errors));
    }

    let mut parameter_results = Vec::with_capacity(config.parameters.len());
    for parameter in &config.parameters {
        // validation guarantees presence
        let Some(&value) = input.parameter_values.get(&parameter.id) else {
            continue;
        };
        parameter_results.push(ParameterResult {
            parameter_id: parameter.id.clone(),
            parameter_name: parameter.name.clone(),
            value,
            unit: parameter.unit.clone(),
            grade: determine_grade_strict(value, &parameter.thresholds)?,
        });
    }

    if parameter_results.is_empty() {
        return Err(AnalysisError::EmptyGrades);
    }

    Ok(build_result(input, config, parameter_results, &RecommendationTable::builtin()))
}

fn build_result(
    input: &QualityAssessmentInput,
    config: &CommodityQualityConfig,
    parameter_results: Vec<ParameterResult>,
    table: &RecommendationTable,
) -> QualityAssessmentResult {
    let grades: Vec<Grade> = parameter_results.iter().map(|r| r.grade).collect();
    let overall_grade = calculate_overall_grade(&grades).unwrap_or(Grade::C);
    let recommendations = table.generate(&input.commodity_type, &parameter_results);

    QualityAssessmentResult {
        commodity_type: input.commodity_type.clone(),
        commodity_name: config.name.clone(),
        overall_grade,
        grade_label: overall_grade.label().to_string(),
        is_retail_ready: overall_grade.is_retail_ready(),
        parameter_results,
        recommendations,
        assessed_at: Utc::now(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Check that every configured parameter has a finite, non-negative value.
///
/// Advisory only: [`assess_quality`] does not call this.
pub fn validate_assessment_input(
    input: &QualityAssessmentInput,
    config: &CommodityQualityConfig,
) -> ValidationReport {
    let mut errors = Vec::new();

    for parameter in &config.parameters {
        match input.parameter_values.get(&parameter.id) {
            None => errors.push(format!("{} harus diisi.", parameter.name)),
            Some(value) if !value.is_finite() => {
                errors.push(format!("{} harus berupa angka.", parameter.name))
            }
            Some(value) if *value < 0.0 => {
                errors.push(format!("{} tidak boleh negatif.", parameter.name))
            }
            Some(_) => {}
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Count of results per grade; every grade is present, possibly with 0.
pub fn grade_distribution(results: &[ParameterResult]) -> BTreeMap<Grade, usize> {
    let mut distribution = BTreeMap::from([(Grade::A, 0), (Grade::B, 0), (Grade::C, 0)]);
    for result in results {
        *distribution.entry(result.grade).or_insert(0) += 1;
    }
    distribution
}

/// 0-100 index averaging A=100, B=70, C=40. `None` when there are no results.
pub fn calculate_quality_index(results: &[ParameterResult]) -> Option<f64> {
    if results.is_empty() {
        return None;
    }
    let total: f64 = results
        .iter()
        .map(|r| match r.grade {
            Grade::A => 100.0,
            Grade::B => 70.0,
            Grade::C => 40.0,
        })
        .sum();
    Some(total / results.len() as f64)
}

/// The `limit` lowest-graded results, worst first; ties keep result order.
pub fn worst_parameters(results: &[ParameterResult], limit: usize) -> Vec<ParameterResult> {
    let mut sorted = results.to_vec();
    sorted.sort_by_key(|r| r.grade.rank());
    sorted.truncate(limit);
    sorted
}
