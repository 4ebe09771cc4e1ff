use crate::error::AnalysisError;
use crate::model::{Grade, GradeThresholds};

/// Grade a measured value against a parameter's bands.
///
/// A is checked first, then B; anything else is C. Band C itself is never
/// range-checked, so values outside every band (including negatives) grade C.
pub fn determine_grade(value: f64, thresholds: &GradeThresholds) -> Grade {
    if thresholds.a.contains(value) {
        Grade::A
    } else if thresholds.b.contains(value) {
        Grade::B
    } else {
        Grade::C
    }
}

/// Like [`determine_grade`] but also requires the value to fall inside band C
/// when it misses A and B.
pub fn determine_grade_strict(value: f64, thresholds: &GradeThresholds) -> Result<Grade, AnalysisError> {
    match determine_grade(value, thresholds) {
        Grade::C if !thresholds.c.contains(value) => Err(AnalysisError::OutOfDomain { value }),
        grade => Ok(grade),
    }
}

/// Average the grade ranks (A=3, B=2, C=1): >= 2.5 is A, >= 1.5 is B, else C.
///
/// Returns `None` for an empty slice.
pub fn calculate_overall_grade(grades: &[Grade]) -> Option<Grade> {
    if grades.is_empty() {
        return None;
    }

    let total: u32 = grades.iter().map(|g| u32::from(g.rank())).sum();
    let average = f64::from(total) / grades.len() as f64;

    Some(if average >= 2.5 {
        Grade::A
    } else if average >= 1.5 {
        Grade::B
    } else {
        Grade::C
    })
}
