pub mod assess;
pub mod grade;
pub mod recommendations;

pub use assess::{
    assess_quality, assess_quality_strict, assess_quality_with, calculate_quality_index,
    grade_distribution, validate_assessment_input, worst_parameters, ValidationReport,
};
pub use grade::{calculate_overall_grade, determine_grade, determine_grade_strict};
pub use recommendations::{generate_recommendations, RecommendationLevel, RecommendationTable};
