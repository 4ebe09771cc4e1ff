use thiserror::Error;

/// Errors raised by the strict analysis paths and by id lookups.
///
/// The lenient engine functions never return these; they fall back to neutral
/// values instead.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("cannot compute an overall grade from zero parameter grades")]
    EmptyGrades,

    #[error("value {value} is outside every grade band")]
    OutOfDomain { value: f64 },

    #[error("no quality configuration for commodity type '{0}'")]
    UnknownCommodityType(String),

    #[error("no commodity with id '{0}'")]
    UnknownCommodity(String),

    #[error("no region with id '{0}'")]
    UnknownRegion(String),

    #[error("assessment input is invalid: {}", .0.join("; "))]
    InvalidInput(Vec<String>),
}
