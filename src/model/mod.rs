pub mod commodity;
pub mod market;
pub mod quality;
pub mod region;

pub use commodity::{
    rca_status, Commodity, CommodityCategory, CommodityData, CommodityWithAnalysis,
    HistoricalData, RcaData, RcaStatus, TrendDirection,
};
pub use market::{
    Allocation, Feasibility, MarketAnalysisResult, MarketTarget, RegionSurplusDeficit,
    SurplusDeficitStatus, SurplusDeficitSummary,
};
pub use quality::{
    CommodityQualityConfig, Grade, GradeThresholds, ParameterResult, QualityAssessmentInput,
    QualityAssessmentResult, QualityParameter, QualityThreshold,
};
pub use region::{District, Province, Regency, RegionData, RegionMatch};
