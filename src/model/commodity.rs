use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommodityCategory {
    Pertanian,
    Peternakan,
    Perikanan,
    Perkebunan,
}

impl CommodityCategory {
    pub fn label(&self) -> &'static str {
        match self {
            CommodityCategory::Pertanian => "Pertanian",
            CommodityCategory::Peternakan => "Peternakan",
            CommodityCategory::Perikanan => "Perikanan",
            CommodityCategory::Perkebunan => "Perkebunan",
        }
    }
}

impl std::str::FromStr for CommodityCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pertanian" => Ok(CommodityCategory::Pertanian),
            "peternakan" => Ok(CommodityCategory::Peternakan),
            "perikanan" => Ok(CommodityCategory::Perikanan),
            "perkebunan" => Ok(CommodityCategory::Perkebunan),
            other => Err(format!("unknown commodity category '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    pub fn symbol(&self) -> &'static str {
        match self {
            TrendDirection::Up => "↑",
            TrendDirection::Down => "↓",
            TrendDirection::Stable => "→",
        }
    }
}

/// Qualitative reading of an RCA score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RcaStatus {
    /// RCA >= 1: the region out-specialises the nation.
    Unggulan,
    Potensial,
    Rendah,
}

pub fn rca_status(score: f64) -> RcaStatus {
    if score >= 1.0 {
        RcaStatus::Unggulan
    } else if score >= 0.5 {
        RcaStatus::Potensial
    } else {
        RcaStatus::Rendah
    }
}

/// Current production snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommodityData {
    pub production: f64,
    pub land_area: f64,
    pub economic_value: f64,
    pub productivity_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalData {
    pub year: i32,
    pub production: f64,
    pub land_area: f64,
    pub economic_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RcaData {
    pub regional_production: f64,
    pub national_production: f64,
    pub regional_total: f64,
    pub national_total: f64,
    pub rca_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commodity {
    pub id: String,
    pub name: String,
    pub category: CommodityCategory,
    pub region_id: String,
    pub data: CommodityData,
    /// Yearly snapshots, oldest first.
    #[serde(default)]
    pub historical: Vec<HistoricalData>,
    pub rca_data: RcaData,
}

/// A commodity plus the fields derived by one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommodityWithAnalysis {
    #[serde(flatten)]
    pub commodity: Commodity,
    pub trend: TrendDirection,
    pub productivity_score: f64,
    pub final_score: f64,
}

impl CommodityWithAnalysis {
    pub fn rca_score(&self) -> f64 {
        self.commodity.rca_data.rca_score
    }

    pub fn rca_status(&self) -> RcaStatus {
        rca_status(self.rca_score())
    }
}
