use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::geo::CoordinateTable;
use crate::ranking::ScoringConfig;

/// Top-level configuration file.
///
/// Example YAML:
/// ```yaml
/// data:
///   data_dir: /srv/komoditas
/// scoring:
///   weights: { rca: 0.7, productivity: 0.3 }
/// coordinates:
///   fallback: [-2.5489, 118.0149]
///   regions:
///     jakarta: [-6.2088, 106.8456]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Region coordinates used for distance estimates
    #[serde(default)]
    pub coordinates: CoordinateTable,
}

/// Locations of the static datasets. File names are resolved against
/// `data_dir` unless they are absolute.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct DataConfig {
    pub data_dir: PathBuf,
    pub commodities: PathBuf,
    pub regions: PathBuf,
    pub quality_thresholds: PathBuf,
    pub surplus_deficit: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            commodities: PathBuf::from("commodities.json"),
            regions: PathBuf::from("regions.json"),
            quality_thresholds: PathBuf::from("quality-thresholds.json"),
            surplus_deficit: PathBuf::from("national-data.json"),
        }
    }
}

impl DataConfig {
    pub fn resolve(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.data_dir.join(file)
        }
    }

    pub fn commodities_path(&self) -> PathBuf {
        self.resolve(&self.commodities)
    }

    pub fn regions_path(&self) -> PathBuf {
        self.resolve(&self.regions)
    }

    pub fn quality_thresholds_path(&self) -> PathBuf {
        self.resolve(&self.quality_thresholds)
    }

    pub fn surplus_deficit_path(&self) -> PathBuf {
        self.resolve(&self.surplus_deficit)
    }
}
