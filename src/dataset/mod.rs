//! Loaders for the static JSON datasets.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::model::{Commodity, CommodityQualityConfig, RegionData, RegionSurplusDeficit};

#[derive(Deserialize)]
struct CommodityFile {
    commodities: Vec<Commodity>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SurplusDeficitFile {
    surplus_deficit_data: Vec<RegionSurplusDeficit>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open dataset at {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse dataset at {}", path.display()))
}

pub fn load_commodities(path: &Path) -> Result<Vec<Commodity>> {
    let file: CommodityFile = read_json(path)?;
    tracing::info!(path = %path.display(), count = file.commodities.len(), "loaded commodities");
    Ok(file.commodities)
}

pub fn load_regions(path: &Path) -> Result<RegionData> {
    let regions: RegionData = read_json(path)?;
    tracing::info!(path = %path.display(), provinces = regions.provinces.len(), "loaded regions");
    Ok(regions)
}

/// Quality configuration keyed by commodity type (`padi`, `jagung`, ...).
pub fn load_quality_thresholds(path: &Path) -> Result<BTreeMap<String, CommodityQualityConfig>> {
    let configs: BTreeMap<String, CommodityQualityConfig> = read_json(path)?;
    tracing::info!(path = %path.display(), types = configs.len(), "loaded quality thresholds");
    Ok(configs)
}

pub fn load_surplus_deficit(path: &Path) -> Result<Vec<RegionSurplusDeficit>> {
    let file: SurplusDeficitFile = read_json(path)?;
    tracing::info!(
        path = %path.display(),
        count = file.surplus_deficit_data.len(),
        "loaded surplus/deficit records"
    );
    Ok(file.surplus_deficit_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SurplusDeficitStatus;
    use std::path::PathBuf;

    fn data_file(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
    }

    #[test]
    fn test_load_commodities() {
        crate::logging::init_test();
        let commodities = load_commodities(&data_file("commodities.json")).unwrap();
        assert!(!commodities.is_empty());

        let padi = commodities.iter().find(|c| c.id == "padi-kotim").unwrap();
        assert_eq!(padi.name, "Padi");
        assert_eq!(padi.historical.len(), 3);
        assert!(padi.rca_data.rca_score > 1.0);
    }

    #[test]
    fn test_load_regions() {
        let regions = load_regions(&data_file("regions.json")).unwrap();
        assert_eq!(
            regions.full_path("kalteng-kotim-cempaga"),
            "Kalimantan Tengah > Kotawaringin Timur > Cempaga"
        );
    }

    #[test]
    fn test_load_quality_thresholds() {
        let configs = load_quality_thresholds(&data_file("quality-thresholds.json")).unwrap();
        let keys: Vec<&str> = configs.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["jagung", "kopi", "padi"]);
        assert_eq!(configs["padi"].parameters.len(), 4);
    }

    #[test]
    fn test_load_surplus_deficit() {
        let records = load_surplus_deficit(&data_file("national-data.json")).unwrap();
        let jakarta = records
            .iter()
            .find(|r| r.region_id == "jakarta" && r.commodity_id == "padi")
            .unwrap();
        assert_eq!(jakarta.status, SurplusDeficitStatus::Deficit);
        assert!(jakarta.surplus < 0.0);
    }

    #[test]
    fn test_missing_file_has_path_context() {
        let err = load_commodities(Path::new("/nonexistent/commodities.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/commodities.json"));
    }
}
