use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub transmigration_areas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Regency {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub districts: Vec<District>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Province {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub regencies: Vec<Regency>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionData {
    pub provinces: Vec<Province>,
}

/// Result of a hierarchical id search. Ancestors of the matched node are filled
/// in; everything is `None` when nothing matched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RegionMatch<'a> {
    pub province: Option<&'a Province>,
    pub regency: Option<&'a Regency>,
    pub district: Option<&'a District>,
}

impl RegionMatch<'_> {
    pub fn is_empty(&self) -> bool {
        self.province.is_none() && self.regency.is_none() && self.district.is_none()
    }

    /// Coordinates of the most specific matched node.
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.district
            .map(|d| d.coordinates)
            .or_else(|| self.regency.map(|r| r.coordinates))
            .or_else(|| self.province.map(|p| p.coordinates))
    }
}

impl RegionData {
    /// Depth-first search by id across provinces, regencies and districts.
    pub fn find_by_id(&self, region_id: &str) -> RegionMatch<'_> {
        for province in &self.provinces {
            if province.id == region_id {
                return RegionMatch {
                    province: Some(province),
                    ..RegionMatch::default()
                };
            }
            for regency in &province.regencies {
                if regency.id == region_id {
                    return RegionMatch {
                        province: Some(province),
                        regency: Some(regency),
                        district: None,
                    };
                }
                for district in &regency.districts {
                    if district.id == region_id {
                        return RegionMatch {
                            province: Some(province),
                            regency: Some(regency),
                            district: Some(district),
                        };
                    }
                }
            }
        }
        RegionMatch::default()
    }

    /// Name of the most specific node with this id, or `"Unknown"`.
    pub fn region_name(&self, region_id: &str) -> String {
        let found = self.find_by_id(region_id);
        if let Some(district) = found.district {
            district.name.clone()
        } else if let Some(regency) = found.regency {
            regency.name.clone()
        } else if let Some(province) = found.province {
            province.name.clone()
        } else {
            "Unknown".to_string()
        }
    }

    /// "Province > Regency > District" down to the matched node; empty if not found.
    pub fn full_path(&self, region_id: &str) -> String {
        let found = self.find_by_id(region_id);
        let mut parts = Vec::new();
        if let Some(province) = found.province {
            parts.push(province.name.as_str());
        }
        if let Some(regency) = found.regency {
            parts.push(regency.name.as_str());
        }
        if let Some(district) = found.district {
            parts.push(district.name.as_str());
        }
        parts.join(" > ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RegionData {
        RegionData {
            provinces: vec![Province {
                id: "kalteng".to_string(),
                name: "Kalimantan Tengah".to_string(),
                coordinates: Coordinates(-1.68, 113.38),
                regencies: vec![Regency {
                    id: "kalteng-kotim".to_string(),
                    name: "Kotawaringin Timur".to_string(),
                    coordinates: Coordinates(-2.5389, 112.9519),
                    districts: vec![District {
                        id: "kotim-parenggean".to_string(),
                        name: "Parenggean".to_string(),
                        coordinates: Coordinates(-2.2, 112.7),
                        transmigration_areas: vec!["SP 1 Parenggean".to_string()],
                    }],
                }],
            }],
        }
    }

    #[test]
    fn test_find_province() {
        let data = sample();
        let found = data.find_by_id("kalteng");
        assert!(found.province.is_some());
        assert!(found.regency.is_none());
        assert!(found.district.is_none());
    }

    #[test]
    fn test_find_district_fills_ancestors() {
        let data = sample();
        let found = data.find_by_id("kotim-parenggean");
        assert_eq!(found.province.unwrap().id, "kalteng");
        assert_eq!(found.regency.unwrap().id, "kalteng-kotim");
        assert_eq!(found.district.unwrap().name, "Parenggean");
        assert_eq!(found.coordinates(), Some(Coordinates(-2.2, 112.7)));
    }

    #[test]
    fn test_find_missing_is_empty() {
        let data = sample();
        let found = data.find_by_id("nowhere");
        assert!(found.is_empty());
        assert_eq!(found.coordinates(), None);
    }

    #[test]
    fn test_region_name() {
        let data = sample();
        assert_eq!(data.region_name("kalteng-kotim"), "Kotawaringin Timur");
        assert_eq!(data.region_name("nowhere"), "Unknown");
    }

    #[test]
    fn test_full_path() {
        let data = sample();
        assert_eq!(
            data.full_path("kotim-parenggean"),
            "Kalimantan Tengah > Kotawaringin Timur > Parenggean"
        );
        assert_eq!(data.full_path("kalteng"), "Kalimantan Tengah");
        assert_eq!(data.full_path("nowhere"), "");
    }
}
