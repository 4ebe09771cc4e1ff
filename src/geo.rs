//! Great-circle distance estimation and region coordinate lookup.

use serde::{Deserialize, Serialize, Serializer};
use serde_saphyr::FlowSeq;
use std::collections::BTreeMap;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Rough geographic centre of Indonesia, used when a region id has no entry.
pub const NATIONAL_CENTROID: Coordinates = Coordinates(-2.5489, 118.0149);

/// A `[latitude, longitude]` pair in decimal degrees.
///
/// Serializes as a two-element array so dataset files can write `[-6.2, 106.8]`.
/// YAML output uses flow style so the pair reads back as written.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates(pub f64, pub f64);

impl Serialize for Coordinates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FlowSeq([self.0, self.1]).serialize(serializer)
    }
}

impl Coordinates {
    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lon(&self) -> f64 {
        self.1
    }
}

/// Haversine distance between two points, rounded to the nearest kilometre.
pub fn estimate_distance(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat() - from.lat()).to_radians();
    let d_lon = (to.lon() - from.lon()).to_radians();
    let lat1 = from.lat().to_radians();
    let lat2 = to.lat().to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS_KM * c).round()
}

/// Resolves a region id to coordinates. Implementations never fail; unknown ids
/// resolve to some fallback point.
pub trait CoordinateLookup {
    fn coordinates(&self, region_id: &str) -> Coordinates;
}

/// Fixed region id -> coordinate table with a fallback for unknown ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoordinateTable {
    #[serde(default = "default_fallback")]
    pub fallback: Coordinates,

    #[serde(default = "default_regions")]
    pub regions: BTreeMap<String, Coordinates>,
}

fn default_fallback() -> Coordinates {
    NATIONAL_CENTROID
}

fn default_regions() -> BTreeMap<String, Coordinates> {
    [
        ("jakarta", Coordinates(-6.2088, 106.8456)),
        ("jabar-bandung", Coordinates(-6.9175, 107.6191)),
        ("jatim-surabaya", Coordinates(-7.2575, 112.7521)),
        ("banten-tangerang", Coordinates(-6.1702, 106.6403)),
        ("jabar-bekasi", Coordinates(-6.2383, 106.9756)),
        ("kalteng-kotim", Coordinates(-2.5389, 112.9519)),
        ("sulsel-luwu", Coordinates(-2.5500, 120.3500)),
        ("sumsel-oki", Coordinates(-3.4167, 105.0833)),
        ("lampung-mesuji", Coordinates(-3.9667, 105.5833)),
        ("papua-merauke", Coordinates(-8.4833, 140.4000)),
    ]
    .into_iter()
    .map(|(id, coords)| (id.to_string(), coords))
    .collect()
}

impl CoordinateTable {
    pub fn new(fallback: Coordinates) -> Self {
        Self {
            fallback,
            regions: BTreeMap::new(),
        }
    }

    pub fn with_region(mut self, region_id: impl Into<String>, coordinates: Coordinates) -> Self {
        self.regions.insert(region_id.into(), coordinates);
        self
    }
}

impl Default for CoordinateTable {
    fn default() -> Self {
        Self {
            fallback: NATIONAL_CENTROID,
            regions: default_regions(),
        }
    }
}

impl CoordinateLookup for CoordinateTable {
    fn coordinates(&self, region_id: &str) -> Coordinates {
        match self.regions.get(region_id) {
            Some(coords) => *coords,
            None => {
                tracing::debug!(region_id, "no coordinates for region, using fallback");
                self.fallback
            }
        }
    }
}
