use serde::{Deserialize, Serialize};

/// A coordinate pair as the map SDK reports it: a two-element array whose first slot is
/// treated as latitude and second as longitude.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Formats the pair the way the geocoder's `geocode` parameter expects it. Rust float
    /// formatting never uses exponents and keeps the sign of zero (`0.0000001,-0`).
    pub fn to_geocode_query(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self::new(lat, lng)
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(latlng: LatLng) -> Self {
        [latlng.lat, latlng.lng]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub center: LatLng,
    pub zoom: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldOptions {
    /// Whether the map repeats horizontally when panned past the antimeridian.
    pub cycled_x: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub azimuth: f64,
    pub easing: String,
    pub tilt: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomRange {
    pub min: f64,
    pub max: f64,
}

impl ZoomRange {
    pub fn contains(&self, zoom: f64) -> bool {
        self.min <= zoom && zoom <= self.max
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Vector,
    Raster,
}

/// Options handed to the SDK's map constructor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub location: Location,
    pub world_options: WorldOptions,
    pub class_name: String,
    pub camera: Camera,
    pub copyrights_position: String,
    pub mode: RenderMode,
    pub zoom_range: ZoomRange,
}
