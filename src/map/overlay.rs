use crate::map::models::LatLng;
use serde::{Deserialize, Serialize};

/// A polygon drawn on top of the base tiles to highlight an area of interest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlayFeature {
    pub id: String,
    pub geometry: PolygonGeometry,
    pub style: OverlayStyle,
}

/// GeoJSON-like polygon: the first ring is the outer boundary, the rest are holes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolygonGeometry {
    pub r#type: PolygonType,
    pub coordinates: Vec<Vec<LatLng>>,
}

impl PolygonGeometry {
    pub fn polygon(rings: Vec<Vec<LatLng>>) -> Self {
        Self {
            r#type: PolygonType::Polygon,
            coordinates: rings,
        }
    }

    pub fn outer_ring(&self) -> Option<&[LatLng]> {
        self.coordinates.first().map(Vec::as_slice)
    }

    pub fn holes(&self) -> &[Vec<LatLng>] {
        self.coordinates.get(1..).unwrap_or_default()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PolygonType {
    Polygon,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    pub fill: String,
    pub stroke: Vec<Stroke>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}
