use crate::map::consts::{default_map_options, default_overlay, DEFAULT_MARKER_IMAGE};
use crate::map::models::MapOptions;
use crate::map::overlay::OverlayFeature;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Minimum number of points in a polygon ring that the SDK will draw.
const MIN_RING_POINTS: usize = 4;

/// Everything a widget instance needs to build its map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub map: MapOptions,
    pub overlay: OverlayFeature,
    pub marker_image: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            map: default_map_options(),
            overlay: default_overlay(),
            marker_image: String::from(DEFAULT_MARKER_IMAGE),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read widget config {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse widget config {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("zoom range is inverted: min {min} > max {max}")]
    InvertedZoomRange { min: f64, max: f64 },
    #[error("initial zoom {zoom} is outside of [{min}, {max}]")]
    ZoomOutOfRange { zoom: f64, min: f64, max: f64 },
    #[error("overlay polygon has no rings")]
    EmptyOverlay,
    #[error("overlay ring {ring} has {points} points, at least 4 are required")]
    RingTooShort { ring: usize, points: usize },
    #[error("non-finite coordinate in {place}")]
    NonFiniteCoordinate { place: &'static str },
}

impl WidgetConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let zoom_range = self.map.zoom_range;
        if zoom_range.min > zoom_range.max {
            return Err(ConfigError::InvertedZoomRange {
                min: zoom_range.min,
                max: zoom_range.max,
            });
        }
        let zoom = self.map.location.zoom;
        if !zoom_range.contains(zoom) {
            return Err(ConfigError::ZoomOutOfRange {
                zoom,
                min: zoom_range.min,
                max: zoom_range.max,
            });
        }
        if !self.map.location.center.is_finite() {
            return Err(ConfigError::NonFiniteCoordinate {
                place: "initial location",
            });
        }

        if self.overlay.geometry.outer_ring().is_none() {
            return Err(ConfigError::EmptyOverlay);
        }
        for (index, ring) in self.overlay.geometry.coordinates.iter().enumerate() {
            if ring.len() < MIN_RING_POINTS {
                return Err(ConfigError::RingTooShort {
                    ring: index,
                    points: ring.len(),
                });
            }
            if !ring.iter().all(|point| point.is_finite()) {
                return Err(ConfigError::NonFiniteCoordinate {
                    place: "overlay polygon",
                });
            }
        }
        Ok(())
    }
}
