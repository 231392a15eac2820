use crate::map::models::{
    Camera, LatLng, Location, MapOptions, RenderMode, WorldOptions, ZoomRange,
};
use crate::map::overlay::{OverlayFeature, OverlayStyle, PolygonGeometry, Stroke};

pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 59.618922936523404,
    lng: 42.46392713202458,
};
pub const DEFAULT_ZOOM: f64 = 15.0;
pub const DEFAULT_ZOOM_RANGE: ZoomRange = ZoomRange {
    min: 10.0,
    max: 19.0,
};
pub const DEFAULT_MARKER_IMAGE: &str = "/static/pointer.png";
pub const OVERLAY_FEATURE_ID: &str = "branch";

const OUTER_RING: [[f64; 2]; 9] = [
    [59.6022892, 42.4717804],
    [59.6172237, 42.4738695],
    [59.6197987, 42.4648792],
    [59.6161079, 42.464436],
    [59.6155071, 42.4664621],
    [59.6118164, 42.4660822],
    [59.6113229, 42.4673802],
    [59.6038556, 42.4663988],
    [59.6022892, 42.4717804],
];

const HOLE_RING: [[f64; 2]; 7] = [
    [59.621172, 42.4607319],
    [59.6232748, 42.4609851],
    [59.6252918, 42.4622832],
    [59.627738, 42.4637712],
    [59.6330166, 42.4588955],
    [59.6240902, 42.4512964],
    [59.6211666, 42.460724],
];

pub fn default_map_options() -> MapOptions {
    MapOptions {
        location: Location {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        },
        world_options: WorldOptions { cycled_x: true },
        class_name: String::from("ymaps"),
        camera: Camera {
            azimuth: 0.0,
            easing: String::from("ease-in-out"),
            tilt: 0.0,
        },
        copyrights_position: String::from("bottom left"),
        mode: RenderMode::Vector,
        zoom_range: DEFAULT_ZOOM_RANGE,
    }
}

pub fn default_overlay() -> OverlayFeature {
    let rings: Vec<Vec<LatLng>> = [OUTER_RING.as_slice(), HOLE_RING.as_slice()]
        .into_iter()
        .map(|ring| ring.iter().copied().map(LatLng::from).collect::<Vec<_>>())
        .collect();
    OverlayFeature {
        id: String::from(OVERLAY_FEATURE_ID),
        geometry: PolygonGeometry::polygon(rings),
        style: OverlayStyle {
            fill: String::from("rgba(255, 217, 0, 0.78)"),
            stroke: vec![Stroke {
                color: String::from("rgb(255, 166, 0)"),
                width: 2.0,
            }],
        },
    }
}
