use crate::cli::tests::fake_args;
use crate::map;
use crate::map::config::{ConfigError, WidgetConfig};
use crate::map::consts::default_overlay;
use crate::map::models::{LatLng, RenderMode};
use crate::map::overlay::PolygonGeometry;
use std::fs;
use std::path::PathBuf;

fn write_temp_config(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("geopin-{}.json", uuid::Uuid::new_v4()));
    fs::write(&path, contents).expect("Failed to write temporary widget config.");
    path
}

#[test]
fn test_default_config_is_valid() {
    let widget_config = map::init(&fake_args()).unwrap();

    assert_eq!(widget_config, WidgetConfig::default());
    assert_eq!(
        widget_config.map.location.center,
        LatLng::new(59.618922936523404, 42.46392713202458)
    );
    assert_eq!(widget_config.map.mode, RenderMode::Vector);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let path = write_temp_config(
        r#"{
            "map": {
                "location": {"center": [55.75, 37.61], "zoom": 12},
                "worldOptions": {"cycledX": false},
                "className": "ymaps",
                "camera": {"azimuth": 0, "easing": "linear", "tilt": 10},
                "copyrightsPosition": "top right",
                "mode": "raster",
                "zoomRange": {"min": 4, "max": 18}
            },
            "markerImage": "/static/custom.png"
        }"#,
    );
    let mut args = fake_args();
    args.widget_config = Some(path.clone());

    let widget_config = map::init(&args).unwrap();
    fs::remove_file(path).unwrap();

    assert_eq!(widget_config.map.location.center, LatLng::new(55.75, 37.61));
    assert_eq!(widget_config.map.mode, RenderMode::Raster);
    assert!(!widget_config.map.world_options.cycled_x);
    assert_eq!(widget_config.marker_image, "/static/custom.png");
    assert_eq!(widget_config.overlay, WidgetConfig::default().overlay);
}

#[test]
fn test_missing_file() {
    let mut args = fake_args();
    args.widget_config = Some(PathBuf::from("/definitely/not/here.json"));

    let error = map::init(&args).unwrap_err();

    assert!(matches!(error, ConfigError::Read { .. }));
}

#[test]
fn test_malformed_file() {
    let path = write_temp_config("{ not json");
    let mut args = fake_args();
    args.widget_config = Some(path.clone());

    let error = map::init(&args).unwrap_err();
    fs::remove_file(path).unwrap();

    assert!(matches!(error, ConfigError::Parse { .. }));
}

#[test]
fn test_zoom_outside_range() {
    let mut widget_config = WidgetConfig::default();
    widget_config.map.location.zoom = 3.0;

    assert!(matches!(
        widget_config.validate(),
        Err(ConfigError::ZoomOutOfRange { .. })
    ));
}

#[test]
fn test_inverted_zoom_range() {
    let mut widget_config = WidgetConfig::default();
    widget_config.map.zoom_range.min = 20.0;

    assert!(matches!(
        widget_config.validate(),
        Err(ConfigError::InvertedZoomRange { .. })
    ));
}

#[test]
fn test_overlay_rings() {
    let mut widget_config = WidgetConfig::default();
    widget_config.overlay.geometry.coordinates[1].truncate(3);
    assert!(matches!(
        widget_config.validate(),
        Err(ConfigError::RingTooShort { ring: 1, points: 3 })
    ));

    widget_config.overlay.geometry.coordinates.clear();
    assert!(matches!(
        widget_config.validate(),
        Err(ConfigError::EmptyOverlay)
    ));
}

#[test]
fn test_default_overlay_has_boundary_and_one_hole() {
    let overlay = default_overlay();

    let outer = overlay.geometry.outer_ring().unwrap();
    assert_eq!(outer.len(), 9);
    assert_eq!(outer.first(), outer.last());
    assert_eq!(overlay.geometry.holes().len(), 1);
    assert_eq!(overlay.geometry.holes()[0].len(), 7);
}

#[test]
fn test_geometry_serializes_as_coordinate_arrays() {
    let geometry = PolygonGeometry::polygon(vec![vec![
        LatLng::new(1.0, 2.0),
        LatLng::new(3.0, 4.0),
    ]]);

    let json = serde_json::to_value(&geometry).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "type": "Polygon",
            "coordinates": [[[1.0, 2.0], [3.0, 4.0]]],
        })
    );
}
